// ABOUTME: Configuration module for the menu engine crate
// ABOUTME: Re-exports selection weights, engine configuration, and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

/// Engine configuration (selection weights) with environment overrides
pub mod engine;
/// Configuration validation errors
pub mod error;

pub use engine::{MenuEngineConfig, SelectionWeights};
pub use error::ConfigError;
