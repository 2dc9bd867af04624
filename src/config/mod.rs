// ABOUTME: Configuration module for application settings
// ABOUTME: Re-exports environment-driven application config and engine weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, DEFAULT_SCAN_DELAY_MS};
pub use little_chef_intelligence::config::{ConfigError, MenuEngineConfig, SelectionWeights};
