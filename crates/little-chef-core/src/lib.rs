// ABOUTME: Core types and constants for the Little Chef meal planner
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

#![deny(unsafe_code)]

//! # Little Chef Core
//!
//! Foundation crate providing shared types and constants for the Little Chef
//! meal planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Ingredient tables, profile defaults, storage names
//! - **models**: Recipes, catalog, daily menu, profile, history

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `RecipeCatalog`, `DailyMenu`, `UserProfile`, etc.)
pub mod models;
