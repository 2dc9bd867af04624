// ABOUTME: Main library entry point for the Little Chef meal planner
// ABOUTME: Wires the menu engine to configuration, persistence, collaborators, and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

#![deny(unsafe_code)]

//! # Little Chef
//!
//! Recommends a daily menu (breakfast, lunch, dinner, fruit) for a toddler
//! from a fixed recipe catalog, honoring allergens, pantry contents, and
//! accumulated like/dislike feedback.
//!
//! ## Architecture
//!
//! - **`little_chef_core`**: error types, constants, and domain models
//! - **`little_chef_intelligence`**: normalizer, dish selector, menu planner,
//!   shopping list deriver, and swap engine
//! - **This crate**: configuration, logging, the built-in catalog, JSON
//!   persistence, vision and notification collaborators, the menu card
//!   layout, and per-user sessions
//!
//! ## Example
//!
//! ```rust,no_run
//! use little_chef::config::AppConfig;
//! use little_chef::session::{Session, SessionContext};
//!
//! # fn main() -> little_chef::errors::AppResult<()> {
//! let config = AppConfig::from_env()?;
//! let mut session = Session::open(SessionContext::from_config(&config)?);
//! let menu = session.generate_menu()?;
//! println!("{} items to buy", menu.shopping_list().len());
//! # Ok(())
//! # }
//! ```

/// Built-in recipe catalog
pub mod catalog;
/// Application configuration
pub mod config;
/// Menu card layout
pub mod export;
/// Logging setup
pub mod logging;
/// Notification collaborators
pub mod notifications;
/// External providers (pantry vision)
pub mod providers;
/// Planning sessions
pub mod session;
/// Persistence
pub mod storage;

pub use little_chef_core::{constants, errors, models};
pub use little_chef_intelligence as intelligence;
