// ABOUTME: Menu recommendation engine for the Little Chef meal planner
// ABOUTME: Normalizes ingredients, selects dishes, plans days, swaps slots, derives shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

#![deny(unsafe_code)]

//! # Little Chef Intelligence
//!
//! The decision core of the planner. Everything here is synchronous and pure
//! apart from the caller-supplied random source, so a seeded RNG reproduces a
//! menu exactly.
//!
//! Data flows one way: profile + catalog → [`DishSelector`] → [`MenuPlanner`]
//! → [`derive_shopping_list`]. [`SwapEngine`] re-enters the selector for a
//! single slot.

/// Engine configuration (selection weights)
pub mod config;
/// Ingredient synonym normalization and pantry index
pub mod normalizer;
/// Full-day menu planner
pub mod planner;
/// Weighted dish selection for one slot
pub mod selector;
/// Shopping list derivation
pub mod shopping;
/// Single-slot swaps
pub mod swap;

pub use config::{ConfigError, MenuEngineConfig, SelectionWeights};
pub use normalizer::{normalize, PantryIndex};
pub use planner::{is_red_meat_dish, MenuPlanner};
pub use selector::{DishSelector, ScoredDish, SelectionCriteria};
pub use shopping::{derive_shopping_list, ingredient_status, refresh_shopping_list, IngredientStatus};
pub use swap::{SwapEngine, SwapOutcome};
