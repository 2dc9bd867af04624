// ABOUTME: Core data models for recipes, menus, profiles, and history
// ABOUTME: Re-exports the catalog, menu state, and profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

/// Daily menu state, slots, and history snapshots
pub mod menu;
/// Per-child profile and its persisted record
pub mod profile;
/// Recipes and the static catalog
pub mod recipe;

pub use menu::{DailyMenu, HistoryEntry, HistoryMenu, Meal, SlotKey};
pub use profile::{BodyMetrics, Preference, ProfileRecord, UserProfile};
pub use recipe::{Category, PantryGroup, Recipe, RecipeCatalog};
