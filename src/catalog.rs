// ABOUTME: Built-in recipe catalog embedded at compile time
// ABOUTME: Parses and validates the bundled JSON once and shares it across sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use little_chef_core::errors::{AppError, AppResult};
use little_chef_core::models::RecipeCatalog;
use tracing::{error, info};

/// Bundled catalog JSON (single source of truth for recipes, fruit, and pantry groups)
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/recipes.json");

static BUILTIN: LazyLock<Result<Arc<RecipeCatalog>, String>> = LazyLock::new(|| {
    RecipeCatalog::from_json(BUILTIN_CATALOG_JSON)
        .map(|catalog| {
            info!(recipes = catalog.recipe_count(), "built-in catalog loaded");
            Arc::new(catalog)
        })
        .map_err(|e| {
            error!("Failed to parse built-in catalog: {e}");
            e.to_string()
        })
});

/// Shared handle to the built-in catalog
///
/// # Errors
///
/// Returns an error if the bundled JSON fails validation
pub fn builtin() -> AppResult<Arc<RecipeCatalog>> {
    BUILTIN.clone().map_err(AppError::internal)
}

/// Load a catalog from a JSON file with the same layout as the built-in one
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation
pub fn from_file(path: &Path) -> AppResult<RecipeCatalog> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read catalog {}", path.display())).with_source(e)
    })?;
    RecipeCatalog::from_json(&json)
}
