// ABOUTME: Shopping list derivation and per-ingredient stock annotation
// ABOUTME: Recomputes missing ingredients for a whole menu against the pantry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::collections::BTreeSet;

use little_chef_core::models::{DailyMenu, Recipe};
use serde::{Deserialize, Serialize};

use crate::normalizer::PantryIndex;

/// Raw ingredient names of the menu's dishes whose normalized form is not in
/// the pantry. Always computed from scratch.
#[must_use]
pub fn derive_shopping_list<I, S>(menu: &DailyMenu, pantry: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pantry = PantryIndex::new(pantry);
    menu.dishes()
        .flat_map(|(_, dish)| dish.ingredients.iter())
        .filter(|ingredient| !pantry.has(ingredient))
        .cloned()
        .collect()
}

/// Re-derive and install the menu's shopping list
pub fn refresh_shopping_list<I, S>(menu: &mut DailyMenu, pantry: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let list = derive_shopping_list(menu, pantry);
    menu.replace_shopping_list(list);
}

/// Stock state of one recipe ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientStatus {
    /// Raw ingredient name as written in the recipe
    pub name: String,
    /// Whether the normalized ingredient is in the pantry
    pub in_stock: bool,
}

/// Per-ingredient stock annotation for display, in recipe order
#[must_use]
pub fn ingredient_status<I, S>(recipe: &Recipe, pantry: I) -> Vec<IngredientStatus>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pantry = PantryIndex::new(pantry);
    recipe
        .ingredients
        .iter()
        .map(|name| IngredientStatus {
            name: name.clone(),
            in_stock: pantry.has(name),
        })
        .collect()
}
