// ABOUTME: Recipe and catalog models for the fixed, read-only dish collection
// ABOUTME: Defines Recipe, Category, PantryGroup, and RecipeCatalog with JSON loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::menu::SlotKey;
use crate::errors::{AppError, AppResult};

/// Immutable dish record. `name` is unique and acts as the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name (unique key)
    pub name: String,
    /// Raw ingredient names as written by the recipe; duplicates allowed
    pub ingredients: Vec<String>,
    /// Free-text ingredient list with quantities
    #[serde(default)]
    pub full_ingredients: String,
    /// Time estimate label
    #[serde(default)]
    pub time: String,
    /// Difficulty label
    #[serde(default)]
    pub difficulty: String,
    /// Preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Nutrition highlight label
    #[serde(default)]
    pub nutrition: String,
    /// Free-text tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short description
    #[serde(default)]
    pub description: String,
}

impl Recipe {
    /// Create a recipe with ingredients only and empty display metadata
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            full_ingredients: String::new(),
            time: String::new(),
            difficulty: String::new(),
            steps: Vec::new(),
            nutrition: String::new(),
            tags: Vec::new(),
            description: String::new(),
        }
    }

    /// Whether any raw ingredient name equals `ingredient` exactly
    #[must_use]
    pub fn uses(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }
}

/// Catalog category a recipe pool is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Breakfast dishes
    Breakfast,
    /// Lunch meat dishes
    LunchMeat,
    /// Lunch vegetable dishes
    LunchVeg,
    /// Soups, shared by lunch and dinner
    Soup,
    /// Dinner meat dishes (optional, falls back to `LunchMeat`)
    DinnerMeat,
    /// Dinner vegetable dishes (optional, falls back to `LunchVeg`)
    DinnerVeg,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Self; 6] = [
        Self::Breakfast,
        Self::LunchMeat,
        Self::LunchVeg,
        Self::Soup,
        Self::DinnerMeat,
        Self::DinnerVeg,
    ];

    /// Storage key of this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::LunchMeat => "lunch_meat",
            Self::LunchVeg => "lunch_veg",
            Self::Soup => "soup",
            Self::DinnerMeat => "dinner_meat",
            Self::DinnerVeg => "dinner_veg",
        }
    }

    /// Category used when this one has no entries
    #[must_use]
    pub const fn fallback(self) -> Option<Self> {
        match self {
            Self::DinnerMeat => Some(Self::LunchMeat),
            Self::DinnerVeg => Some(Self::LunchVeg),
            Self::Breakfast | Self::LunchMeat | Self::LunchVeg | Self::Soup => None,
        }
    }

    /// Whether the catalog may omit this category
    #[must_use]
    pub const fn is_optional(self) -> bool {
        self.fallback().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown recipe category: {s}")))
    }
}

/// Named group of pantry items offered by the pantry picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryGroup {
    /// Group label
    pub label: String,
    /// Ingredient names in the group
    pub items: Vec<String>,
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: BTreeMap<String, Vec<Recipe>>,
    fruit: Vec<String>,
    #[serde(default)]
    pantry_groups: Vec<PantryGroup>,
}

/// Static, read-only recipe collection grouped by category.
///
/// Loaded once at startup and shared across sessions.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    pools: BTreeMap<Category, Vec<Recipe>>,
    fruit: Vec<String>,
    pantry_groups: Vec<PantryGroup>,
}

impl RecipeCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool of one category
    #[must_use]
    pub fn with_pool(mut self, category: Category, recipes: Vec<Recipe>) -> Self {
        self.pools.insert(category, recipes);
        self
    }

    /// Replace the fruit list
    #[must_use]
    pub fn with_fruit<I, S>(mut self, fruit: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fruit = fruit.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the pantry picker groups
    #[must_use]
    pub fn with_pantry_groups(mut self, groups: Vec<PantryGroup>) -> Self {
        self.pantry_groups = groups;
        self
    }

    /// Parse and validate a catalog from its JSON representation
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown category,
    /// omits a required category or the fruit list, or repeats a dish name
    /// within one category.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut pools = BTreeMap::new();
        for (key, recipes) in file.categories {
            let category: Category = key.parse()?;
            ensure_unique_names(category, &recipes)?;
            pools.insert(category, recipes);
        }

        if let Some(missing) = Category::ALL
            .into_iter()
            .find(|c| !c.is_optional() && !pools.contains_key(c))
        {
            return Err(AppError::invalid_format(format!(
                "Catalog is missing required category {missing}"
            )));
        }

        Ok(Self {
            pools,
            fruit: file.fruit,
            pantry_groups: file.pantry_groups,
        })
    }

    /// Raw pool stored under a category (empty if absent)
    #[must_use]
    pub fn pool(&self, category: Category) -> &[Recipe] {
        self.pools.get(&category).map_or(&[][..], Vec::as_slice)
    }

    /// Effective candidate pool for a menu slot.
    ///
    /// This is the single place where slot → category resolution happens,
    /// including the dinner → lunch fallback for empty optional pools.
    #[must_use]
    pub fn pool_for(&self, slot: SlotKey) -> &[Recipe] {
        let category = slot.category();
        let pool = self.pool(category);
        match category.fallback() {
            Some(fallback) if pool.is_empty() => self.pool(fallback),
            _ => pool,
        }
    }

    /// Flat fruit list
    #[must_use]
    pub fn fruit(&self) -> &[String] {
        &self.fruit
    }

    /// Pantry picker groups
    #[must_use]
    pub fn pantry_groups(&self) -> &[PantryGroup] {
        &self.pantry_groups
    }

    /// Find a dish by name in any category
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.pools.values().flatten().find(|r| r.name == name)
    }

    /// Total number of recipes across categories
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }
}

fn ensure_unique_names(category: Category, recipes: &[Recipe]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in recipes {
        if !seen.insert(recipe.name.as_str()) {
            return Err(AppError::already_exists(format!(
                "Dish {} in category {category}",
                recipe.name
            )));
        }
    }
    Ok(())
}
