// ABOUTME: Ingredient name canonicalization through a static synonym table
// ABOUTME: Provides normalize() and the normalized pantry index used for stock checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! # Ingredient Normalizer
//!
//! Recipes name a specific cut or variety ("牛腩", "基围虾") while the pantry
//! and allergen lists usually record the category ("牛肉", "虾仁"). Every
//! pantry comparison goes through [`normalize`] so both spellings agree.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use little_chef_core::constants::ingredients;

/// Variant → canonical ingredient name
const SYNONYMS: &[(&str, &str)] = &[
    ("番茄", "西红柿"),
    ("洋柿子", "西红柿"),
    ("洋芋", "土豆"),
    ("马铃薯", "土豆"),
    ("大虾", "虾仁"),
    ("基围虾", "虾仁"),
    ("花菜", "西兰花"),
    ("圆白菜", "青菜"),
    ("白菜", "青菜"),
    ("娃娃菜", "青菜"),
    ("牛腩", "牛肉"),
    ("肥牛", "牛肉"),
    ("肉末", "猪肉"),
    ("里脊", "猪肉"),
    ("排骨", "猪肉"),
    ("鸡腿", "鸡肉"),
    ("鸡翅", "鸡肉"),
    ("龙利鱼", "鱼"),
    ("巴沙鱼", "鱼"),
    ("鳕鱼", "鱼"),
];

static SYNONYM_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

/// Canonical form of an ingredient name.
///
/// Trims surrounding whitespace, then maps known variants to their
/// canonical name. Unknown names come back trimmed. Total and idempotent.
#[must_use]
pub fn normalize(name: &str) -> &str {
    let trimmed = name.trim();
    SYNONYM_MAP.get(trimmed).copied().unwrap_or(trimmed)
}

/// Whether an ingredient counts as red meat once normalized
#[must_use]
pub fn is_red_meat(ingredient: &str) -> bool {
    ingredients::is_red_meat(normalize(ingredient))
}

/// Pantry lookup that accepts raw and canonical spellings alike.
///
/// Holds every raw pantry name plus its normalized form.
#[derive(Debug, Clone, Default)]
pub struct PantryIndex {
    items: HashSet<String>,
}

impl PantryIndex {
    /// Build the index from raw pantry names
    pub fn new<I, S>(pantry: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = HashSet::new();
        for raw in pantry {
            let raw = raw.as_ref();
            items.insert(normalize(raw).to_owned());
            items.insert(raw.to_owned());
        }
        Self { items }
    }

    /// Whether the normalized form of a recipe ingredient is in stock
    #[must_use]
    pub fn has(&self, ingredient: &str) -> bool {
        self.items.contains(normalize(ingredient))
    }

    /// Number of a recipe's ingredients that are not in stock
    #[must_use]
    pub fn missing_count(&self, ingredients: &[String]) -> usize {
        ingredients.iter().filter(|i| !self.has(i)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_table_targets_are_canonical() {
        for (_, canonical) in SYNONYMS {
            assert_eq!(normalize(canonical), *canonical);
        }
    }

    #[test]
    fn test_synonym_table_has_no_duplicate_variants() {
        assert_eq!(SYNONYM_MAP.len(), SYNONYMS.len());
    }
}
