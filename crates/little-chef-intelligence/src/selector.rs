// ABOUTME: Dish selector that filters unsafe dishes, tiers by pantry, and draws by weight
// ABOUTME: Provides DishSelector, SelectionCriteria, and ScoredDish for one menu slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! # Dish Selector
//!
//! Picks one dish from a candidate pool for a profile:
//!
//! 1. Drop excluded names, dishes with an allergen (exact raw-name match), and,
//!    when asked, dishes with a raw red-meat ingredient. What is left is the
//!    *safe set*.
//! 2. If any safe dish needs nothing from the shop, only those compete.
//! 3. Weight each candidate: base, plus the pantry-complete bonus, plus the
//!    liked bonus; a disliked dish is pinned to the disliked weight instead.
//! 4. Draw proportionally to weight.
//!
//! `None` means the safe set was empty. It is the only "nothing available"
//! signal; no error is raised.

use std::collections::BTreeSet;

use little_chef_core::constants::ingredients;
use little_chef_core::models::{Preference, Recipe, UserProfile};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::debug;

use crate::config::SelectionWeights;
use crate::normalizer::PantryIndex;

/// Per-draw constraints on top of the profile's allergens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCriteria {
    exclude: BTreeSet<String>,
    avoid_red_meat: bool,
}

impl SelectionCriteria {
    /// No exclusions, red meat allowed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a dish by name
    #[must_use]
    pub fn excluding(mut self, name: impl Into<String>) -> Self {
        self.exclude.insert(name.into());
        self
    }

    /// Exclude a dish by name when one is given
    #[must_use]
    pub fn excluding_opt(self, name: Option<&str>) -> Self {
        match name {
            Some(name) => self.excluding(name),
            None => self,
        }
    }

    /// Reject dishes containing a raw red-meat ingredient
    #[must_use]
    pub const fn avoiding_red_meat(mut self) -> Self {
        self.avoid_red_meat = true;
        self
    }

    /// Whether a dish name is excluded
    #[must_use]
    pub fn excludes(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }

    /// Whether red meat is being avoided
    #[must_use]
    pub const fn avoids_red_meat(&self) -> bool {
        self.avoid_red_meat
    }
}

/// A candidate with its pantry gap and selection weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDish<'a> {
    /// Candidate dish
    pub recipe: &'a Recipe,
    /// Ingredients whose normalized form is not in the pantry
    pub missing_count: usize,
    /// Selection weight
    pub weight: u32,
}

impl ScoredDish<'_> {
    /// Whether every ingredient is in stock
    #[must_use]
    pub const fn is_pantry_complete(&self) -> bool {
        self.missing_count == 0
    }
}

/// Weighted-random dish selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DishSelector {
    weights: SelectionWeights,
}

impl DishSelector {
    /// Create a selector with the given weights
    #[must_use]
    pub const fn new(weights: SelectionWeights) -> Self {
        Self { weights }
    }

    /// Weights in use
    #[must_use]
    pub const fn weights(&self) -> &SelectionWeights {
        &self.weights
    }

    /// Safe dishes of a pool, each paired with its missing-ingredient count
    #[must_use]
    pub fn safe_set<'a>(
        &self,
        pool: &'a [Recipe],
        profile: &UserProfile,
        criteria: &SelectionCriteria,
    ) -> Vec<(&'a Recipe, usize)> {
        let pantry = PantryIndex::new(&profile.pantry);
        pool.iter()
            .filter(|dish| !criteria.excludes(&dish.name))
            .filter(|dish| !dish.ingredients.iter().any(|i| profile.allergens.contains(i)))
            .filter(|dish| {
                !(criteria.avoids_red_meat()
                    && dish.ingredients.iter().any(|i| ingredients::is_red_meat(i)))
            })
            .map(|dish| (dish, pantry.missing_count(&dish.ingredients)))
            .collect()
    }

    /// Tiered and weighted candidates. Empty when the safe set is empty.
    #[must_use]
    pub fn candidates<'a>(
        &self,
        pool: &'a [Recipe],
        profile: &UserProfile,
        criteria: &SelectionCriteria,
    ) -> Vec<ScoredDish<'a>> {
        let safe = self.safe_set(pool, profile, criteria);
        let any_complete = safe.iter().any(|(_, missing)| *missing == 0);

        safe.into_iter()
            .filter(|(_, missing)| !any_complete || *missing == 0)
            .map(|(recipe, missing_count)| ScoredDish {
                recipe,
                missing_count,
                weight: self.weight(missing_count, profile.preference(&recipe.name)),
            })
            .collect()
    }

    /// Selection weight for a dish, never below 1.
    ///
    /// Weights built outside [`crate::MenuEngineConfig::load`] are not
    /// validated, so a zero weight is raised to 1 to keep every safe dish
    /// drawable.
    #[must_use]
    pub fn weight(&self, missing_count: usize, preference: Preference) -> u32 {
        let w = &self.weights;
        let weight = match preference {
            Preference::Disliked => w.disliked,
            Preference::Liked | Preference::Neutral => {
                let mut weight = w.base;
                if missing_count == 0 {
                    weight += w.pantry_complete_bonus;
                }
                if preference == Preference::Liked {
                    weight += w.liked_bonus;
                }
                weight
            }
        };
        weight.max(1)
    }

    /// Draw one dish, or `None` if nothing in the pool is safe
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a [Recipe],
        profile: &UserProfile,
        criteria: &SelectionCriteria,
        rng: &mut R,
    ) -> Option<&'a Recipe> {
        let candidates = self.candidates(pool, profile, criteria);
        if candidates.is_empty() {
            debug!(pool_size = pool.len(), "no safe dish in pool");
            return None;
        }

        // Cumulative-weight sampling; equivalent to drawing from a list with
        // each candidate repeated `weight` times.
        let index = WeightedIndex::new(candidates.iter().map(|c| c.weight)).ok()?;
        let chosen = candidates[index.sample(rng)];
        debug!(
            dish = %chosen.recipe.name,
            weight = chosen.weight,
            missing = chosen.missing_count,
            candidates = candidates.len(),
            "dish selected"
        );
        Some(chosen.recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dislike_overrides_every_bonus() {
        let selector = DishSelector::default();
        assert_eq!(selector.weight(0, Preference::Disliked), 1);
        assert_eq!(selector.weight(3, Preference::Disliked), 1);
    }

    #[test]
    fn test_bonuses_stack() {
        let selector = DishSelector::default();
        assert_eq!(selector.weight(2, Preference::Neutral), 10);
        assert_eq!(selector.weight(0, Preference::Neutral), 60);
        assert_eq!(selector.weight(2, Preference::Liked), 110);
        assert_eq!(selector.weight(0, Preference::Liked), 160);
    }

    #[test]
    fn test_criteria_builders() {
        let criteria = SelectionCriteria::new()
            .excluding("清蒸鳕鱼")
            .excluding_opt(None)
            .avoiding_red_meat();
        assert!(criteria.excludes("清蒸鳕鱼"));
        assert!(!criteria.excludes("椰子鸡"));
        assert!(criteria.avoids_red_meat());
    }
}
