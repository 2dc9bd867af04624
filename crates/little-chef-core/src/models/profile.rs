// ABOUTME: Per-child profile with allergens, pantry contents, and dish preferences
// ABOUTME: Defines UserProfile, Preference, BodyMetrics, and the persisted ProfileRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::profile_defaults;

/// Feedback recorded for a dish name.
///
/// A dish holds exactly one preference, so liked and disliked can never
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// No feedback
    #[default]
    Neutral,
    /// Dish is liked
    Liked,
    /// Dish is disliked
    Disliked,
}

/// Display-only body metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Age label
    pub age: String,
    /// Height label (cm)
    pub height: String,
    /// Weight label (kg)
    pub weight: String,
}

impl Default for BodyMetrics {
    fn default() -> Self {
        Self {
            age: profile_defaults::AGE.to_owned(),
            height: profile_defaults::HEIGHT.to_owned(),
            weight: profile_defaults::WEIGHT.to_owned(),
        }
    }
}

/// Mutable per-session profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Child nickname
    pub nickname: String,
    /// Display-only body metrics
    pub metrics: BodyMetrics,
    /// Display-only nutrition goals
    pub nutrition_goals: Vec<String>,
    /// Ingredient names that must never be served
    pub allergens: BTreeSet<String>,
    /// Ingredient names currently on hand
    pub pantry: BTreeSet<String>,
    /// Token for the notification collaborator
    pub notification_token: Option<String>,
    preferences: BTreeMap<String, Preference>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            nickname: profile_defaults::NICKNAME.to_owned(),
            metrics: BodyMetrics::default(),
            nutrition_goals: to_strings(profile_defaults::NUTRITION_GOALS),
            allergens: BTreeSet::new(),
            pantry: to_strings(profile_defaults::PANTRY),
            notification_token: None,
            preferences: BTreeMap::new(),
        }
    }
}

impl UserProfile {
    /// Preference recorded for a dish name
    #[must_use]
    pub fn preference(&self, dish: &str) -> Preference {
        self.preferences.get(dish).copied().unwrap_or_default()
    }

    /// Record a preference. `Neutral` removes the entry.
    pub fn set_preference(&mut self, dish: impl Into<String>, preference: Preference) {
        let dish = dish.into();
        if preference == Preference::Neutral {
            self.preferences.remove(&dish);
        } else {
            self.preferences.insert(dish, preference);
        }
    }

    /// Toggle "like": a liked dish becomes neutral, anything else becomes liked
    pub fn toggle_like(&mut self, dish: &str) -> Preference {
        let next = match self.preference(dish) {
            Preference::Liked => Preference::Neutral,
            Preference::Neutral | Preference::Disliked => Preference::Liked,
        };
        self.set_preference(dish, next);
        next
    }

    /// Toggle "dislike": a disliked dish becomes neutral, anything else becomes disliked
    pub fn toggle_dislike(&mut self, dish: &str) -> Preference {
        let next = match self.preference(dish) {
            Preference::Disliked => Preference::Neutral,
            Preference::Neutral | Preference::Liked => Preference::Disliked,
        };
        self.set_preference(dish, next);
        next
    }

    /// Liked dish names
    pub fn likes(&self) -> impl Iterator<Item = &str> + '_ {
        self.names_with(Preference::Liked)
    }

    /// Disliked dish names
    pub fn dislikes(&self) -> impl Iterator<Item = &str> + '_ {
        self.names_with(Preference::Disliked)
    }

    fn names_with(&self, wanted: Preference) -> impl Iterator<Item = &str> + '_ {
        self.preferences
            .iter()
            .filter(move |(_, p)| **p == wanted)
            .map(|(name, _)| name.as_str())
    }

    /// Add items to the pantry, ignoring blank names. Returns how many were new.
    pub fn stock<I, S>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .filter_map(|item| non_blank(item.as_ref()))
            .filter(|item| self.pantry.insert(item.clone()))
            .count()
    }

    /// Remove an item from the pantry
    pub fn unstock(&mut self, item: &str) -> bool {
        self.pantry.remove(item.trim())
    }

    /// Replace the allergen set from preset selections plus a comma-separated
    /// custom list. Entries are trimmed and blanks dropped.
    pub fn set_allergens<I, S>(&mut self, presets: I, custom: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allergens = presets
            .into_iter()
            .filter_map(|p| non_blank(p.as_ref()))
            .chain(custom.split([',', '，']).filter_map(non_blank))
            .collect();
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn to_strings<C: FromIterator<String>>(items: &[&str]) -> C {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Persisted profile layout.
///
/// Field names match the stored JSON so existing data files keep loading.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    /// Child nickname
    pub nickname: String,
    /// Age label
    pub age: String,
    /// Height label
    pub height: String,
    /// Weight label
    pub weight: String,
    /// Nutrition goals
    pub nutrition_goals: Vec<String>,
    /// Allergens
    pub allergens: Vec<String>,
    /// Pantry contents
    pub fridge_items: Vec<String>,
    /// Notification token
    pub pushplus_token: String,
    /// Disliked dish names
    pub dislikes: Vec<String>,
    /// Liked dish names
    pub likes: Vec<String>,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self::from(&UserProfile::default())
    }
}

impl From<&UserProfile> for ProfileRecord {
    fn from(profile: &UserProfile) -> Self {
        Self {
            nickname: profile.nickname.clone(),
            age: profile.metrics.age.clone(),
            height: profile.metrics.height.clone(),
            weight: profile.metrics.weight.clone(),
            nutrition_goals: profile.nutrition_goals.clone(),
            allergens: profile.allergens.iter().cloned().collect(),
            fridge_items: profile.pantry.iter().cloned().collect(),
            pushplus_token: profile.notification_token.clone().unwrap_or_default(),
            dislikes: profile.dislikes().map(str::to_owned).collect(),
            likes: profile.likes().map(str::to_owned).collect(),
        }
    }
}

impl From<ProfileRecord> for UserProfile {
    /// Likes are applied before dislikes, so a name stored in both lists
    /// loads as disliked.
    fn from(record: ProfileRecord) -> Self {
        let mut profile = Self {
            nickname: record.nickname,
            metrics: BodyMetrics {
                age: record.age,
                height: record.height,
                weight: record.weight,
            },
            nutrition_goals: record.nutrition_goals,
            allergens: record.allergens.into_iter().collect(),
            pantry: record.fridge_items.into_iter().collect(),
            notification_token: Some(record.pushplus_token).filter(|t| !t.is_empty()),
            preferences: BTreeMap::new(),
        };
        for name in record.likes {
            profile.set_preference(name, Preference::Liked);
        }
        for name in record.dislikes {
            profile.set_preference(name, Preference::Disliked);
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_has_starter_pantry() {
        let profile = UserProfile::default();
        assert_eq!(profile.nickname, "Bingo");
        assert!(profile.allergens.is_empty());
        for item in ["鸡蛋", "牛肉", "西红柿", "土豆"] {
            assert!(profile.pantry.contains(item));
        }
    }

    #[test]
    fn test_like_and_dislike_are_exclusive() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.toggle_like("蒸水蛋"), Preference::Liked);
        assert_eq!(profile.toggle_dislike("蒸水蛋"), Preference::Disliked);
        assert_eq!(profile.likes().count(), 0);
        assert_eq!(profile.dislikes().collect::<Vec<_>>(), vec!["蒸水蛋"]);

        assert_eq!(profile.toggle_dislike("蒸水蛋"), Preference::Neutral);
        assert_eq!(profile.dislikes().count(), 0);
    }

    #[test]
    fn test_set_allergens_merges_presets_and_custom() {
        let mut profile = UserProfile::default();
        profile.set_allergens(["鸡蛋", "花生"], " 芒果 ,, 鸡蛋，桃子 ");
        let expected: BTreeSet<String> = ["鸡蛋", "花生", "芒果", "桃子"]
            .into_iter()
            .map(str::to_owned)
            .collect();
        assert_eq!(profile.allergens, expected);
    }

    #[test]
    fn test_stock_skips_blank_and_counts_new() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.stock(["鸡蛋", " 虾仁 ", ""]), 1);
        assert!(profile.pantry.contains("虾仁"));
        assert!(profile.unstock("虾仁"));
    }

    #[test]
    fn test_record_with_conflicting_lists_loads_disliked() {
        let record = ProfileRecord {
            likes: vec!["南瓜发糕".into()],
            dislikes: vec!["南瓜发糕".into()],
            ..ProfileRecord::default()
        };
        let profile = UserProfile::from(record);
        assert_eq!(profile.preference("南瓜发糕"), Preference::Disliked);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let record: ProfileRecord = serde_json::from_str(r#"{"nickname":"Bluey"}"#).unwrap();
        assert_eq!(record.nickname, "Bluey");
        assert_eq!(record.age, "2岁");
        assert_eq!(record.fridge_items.len(), 4);
    }
}
