// ABOUTME: Daily menu working state, slot identifiers, and archived history entries
// ABOUTME: Defines SlotKey, Meal, DailyMenu, HistoryEntry, and HistoryMenu
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recipe::{Category, Recipe};
use crate::errors::AppError;

/// One named dish position in a daily menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    /// Breakfast dish
    Breakfast,
    /// Lunch meat dish
    LunchMeat,
    /// Lunch vegetable dish
    LunchVeg,
    /// Lunch soup
    LunchSoup,
    /// Dinner meat dish
    DinnerMeat,
    /// Dinner vegetable dish
    DinnerVeg,
    /// Dinner soup
    DinnerSoup,
}

impl SlotKey {
    /// All dish slots in menu order
    pub const ALL: [Self; 7] = [
        Self::Breakfast,
        Self::LunchMeat,
        Self::LunchVeg,
        Self::LunchSoup,
        Self::DinnerMeat,
        Self::DinnerVeg,
        Self::DinnerSoup,
    ];

    /// Storage key of this slot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::LunchMeat => "lunch_meat",
            Self::LunchVeg => "lunch_veg",
            Self::LunchSoup => "lunch_soup",
            Self::DinnerMeat => "dinner_meat",
            Self::DinnerVeg => "dinner_veg",
            Self::DinnerSoup => "dinner_soup",
        }
    }

    /// Catalog category that feeds this slot (before fallback)
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Breakfast => Category::Breakfast,
            Self::LunchMeat => Category::LunchMeat,
            Self::LunchVeg => Category::LunchVeg,
            Self::LunchSoup | Self::DinnerSoup => Category::Soup,
            Self::DinnerMeat => Category::DinnerMeat,
            Self::DinnerVeg => Category::DinnerVeg,
        }
    }

    /// Meal this slot belongs to
    #[must_use]
    pub const fn meal(self) -> Meal {
        match self {
            Self::Breakfast => Meal::Breakfast,
            Self::LunchMeat | Self::LunchVeg | Self::LunchSoup => Meal::Lunch,
            Self::DinnerMeat | Self::DinnerVeg | Self::DinnerSoup => Meal::Dinner,
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown menu slot: {s}")))
    }
}

/// Meal grouping used for display and history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
}

impl Meal {
    /// Slots served at this meal, in display order
    #[must_use]
    pub const fn slots(self) -> &'static [SlotKey] {
        match self {
            Self::Breakfast => &[SlotKey::Breakfast],
            Self::Lunch => &[SlotKey::LunchMeat, SlotKey::LunchVeg, SlotKey::LunchSoup],
            Self::Dinner => &[SlotKey::DinnerMeat, SlotKey::DinnerVeg, SlotKey::DinnerSoup],
        }
    }

    /// Display title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Breakfast => "早餐",
            Self::Lunch => "午餐",
            Self::Dinner => "晚餐",
        }
    }
}

/// Working menu for one day: one dish (or none) per slot, a fruit, and the
/// derived shopping list.
///
/// The shopping list is never patched; it is replaced wholesale by the
/// shopping list deriver whenever a slot or the pantry changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMenu {
    breakfast: Option<Recipe>,
    lunch_meat: Option<Recipe>,
    lunch_veg: Option<Recipe>,
    lunch_soup: Option<Recipe>,
    dinner_meat: Option<Recipe>,
    dinner_veg: Option<Recipe>,
    dinner_soup: Option<Recipe>,
    fruit: Option<String>,
    #[serde(default)]
    shopping_list: BTreeSet<String>,
}

impl DailyMenu {
    /// Create an empty menu
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dish currently in a slot
    #[must_use]
    pub const fn slot(&self, key: SlotKey) -> Option<&Recipe> {
        match key {
            SlotKey::Breakfast => self.breakfast.as_ref(),
            SlotKey::LunchMeat => self.lunch_meat.as_ref(),
            SlotKey::LunchVeg => self.lunch_veg.as_ref(),
            SlotKey::LunchSoup => self.lunch_soup.as_ref(),
            SlotKey::DinnerMeat => self.dinner_meat.as_ref(),
            SlotKey::DinnerVeg => self.dinner_veg.as_ref(),
            SlotKey::DinnerSoup => self.dinner_soup.as_ref(),
        }
    }

    /// Replace the dish in a slot, returning the previous one.
    ///
    /// Does not touch the shopping list; callers re-derive it.
    pub fn set_slot(&mut self, key: SlotKey, dish: Option<Recipe>) -> Option<Recipe> {
        let target = match key {
            SlotKey::Breakfast => &mut self.breakfast,
            SlotKey::LunchMeat => &mut self.lunch_meat,
            SlotKey::LunchVeg => &mut self.lunch_veg,
            SlotKey::LunchSoup => &mut self.lunch_soup,
            SlotKey::DinnerMeat => &mut self.dinner_meat,
            SlotKey::DinnerVeg => &mut self.dinner_veg,
            SlotKey::DinnerSoup => &mut self.dinner_soup,
        };
        std::mem::replace(target, dish)
    }

    /// Name of the dish in a slot
    #[must_use]
    pub fn dish_name(&self, key: SlotKey) -> Option<&str> {
        self.slot(key).map(|r| r.name.as_str())
    }

    /// Filled slots in menu order
    pub fn dishes(&self) -> impl Iterator<Item = (SlotKey, &Recipe)> + '_ {
        SlotKey::ALL
            .into_iter()
            .filter_map(move |key| self.slot(key).map(|dish| (key, dish)))
    }

    /// Fruit for the day
    #[must_use]
    pub fn fruit(&self) -> Option<&str> {
        self.fruit.as_deref()
    }

    /// Set the fruit for the day
    pub fn set_fruit(&mut self, fruit: Option<String>) {
        self.fruit = fruit;
    }

    /// Ingredients to buy for the current dishes
    #[must_use]
    pub const fn shopping_list(&self) -> &BTreeSet<String> {
        &self.shopping_list
    }

    /// Install a freshly derived shopping list
    pub fn replace_shopping_list(&mut self, list: BTreeSet<String>) {
        self.shopping_list = list;
    }

    /// Whether no slot holds a dish and no fruit is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes().next().is_none() && self.fruit.is_none()
    }
}

/// Dish names of one archived day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryMenu {
    /// Breakfast dish name
    pub breakfast: Option<String>,
    /// Lunch meat, vegetable, and soup names
    pub lunch: [Option<String>; 3],
    /// Dinner meat, vegetable, and soup names
    pub dinner: [Option<String>; 3],
    /// Fruit
    pub fruit: Option<String>,
}

/// Immutable snapshot of a saved menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Day the menu was saved
    pub date: NaiveDate,
    /// Dish names
    pub menu: HistoryMenu,
}

impl HistoryEntry {
    /// Snapshot the dish names of a menu. Empty slots are kept as `None`.
    #[must_use]
    pub fn from_menu(menu: &DailyMenu, date: NaiveDate) -> Self {
        let name = |key| menu.dish_name(key).map(str::to_owned);
        Self {
            date,
            menu: HistoryMenu {
                breakfast: name(SlotKey::Breakfast),
                lunch: [
                    name(SlotKey::LunchMeat),
                    name(SlotKey::LunchVeg),
                    name(SlotKey::LunchSoup),
                ],
                dinner: [
                    name(SlotKey::DinnerMeat),
                    name(SlotKey::DinnerVeg),
                    name(SlotKey::DinnerSoup),
                ],
                fruit: menu.fruit.clone(),
            },
        }
    }
}
