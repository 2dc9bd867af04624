// ABOUTME: Daily menu planner that fills every slot through the dish selector
// ABOUTME: Applies lunch/dinner coupling rules and derives the shopping list once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! # Menu Planner
//!
//! Fills a whole day in one pass. Breakfast and the three lunch slots are
//! independent draws. Dinner is coupled to lunch:
//!
//! - the dinner meat dish never repeats the lunch meat dish, and after a
//!   red-meat lunch it prefers a dish without red meat, retrying once without
//!   that preference if nothing qualifies;
//! - the dinner soup never repeats the lunch soup.
//!
//! A slot whose pool has no safe dish stays empty.

use little_chef_core::models::{DailyMenu, Recipe, RecipeCatalog, SlotKey, UserProfile};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::normalizer::is_red_meat;
use crate::selector::{DishSelector, SelectionCriteria};
use crate::shopping::refresh_shopping_list;

/// Whether any normalized ingredient of a dish is red meat
#[must_use]
pub fn is_red_meat_dish(dish: &Recipe) -> bool {
    dish.ingredients.iter().any(|i| is_red_meat(i))
}

/// Full-day menu generator
#[derive(Debug, Clone, Copy)]
pub struct MenuPlanner<'a> {
    catalog: &'a RecipeCatalog,
    selector: DishSelector,
}

impl<'a> MenuPlanner<'a> {
    /// Create a planner over a catalog
    #[must_use]
    pub const fn new(catalog: &'a RecipeCatalog, selector: DishSelector) -> Self {
        Self { catalog, selector }
    }

    /// Generate a complete menu for a profile
    pub fn generate<R: Rng + ?Sized>(&self, profile: &UserProfile, rng: &mut R) -> DailyMenu {
        let mut menu = DailyMenu::new();
        let open = SelectionCriteria::new();

        for slot in [
            SlotKey::Breakfast,
            SlotKey::LunchMeat,
            SlotKey::LunchVeg,
            SlotKey::LunchSoup,
        ] {
            menu.set_slot(slot, self.draw(slot, profile, &open, rng));
        }

        let dinner_meat = self.draw_dinner_meat(menu.slot(SlotKey::LunchMeat), profile, rng);
        menu.set_slot(SlotKey::DinnerMeat, dinner_meat);
        menu.set_slot(SlotKey::DinnerVeg, self.draw(SlotKey::DinnerVeg, profile, &open, rng));

        let soup_criteria =
            SelectionCriteria::new().excluding_opt(menu.dish_name(SlotKey::LunchSoup));
        menu.set_slot(
            SlotKey::DinnerSoup,
            self.draw(SlotKey::DinnerSoup, profile, &soup_criteria, rng),
        );

        menu.set_fruit(self.catalog.fruit().choose(rng).cloned());
        refresh_shopping_list(&mut menu, &profile.pantry);

        info!(
            nickname = %profile.nickname,
            filled = menu.dishes().count(),
            shopping = menu.shopping_list().len(),
            "daily menu generated"
        );
        menu
    }

    fn draw<R: Rng + ?Sized>(
        &self,
        slot: SlotKey,
        profile: &UserProfile,
        criteria: &SelectionCriteria,
        rng: &mut R,
    ) -> Option<Recipe> {
        let dish = self
            .selector
            .select(self.catalog.pool_for(slot), profile, criteria, rng)
            .cloned();
        if dish.is_none() {
            debug!(%slot, "slot left empty: no safe dish");
        }
        dish
    }

    fn draw_dinner_meat<R: Rng + ?Sized>(
        &self,
        lunch_meat: Option<&Recipe>,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Option<Recipe> {
        let criteria = SelectionCriteria::new().excluding_opt(lunch_meat.map(|d| d.name.as_str()));

        if lunch_meat.is_some_and(is_red_meat_dish) {
            let white = criteria.clone().avoiding_red_meat();
            if let Some(dish) = self.draw(SlotKey::DinnerMeat, profile, &white, rng) {
                return Some(dish);
            }
            debug!("no white-meat dinner available, retrying without preference");
        }
        self.draw(SlotKey::DinnerMeat, profile, &criteria, rng)
    }
}
