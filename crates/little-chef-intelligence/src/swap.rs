// ABOUTME: Single-slot swap that redraws one dish and keeps the rest of the menu
// ABOUTME: Provides SwapEngine and SwapOutcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use little_chef_core::models::{DailyMenu, RecipeCatalog, SlotKey, UserProfile};
use rand::Rng;
use tracing::{debug, info};

use crate::selector::{DishSelector, SelectionCriteria};
use crate::shopping::refresh_shopping_list;

/// Result of a swap request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The slot now holds a different dish
    Replaced {
        /// Dish that was in the slot, if any
        previous: Option<String>,
        /// Dish now in the slot
        current: String,
    },
    /// No safe alternative; the menu is untouched
    Unchanged,
}

impl SwapOutcome {
    /// Whether the slot changed
    #[must_use]
    pub const fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Redraws individual slots
#[derive(Debug, Clone, Copy)]
pub struct SwapEngine<'a> {
    catalog: &'a RecipeCatalog,
    selector: DishSelector,
}

impl<'a> SwapEngine<'a> {
    /// Create a swap engine over a catalog
    #[must_use]
    pub const fn new(catalog: &'a RecipeCatalog, selector: DishSelector) -> Self {
        Self { catalog, selector }
    }

    /// Replace the dish in `slot` with a different safe dish from the slot's
    /// pool. Other slots are never touched. When no alternative exists the
    /// menu is left exactly as it was.
    pub fn swap<R: Rng + ?Sized>(
        &self,
        menu: &mut DailyMenu,
        slot: SlotKey,
        profile: &UserProfile,
        rng: &mut R,
    ) -> SwapOutcome {
        let criteria = SelectionCriteria::new().excluding_opt(menu.dish_name(slot));
        let pool = self.catalog.pool_for(slot);

        let Some(next) = self.selector.select(pool, profile, &criteria, rng) else {
            debug!(%slot, "swap skipped: no safe alternative");
            return SwapOutcome::Unchanged;
        };

        let current = next.name.clone();
        let previous = menu.set_slot(slot, Some(next.clone())).map(|d| d.name);
        refresh_shopping_list(menu, &profile.pantry);
        info!(%slot, from = ?previous, to = %current, "dish swapped");

        SwapOutcome::Replaced { previous, current }
    }
}
