// ABOUTME: Per-user planning session owning a profile, a working menu, and a random source
// ABOUTME: Routes user actions through the engine and persists state after every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! # Sessions
//!
//! A [`Session`] is the only place state changes. Each action runs the engine
//! against the session's own profile and menu, then writes the changed parts
//! back through the stores. [`SessionManager`] hosts many sessions at once,
//! locking each one independently.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use little_chef_core::errors::{AppError, AppResult};
use little_chef_core::models::{
    DailyMenu, HistoryEntry, Preference, RecipeCatalog, SlotKey, UserProfile,
};
use little_chef_intelligence::{
    ingredient_status, refresh_shopping_list, DishSelector, IngredientStatus, MenuEngineConfig,
    MenuPlanner, SwapEngine, SwapOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog;
use crate::config::AppConfig;
use crate::export::MenuCard;
use crate::notifications::{LogNotifier, NotificationSink};
use crate::providers::{MockVisionProvider, VisionProvider};
use crate::storage::Stores;

/// Session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared, read-only handles every session needs
#[derive(Clone)]
pub struct SessionContext {
    /// Recipe catalog
    pub catalog: Arc<RecipeCatalog>,
    /// Engine configuration
    pub engine: MenuEngineConfig,
    /// Persistence
    pub stores: Stores,
    /// Pantry recognition
    pub vision: Arc<dyn VisionProvider>,
    /// Notification delivery
    pub notifier: Arc<dyn NotificationSink>,
}

impl SessionContext {
    /// Built-in catalog, file stores, mock vision, and log notifications,
    /// all configured from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog fails validation
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            catalog: catalog::builtin()?,
            engine: config.engine.clone(),
            stores: Stores::files(config),
            vision: Arc::new(MockVisionProvider::new(config.scan_delay)),
            notifier: Arc::new(LogNotifier),
        })
    }
}

/// One user's planning state
pub struct Session {
    id: SessionId,
    ctx: SessionContext,
    profile: UserProfile,
    menu: DailyMenu,
    rng: StdRng,
}

impl Session {
    /// Open a session, loading the stored profile and working menu
    #[must_use]
    pub fn open(ctx: SessionContext) -> Self {
        Self::with_rng(ctx, StdRng::from_entropy())
    }

    /// Open a session with a reproducible random source
    #[must_use]
    pub fn with_seed(ctx: SessionContext, seed: u64) -> Self {
        Self::with_rng(ctx, StdRng::seed_from_u64(seed))
    }

    fn with_rng(ctx: SessionContext, rng: StdRng) -> Self {
        let profile = ctx.stores.profile.load();
        let mut menu = ctx.stores.menu.load();
        // The pantry may have changed since the menu was stored
        refresh_shopping_list(&mut menu, &profile.pantry);
        Self {
            id: SessionId::new(),
            ctx,
            profile,
            menu,
            rng,
        }
    }

    /// Session id
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Current profile
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Current working menu
    #[must_use]
    pub const fn menu(&self) -> &DailyMenu {
        &self.menu
    }

    /// Catalog the session draws from
    #[must_use]
    pub fn catalog(&self) -> &RecipeCatalog {
        &self.ctx.catalog
    }

    fn selector(&self) -> DishSelector {
        DishSelector::new(self.ctx.engine.weights)
    }

    // ===== Menu =====

    /// Generate a fresh menu for the whole day
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be persisted
    pub fn generate_menu(&mut self) -> AppResult<&DailyMenu> {
        let planner = MenuPlanner::new(&self.ctx.catalog, self.selector());
        self.menu = planner.generate(&self.profile, &mut self.rng);
        self.ctx.stores.menu.save(&self.menu)?;
        Ok(&self.menu)
    }

    /// Redraw one slot
    ///
    /// # Errors
    ///
    /// Returns an error if the changed menu cannot be persisted
    pub fn swap(&mut self, slot: SlotKey) -> AppResult<SwapOutcome> {
        let engine = SwapEngine::new(&self.ctx.catalog, self.selector());
        let outcome = engine.swap(&mut self.menu, slot, &self.profile, &mut self.rng);
        if outcome.is_replaced() {
            self.ctx.stores.menu.save(&self.menu)?;
        }
        Ok(outcome)
    }

    /// Per-ingredient stock annotation for the dish in a slot
    #[must_use]
    pub fn ingredient_status(&self, slot: SlotKey) -> Option<Vec<IngredientStatus>> {
        self.menu
            .slot(slot)
            .map(|dish| ingredient_status(dish, &self.profile.pantry))
    }

    /// Layout of the shareable menu card
    #[must_use]
    pub fn menu_card(&self) -> MenuCard {
        MenuCard::compose(&self.menu, &self.profile.nickname)
    }

    // ===== Preferences =====

    /// Toggle "like" on a dish
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be persisted
    pub fn toggle_like(&mut self, dish: &str) -> AppResult<Preference> {
        let preference = self.profile.toggle_like(dish);
        self.ctx.stores.profile.save(&self.profile)?;
        info!(%dish, ?preference, "preference updated");
        Ok(preference)
    }

    /// Toggle "dislike" on a dish
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be persisted
    pub fn toggle_dislike(&mut self, dish: &str) -> AppResult<Preference> {
        let preference = self.profile.toggle_dislike(dish);
        self.ctx.stores.profile.save(&self.profile)?;
        info!(%dish, ?preference, "preference updated");
        Ok(preference)
    }

    // ===== Pantry =====

    /// Move everything on the shopping list into the pantry. Returns the
    /// number of newly stocked items.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile or menu cannot be persisted
    pub fn restock(&mut self) -> AppResult<usize> {
        let bought: Vec<String> = self.menu.shopping_list().iter().cloned().collect();
        let added = self.profile.stock(&bought);
        self.pantry_changed()?;
        info!(added, "restocked from shopping list");
        Ok(added)
    }

    /// Recognize ingredients in a photo and add them to the pantry. Returns
    /// the recognized names.
    ///
    /// # Errors
    ///
    /// Returns an error if recognition fails or state cannot be persisted
    pub async fn scan_pantry(&mut self, image: &[u8]) -> AppResult<Vec<String>> {
        let found = self.ctx.vision.recognize(image).await?;
        let added = self.profile.stock(&found);
        self.pantry_changed()?;
        info!(provider = self.ctx.vision.name(), found = found.len(), added, "pantry scanned");
        Ok(found)
    }

    /// Add items to the pantry. Returns how many were new.
    ///
    /// # Errors
    ///
    /// Returns an error if state cannot be persisted
    pub fn stock<I, S>(&mut self, items: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = self.profile.stock(items);
        self.pantry_changed()?;
        Ok(added)
    }

    /// Remove an item from the pantry
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not in the pantry or state cannot be persisted
    pub fn unstock(&mut self, item: &str) -> AppResult<()> {
        if !self.profile.unstock(item) {
            return Err(AppError::not_found(format!("Pantry item {item}")));
        }
        self.pantry_changed()
    }

    /// Replace the pantry wholesale
    ///
    /// # Errors
    ///
    /// Returns an error if state cannot be persisted
    pub fn set_pantry<I, S>(&mut self, items: I) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.profile.pantry.clear();
        self.profile.stock(items);
        self.pantry_changed()
    }

    fn pantry_changed(&mut self) -> AppResult<()> {
        refresh_shopping_list(&mut self.menu, &self.profile.pantry);
        self.ctx.stores.profile.save(&self.profile)?;
        self.ctx.stores.menu.save(&self.menu)
    }

    // ===== Profile =====

    /// Replace allergens from preset picks plus a comma-separated custom list
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be persisted
    pub fn set_allergens<I, S>(&mut self, presets: I, custom: &str) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.profile.set_allergens(presets, custom);
        self.ctx.stores.profile.save(&self.profile)?;
        info!(allergens = self.profile.allergens.len(), "allergens updated");
        Ok(())
    }

    /// Edit display fields of the profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be persisted
    pub fn update_profile(&mut self, edit: impl FnOnce(&mut UserProfile)) -> AppResult<()> {
        edit(&mut self.profile);
        self.ctx.stores.profile.save(&self.profile)
    }

    // ===== History =====

    /// Archive the working menu under `date`
    ///
    /// # Errors
    ///
    /// Returns an error if there is no menu yet or history cannot be written
    pub fn save_to_history(&self, date: NaiveDate) -> AppResult<HistoryEntry> {
        if self.menu.is_empty() {
            return Err(AppError::invalid_input("No menu to save; generate one first"));
        }
        let entry = HistoryEntry::from_menu(&self.menu, date);
        self.ctx.stores.history.append(entry.clone())?;
        Ok(entry)
    }

    /// Archived menus, newest first
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.ctx.stores.history.load()
    }

    // ===== Notifications =====

    /// Push the working menu. Delivery failures are logged, not returned.
    pub async fn notify_menu(&self) -> bool {
        let token = self.profile.notification_token.as_deref();
        match self
            .ctx
            .notifier
            .send_menu(&self.profile.nickname, &self.menu, token)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!("Menu notification failed: {e}");
                false
            }
        }
    }

    /// Ask for a weekly plan. Delivery failures are logged, not returned.
    pub async fn request_weekly_plan(&self) -> bool {
        let token = self.profile.notification_token.as_deref();
        match self
            .ctx
            .notifier
            .request_weekly_plan(&self.profile.nickname, token)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!("Weekly plan request failed: {e}");
                false
            }
        }
    }
}

/// Hosts concurrent sessions keyed by id
pub struct SessionManager {
    ctx: SessionContext,
    sessions: DashMap<SessionId, Arc<Mutex<Session>>>,
}

impl SessionManager {
    /// Manager sharing one context across its sessions
    #[must_use]
    pub fn new(ctx: SessionContext) -> Self {
        Self {
            ctx,
            sessions: DashMap::new(),
        }
    }

    /// Open a new session and return its id
    pub fn create(&self) -> SessionId {
        self.insert(Session::open(self.ctx.clone()))
    }

    /// Open a new seeded session and return its id
    pub fn create_seeded(&self, seed: u64) -> SessionId {
        self.insert(Session::with_seed(self.ctx.clone(), seed))
    }

    fn insert(&self, session: Session) -> SessionId {
        let id = session.id();
        self.sessions.insert(id, Arc::new(Mutex::new(session)));
        info!(session = %id, active = self.sessions.len(), "session opened");
        id
    }

    /// Handle to a session
    ///
    /// # Errors
    ///
    /// Returns an error if no session has this id
    pub fn get(&self, id: SessionId) -> AppResult<Arc<Mutex<Session>>> {
        self.sessions
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| AppError::not_found(format!("Session {id}")))
    }

    /// Close a session. Returns whether it existed.
    pub fn close(&self, id: SessionId) -> bool {
        let existed = self.sessions.remove(&id).is_some();
        if existed {
            info!(session = %id, "session closed");
        }
        existed
    }

    /// Number of open sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are open
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
