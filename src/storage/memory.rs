// ABOUTME: In-memory store implementations for tests and ephemeral sessions
// ABOUTME: Mirror the file stores' semantics without touching the filesystem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::sync::RwLock;

use little_chef_core::errors::{AppError, AppResult};
use little_chef_core::models::{DailyMenu, HistoryEntry, UserProfile};

use super::{HistoryStore, MenuStateStore, ProfileStore};

fn poisoned() -> AppError {
    AppError::internal("in-memory store lock poisoned")
}

/// Profile held in memory
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profile: RwLock<Option<UserProfile>>,
}

impl MemoryProfileStore {
    /// Store pre-seeded with a profile
    #[must_use]
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> UserProfile {
        self.profile
            .read()
            .ok()
            .and_then(|p| (*p).clone())
            .unwrap_or_default()
    }

    fn save(&self, profile: &UserProfile) -> AppResult<()> {
        *self.profile.write().map_err(|_| poisoned())? = Some(profile.clone());
        Ok(())
    }
}

/// History held in memory, newest first
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        self.entries.read().map(|e| (*e).clone()).unwrap_or_default()
    }

    fn append(&self, entry: HistoryEntry) -> AppResult<()> {
        self.entries.write().map_err(|_| poisoned())?.insert(0, entry);
        Ok(())
    }
}

/// Working menu held in memory
#[derive(Debug, Default)]
pub struct MemoryMenuStateStore {
    menu: RwLock<DailyMenu>,
}

impl MenuStateStore for MemoryMenuStateStore {
    fn load(&self) -> DailyMenu {
        self.menu.read().map(|m| (*m).clone()).unwrap_or_default()
    }

    fn save(&self, menu: &DailyMenu) -> AppResult<()> {
        *self.menu.write().map_err(|_| poisoned())? = menu.clone();
        Ok(())
    }
}
