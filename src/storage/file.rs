// ABOUTME: JSON file stores for the profile, menu history, and working menu
// ABOUTME: Keeps the stored record layout stable so existing data files keep loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use little_chef_core::errors::{AppError, AppResult};
use little_chef_core::models::{DailyMenu, HistoryEntry, ProfileRecord, UserProfile};
use tracing::info;

use super::{read_json, write_json_atomic, HistoryStore, MenuStateStore, ProfileStore};

/// Profile stored as a single [`ProfileRecord`] JSON object
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for FileProfileStore {
    fn load(&self) -> UserProfile {
        read_json::<ProfileRecord>(&self.path).map_or_else(UserProfile::default, UserProfile::from)
    }

    fn save(&self, profile: &UserProfile) -> AppResult<()> {
        write_json_atomic(&self.path, &ProfileRecord::from(profile))?;
        info!(path = %self.path.display(), "profile saved");
        Ok(())
    }
}

/// History stored as a JSON array, newest entry first
#[derive(Debug)]
pub struct FileHistoryStore {
    path: PathBuf,
    // Serializes read-modify-write appends within this process
    append_lock: Mutex<()>,
}

impl FileHistoryStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        read_json(&self.path).unwrap_or_default()
    }

    fn append(&self, entry: HistoryEntry) -> AppResult<()> {
        let _guard = self
            .append_lock
            .lock()
            .map_err(|_| AppError::internal("history append lock poisoned"))?;
        let mut entries = self.load();
        entries.insert(0, entry);
        write_json_atomic(&self.path, &entries)?;
        info!(entries = entries.len(), "menu archived to history");
        Ok(())
    }
}

/// Working menu stored as a serialized [`DailyMenu`]
#[derive(Debug, Clone)]
pub struct FileMenuStateStore {
    path: PathBuf,
}

impl FileMenuStateStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MenuStateStore for FileMenuStateStore {
    fn load(&self) -> DailyMenu {
        read_json(&self.path).unwrap_or_default()
    }

    fn save(&self, menu: &DailyMenu) -> AppResult<()> {
        write_json_atomic(&self.path, menu)
    }
}
