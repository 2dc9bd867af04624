// ABOUTME: Persistence abstraction for profile, menu history, and the working menu
// ABOUTME: Defines the store traits plus an atomic JSON writer shared by file-backed stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! # Storage
//!
//! Each store loads leniently and saves strictly. A missing or unreadable file
//! is logged and replaced by defaults (profile, working menu) or an empty list
//! (history); only failed writes surface as errors.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use little_chef_core::errors::{AppError, AppResult};
use little_chef_core::models::{DailyMenu, HistoryEntry, UserProfile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::warn;

use crate::config::AppConfig;

/// File-backed stores
pub mod file;
/// In-memory stores
pub mod memory;

pub use file::{FileHistoryStore, FileMenuStateStore, FileProfileStore};
pub use memory::{MemoryHistoryStore, MemoryMenuStateStore, MemoryProfileStore};

/// Persists the user profile
pub trait ProfileStore: Send + Sync {
    /// Load the profile, falling back to defaults when absent or malformed
    fn load(&self) -> UserProfile;

    /// Save the profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be written
    fn save(&self, profile: &UserProfile) -> AppResult<()>;
}

/// Persists archived menus, newest first
pub trait HistoryStore: Send + Sync {
    /// Load all entries, or an empty list when absent or malformed
    fn load(&self) -> Vec<HistoryEntry>;

    /// Prepend an entry
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be written
    fn append(&self, entry: HistoryEntry) -> AppResult<()>;
}

/// Persists the working menu between CLI invocations
pub trait MenuStateStore: Send + Sync {
    /// Load the working menu, or an empty menu when absent or malformed
    fn load(&self) -> DailyMenu;

    /// Save the working menu
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be written
    fn save(&self, menu: &DailyMenu) -> AppResult<()>;
}

/// Bundle of store handles shared by sessions
#[derive(Clone)]
pub struct Stores {
    /// Profile store
    pub profile: Arc<dyn ProfileStore>,
    /// History store
    pub history: Arc<dyn HistoryStore>,
    /// Working-menu store
    pub menu: Arc<dyn MenuStateStore>,
}

impl Stores {
    /// File-backed stores under the configured data directory
    #[must_use]
    pub fn files(config: &AppConfig) -> Self {
        Self {
            profile: Arc::new(FileProfileStore::new(config.profile_path())),
            history: Arc::new(FileHistoryStore::new(config.history_path())),
            menu: Arc::new(FileMenuStateStore::new(config.menu_state_path())),
        }
    }

    /// Fresh in-memory stores
    #[must_use]
    pub fn memory() -> Self {
        Self {
            profile: Arc::new(MemoryProfileStore::default()),
            history: Arc::new(MemoryHistoryStore::default()),
            menu: Arc::new(MemoryMenuStateStore::default()),
        }
    }
}

/// Read and parse a JSON file. `None` when the file is absent or malformed.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), "Failed to read stored state: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), "Stored state is malformed, using defaults: {e}");
            None
        }
    }
}

/// Serialize to pretty JSON and atomically replace `path`.
///
/// Writes a sibling temp file then renames it over the target, so readers
/// never see a half-written file.
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| {
        AppError::storage(format!("Failed to create {}", dir.display())).with_source(e)
    })?;

    let json = serde_json::to_vec_pretty(value)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        AppError::storage(format!("Failed to create temp file in {}", dir.display()))
            .with_source(e)
    })?;
    tmp.write_all(&json)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| {
        AppError::storage(format!("Failed to replace {}", path.display())).with_source(e.error)
    })?;
    Ok(())
}
