// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Resolves the data directory, storage file paths, vision delay, and engine weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use little_chef_core::constants::storage;
use little_chef_core::errors::{AppError, AppResult};
use little_chef_intelligence::MenuEngineConfig;
use tracing::{debug, info};

use crate::logging::LoggingConfig;

/// Default delay of the mock vision provider
pub const DEFAULT_SCAN_DELAY_MS: u64 = 800;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the profile, history, and working-menu files
    pub data_dir: PathBuf,
    /// Simulated latency of the vision provider
    pub scan_delay: Duration,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Selection weights for the menu engine
    pub engine: MenuEngineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or the
    /// engine weights fail validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let data_dir = env::var("LITTLE_CHEF_DATA_DIR")
            .map_or_else(|_| default_data_dir(), PathBuf::from);

        let scan_delay_ms = match env::var("LITTLE_CHEF_SCAN_DELAY_MS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("LITTLE_CHEF_SCAN_DELAY_MS={raw}: {e}"))
            })?,
            Err(_) => DEFAULT_SCAN_DELAY_MS,
        };

        let config = Self {
            data_dir,
            scan_delay: Duration::from_millis(scan_delay_ms),
            logging: LoggingConfig::from_env(),
            engine: MenuEngineConfig::load()?,
        };
        debug!(data_dir = %config.data_dir.display(), scan_delay_ms, "configuration loaded");
        Ok(config)
    }

    /// Configuration rooted at an explicit data directory, with defaults elsewhere
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            scan_delay: Duration::from_millis(DEFAULT_SCAN_DELAY_MS),
            logging: LoggingConfig::default(),
            engine: MenuEngineConfig::default(),
        }
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Profile file path
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(storage::PROFILE_FILE)
    }

    /// History file path
    #[must_use]
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(storage::HISTORY_FILE)
    }

    /// Working-menu file path
    #[must_use]
    pub fn menu_state_path(&self) -> PathBuf {
        self.data_dir.join(storage::MENU_STATE_FILE)
    }
}

/// Platform data directory, or the current directory when none is known
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(storage::APP_DIR))
}
