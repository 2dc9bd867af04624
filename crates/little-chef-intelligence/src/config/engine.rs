// ABOUTME: Menu engine configuration with selection weights and environment overrides
// ABOUTME: Provides the global engine config singleton, loading, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! Menu Engine Configuration
//!
//! Weights used by the dish selector. Defaults reproduce the production
//! tuning: every safe dish starts at 10, a dish that needs no shopping gains
//! 50, a liked dish gains 100, and a disliked dish is pinned to 1.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Integer weights for weighted-random dish selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionWeights {
    /// Starting weight of every candidate
    pub base: u32,
    /// Bonus for a dish whose ingredients are all in the pantry
    pub pantry_complete_bonus: u32,
    /// Bonus for a liked dish
    pub liked_bonus: u32,
    /// Weight a disliked dish is pinned to, replacing every bonus
    pub disliked: u32,
}

impl Default for SelectionWeights {
    fn default() -> Self {
        Self {
            base: 10,
            pantry_complete_bonus: 50,
            liked_bonus: 100,
            disliked: 1,
        }
    }
}

/// Menu engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEngineConfig {
    /// Selection weights
    pub weights: SelectionWeights,
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<MenuEngineConfig> = OnceLock::new();

impl MenuEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load menu engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is zero or a disliked dish could outweigh a neutral one
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.weights;
        if weights.base == 0 {
            return Err(ConfigError::InvalidRange("base weight must be at least 1"));
        }
        if weights.disliked == 0 {
            return Err(ConfigError::InvalidRange(
                "disliked weight must be at least 1 so disliked dishes stay selectable",
            ));
        }
        if weights.disliked > weights.base {
            return Err(ConfigError::InvalidWeights(
                "disliked weight must not exceed the base weight",
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("LITTLE_CHEF_WEIGHT_BASE")? {
            self.weights.base = val;
        }
        if let Some(val) = env_override("LITTLE_CHEF_WEIGHT_PANTRY_BONUS")? {
            self.weights.pantry_complete_bonus = val;
        }
        if let Some(val) = env_override("LITTLE_CHEF_WEIGHT_LIKED_BONUS")? {
            self.weights.liked_bonus = val;
        }
        if let Some(val) = env_override("LITTLE_CHEF_WEIGHT_DISLIKED")? {
            self.weights.disliked = val;
        }
        Ok(self)
    }
}

fn env_override<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    env::var(name).map_or(Ok(None), |val| {
        val.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_validate() {
        let config = MenuEngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weights.base, 10);
        assert_eq!(config.weights.pantry_complete_bonus, 50);
        assert_eq!(config.weights.liked_bonus, 100);
        assert_eq!(config.weights.disliked, 1);
    }

    #[test]
    fn test_zero_disliked_weight_rejected() {
        let mut config = MenuEngineConfig::default();
        config.weights.disliked = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_disliked_above_base_rejected() {
        let mut config = MenuEngineConfig::default();
        config.weights.disliked = 11;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }
}
