// ABOUTME: Pantry recognition provider interface and its mock implementation
// ABOUTME: Turns a photo of the fridge into a list of ingredient names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! # Vision Provider
//!
//! Image recognition is an external collaborator. The mock provider stands in
//! for it during development: it waits a configurable delay and returns a
//! fixed set of ingredients regardless of the image.

use std::time::Duration;

use async_trait::async_trait;
use little_chef_core::constants::service_names;
use little_chef_core::errors::AppResult;
use tracing::info;

use crate::config::DEFAULT_SCAN_DELAY_MS;

/// Ingredients the mock provider "recognizes"
pub const MOCK_RECOGNIZED: &[&str] = &["西红柿", "基围虾", "娃娃菜"];

/// Recognizes ingredients in an image
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &'static str;

    /// Recognize ingredient names in raw image bytes
    async fn recognize(&self, image: &[u8]) -> AppResult<Vec<String>>;
}

/// Fixed-answer provider with simulated latency
#[derive(Debug, Clone)]
pub struct MockVisionProvider {
    delay: Duration,
}

impl MockVisionProvider {
    /// Mock with a custom delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Mock that answers immediately
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for MockVisionProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SCAN_DELAY_MS))
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    fn name(&self) -> &'static str {
        service_names::VISION
    }

    async fn recognize(&self, image: &[u8]) -> AppResult<Vec<String>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        info!(bytes = image.len(), found = MOCK_RECOGNIZED.len(), "mock pantry scan complete");
        Ok(MOCK_RECOGNIZED.iter().map(|s| (*s).to_owned()).collect())
    }
}
