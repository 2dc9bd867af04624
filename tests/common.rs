// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, session contexts over memory or temp-dir stores, and small catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `little_chef`

use std::path::Path;
use std::sync::{Arc, Once};

use little_chef::config::AppConfig;
use little_chef::intelligence::MenuEngineConfig;
use little_chef::models::{Category, Recipe, RecipeCatalog, UserProfile};
use little_chef::notifications::LogNotifier;
use little_chef::providers::MockVisionProvider;
use little_chef::session::SessionContext;
use little_chef::storage::{MemoryProfileStore, Stores};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Built-in catalog
pub fn builtin_catalog() -> Arc<RecipeCatalog> {
    little_chef::catalog::builtin().expect("built-in catalog loads")
}

/// One safe dish per category plus a second soup
pub fn tiny_catalog() -> Arc<RecipeCatalog> {
    Arc::new(
        RecipeCatalog::new()
            .with_pool(Category::Breakfast, vec![Recipe::new("小米粥", ["小米"])])
            .with_pool(
                Category::LunchMeat,
                vec![Recipe::new("虾仁炒蛋", ["虾仁", "鸡蛋"])],
            )
            .with_pool(Category::LunchVeg, vec![Recipe::new("炒青菜", ["青菜"])])
            .with_pool(
                Category::Soup,
                vec![
                    Recipe::new("番茄蛋汤", ["西红柿", "鸡蛋"]),
                    Recipe::new("紫菜汤", ["紫菜"]),
                ],
            )
            .with_fruit(["苹果"]),
    )
}

/// Context over in-memory stores with an instant vision mock
pub fn memory_context(catalog: Arc<RecipeCatalog>) -> SessionContext {
    init_test_logging();
    SessionContext {
        catalog,
        engine: MenuEngineConfig::default(),
        stores: Stores::memory(),
        vision: Arc::new(MockVisionProvider::instant()),
        notifier: Arc::new(LogNotifier),
    }
}

/// Context over in-memory stores seeded with a profile
pub fn memory_context_with(catalog: Arc<RecipeCatalog>, profile: UserProfile) -> SessionContext {
    let mut ctx = memory_context(catalog);
    ctx.stores.profile = Arc::new(MemoryProfileStore::with_profile(profile));
    ctx
}

/// Context over file stores rooted at `dir`
pub fn file_context(catalog: Arc<RecipeCatalog>, dir: &Path) -> SessionContext {
    init_test_logging();
    let config = AppConfig::with_data_dir(dir);
    SessionContext {
        catalog,
        engine: MenuEngineConfig::default(),
        stores: Stores::files(&config),
        vision: Arc::new(MockVisionProvider::instant()),
        notifier: Arc::new(LogNotifier),
    }
}
