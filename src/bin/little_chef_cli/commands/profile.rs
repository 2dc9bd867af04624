// ABOUTME: Profile commands for little-chef
// ABOUTME: Handles allergen editing and notification triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use little_chef::constants::ingredients::COMMON_ALLERGENS;
use little_chef::errors::AppResult;
use little_chef::session::Session;
use tracing::warn;

type Result<T> = AppResult<T>;

/// Show allergens and the preset choices
pub fn list_allergens(session: &Session) {
    let allergens = &session.profile().allergens;
    if allergens.is_empty() {
        println!("No allergens recorded.");
    } else {
        let names: Vec<&str> = allergens.iter().map(String::as_str).collect();
        println!("Allergens: {}", names.join(", "));
    }
    println!("Presets: {}", COMMON_ALLERGENS.join(", "));
}

/// Replace allergens
pub fn set_allergens(session: &mut Session, presets: &[String], custom: &str) -> Result<()> {
    for preset in presets {
        if !COMMON_ALLERGENS.contains(&preset.as_str()) {
            warn!(%preset, "not a preset allergen; keeping it as a custom entry");
        }
    }
    session.set_allergens(presets, custom)?;
    list_allergens(session);
    Ok(())
}

/// Push the working menu
pub async fn notify_menu(session: &Session) {
    if session.notify_menu().await {
        println!("Menu sent.");
    } else {
        println!("Menu could not be sent; see logs.");
    }
}

/// Request a weekly plan
pub async fn request_weekly(session: &Session) {
    if session.request_weekly_plan().await {
        println!("Weekly plan requested.");
    } else {
        println!("Weekly plan request failed; see logs.");
    }
}
