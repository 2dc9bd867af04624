// ABOUTME: Integration tests for planning sessions and the session manager
// ABOUTME: Covers generation, swaps, feedback, pantry changes, history, and persistence across sessions
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use little_chef::errors::ErrorCode;
use little_chef::intelligence::{derive_shopping_list, SwapOutcome};
use little_chef::models::{Preference, SlotKey, UserProfile};
use little_chef::providers::MOCK_RECOGNIZED;
use little_chef::session::{Session, SessionManager};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

// ============================================================================
// Menu generation and swaps
// ============================================================================

#[test]
fn test_generate_menu_fills_slots_and_shopping_list() {
    let mut session = Session::with_seed(common::memory_context(common::builtin_catalog()), 1);
    let menu = session.generate_menu().unwrap().clone();

    for slot in SlotKey::ALL {
        assert!(menu.slot(slot).is_some(), "{slot} empty");
    }
    assert_eq!(
        menu.shopping_list(),
        &derive_shopping_list(&menu, &session.profile().pantry)
    );
}

#[test]
fn test_seeded_sessions_agree() {
    let mut a = Session::with_seed(common::memory_context(common::builtin_catalog()), 77);
    let mut b = Session::with_seed(common::memory_context(common::builtin_catalog()), 77);
    assert_eq!(a.generate_menu().unwrap(), b.generate_menu().unwrap());
}

#[test]
fn test_swap_updates_only_target_slot() {
    let mut session = Session::with_seed(common::memory_context(common::builtin_catalog()), 3);
    session.generate_menu().unwrap();
    let before = session.menu().clone();

    let outcome = session.swap(SlotKey::LunchSoup).unwrap();
    assert!(outcome.is_replaced());
    for slot in SlotKey::ALL {
        if slot != SlotKey::LunchSoup {
            assert_eq!(session.menu().dish_name(slot), before.dish_name(slot));
        }
    }
    assert_ne!(
        session.menu().dish_name(SlotKey::LunchSoup),
        before.dish_name(SlotKey::LunchSoup)
    );
}

#[test]
fn test_swap_without_alternative_reports_unchanged() {
    let mut session = Session::with_seed(common::memory_context(common::tiny_catalog()), 3);
    session.generate_menu().unwrap();
    let before = session.menu().clone();

    assert_eq!(session.swap(SlotKey::Breakfast).unwrap(), SwapOutcome::Unchanged);
    assert_eq!(session.menu(), &before);
}

#[test]
fn test_unknown_slot_name_is_rejected() {
    let err = "lunch".parse::<SlotKey>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_allergens_respected_through_session() {
    let mut profile = UserProfile::default();
    profile.set_allergens(["鸡蛋"], "");
    let ctx = common::memory_context_with(common::builtin_catalog(), profile);
    let mut session = Session::with_seed(ctx, 11);

    for _ in 0..30 {
        session.generate_menu().unwrap();
        for (slot, dish) in session.menu().dishes() {
            assert!(!dish.uses("鸡蛋"), "{} in {slot}", dish.name);
        }
    }
}

// ============================================================================
// Feedback and profile
// ============================================================================

#[test]
fn test_toggle_feedback_is_persisted() {
    let ctx = common::memory_context(common::builtin_catalog());
    let mut session = Session::with_seed(ctx.clone(), 1);

    assert_eq!(session.toggle_like("🐔 椰子鸡").unwrap(), Preference::Liked);
    assert_eq!(session.toggle_dislike("🐔 椰子鸡").unwrap(), Preference::Disliked);
    assert_eq!(session.toggle_dislike("🐔 椰子鸡").unwrap(), Preference::Neutral);
    assert_eq!(session.toggle_like("🥦 蒜蓉西兰花").unwrap(), Preference::Liked);

    let reopened = Session::with_seed(ctx, 2);
    assert_eq!(reopened.profile().preference("🥦 蒜蓉西兰花"), Preference::Liked);
    assert_eq!(reopened.profile().preference("🐔 椰子鸡"), Preference::Neutral);
}

#[test]
fn test_set_allergens_merges_presets_and_custom() {
    let mut session = Session::with_seed(common::memory_context(common::builtin_catalog()), 1);
    session
        .set_allergens(["鸡蛋", "虾"], " 芒果，花生 , ,鸡蛋")
        .unwrap();
    let allergens: Vec<&str> = session
        .profile()
        .allergens
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(allergens.len(), 4);
    for expected in ["鸡蛋", "虾", "芒果", "花生"] {
        assert!(allergens.contains(&expected));
    }
}

#[test]
fn test_update_profile_edits_display_fields() {
    let ctx = common::memory_context(common::builtin_catalog());
    let mut session = Session::with_seed(ctx.clone(), 1);
    session
        .update_profile(|p| {
            p.nickname = "Coco".to_owned();
            p.metrics.height = "95".to_owned();
        })
        .unwrap();

    let reopened = Session::with_seed(ctx, 1);
    assert_eq!(reopened.profile().nickname, "Coco");
    assert_eq!(reopened.menu_card().lines[0].text, "Coco 的今日食谱");
}

// ============================================================================
// Pantry
// ============================================================================

#[test]
fn test_restock_empties_shopping_list() {
    let mut session = Session::with_seed(common::memory_context(common::builtin_catalog()), 5);
    session.generate_menu().unwrap();
    let needed = session.menu().shopping_list().clone();

    let added = session.restock().unwrap();
    assert_eq!(added, needed.len());
    assert!(session.menu().shopping_list().is_empty());
    for item in &needed {
        assert!(session.profile().pantry.contains(item));
    }
}

#[tokio::test]
async fn test_scan_pantry_stocks_recognized_items() {
    let mut session = Session::with_seed(common::memory_context(common::tiny_catalog()), 1);
    session.generate_menu().unwrap();
    assert!(session.menu().shopping_list().contains("虾仁"));

    let found = session.scan_pantry(b"fridge.jpg").await.unwrap();
    assert_eq!(found, MOCK_RECOGNIZED);
    for item in MOCK_RECOGNIZED {
        assert!(session.profile().pantry.contains(*item));
    }
    // 基围虾 covers 虾仁 and 娃娃菜 covers 青菜 once normalized
    assert!(!session.menu().shopping_list().contains("虾仁"));
    assert!(!session.menu().shopping_list().contains("青菜"));
}

#[test]
fn test_unstock_missing_item_is_not_found() {
    let mut session = Session::with_seed(common::memory_context(common::builtin_catalog()), 1);
    let err = session.unstock("榴莲").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    session.unstock("鸡蛋").unwrap();
    assert!(!session.profile().pantry.contains("鸡蛋"));
}

#[test]
fn test_set_pantry_recomputes_shopping_list() {
    let mut session = Session::with_seed(common::memory_context(common::tiny_catalog()), 1);
    session.generate_menu().unwrap();

    session
        .set_pantry(["小米", "大虾", "鸡蛋", "青菜", "番茄", "紫菜"])
        .unwrap();
    assert!(session.menu().shopping_list().is_empty());

    session.set_pantry(Vec::<String>::new()).unwrap();
    assert!(session.menu().shopping_list().contains("小米"));
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_save_without_menu_is_rejected() {
    let session = Session::with_seed(common::memory_context(common::builtin_catalog()), 1);
    let err = session.save_to_history(today()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(session.history().is_empty());
}

#[test]
fn test_save_to_history_snapshots_names() {
    let mut session = Session::with_seed(common::memory_context(common::builtin_catalog()), 8);
    session.generate_menu().unwrap();
    let entry = session.save_to_history(today()).unwrap();

    assert_eq!(
        entry.menu.breakfast.as_deref(),
        session.menu().dish_name(SlotKey::Breakfast)
    );
    assert_eq!(entry.menu.fruit.as_deref(), session.menu().fruit());
    assert_eq!(session.history(), vec![entry]);
}

// ============================================================================
// Persistence across sessions
// ============================================================================

#[test]
fn test_working_menu_survives_reopen_on_disk() {
    let dir = TempDir::new().unwrap();
    let catalog = common::builtin_catalog();

    let mut first = Session::with_seed(common::file_context(Arc::clone(&catalog), dir.path()), 4);
    first.generate_menu().unwrap();
    first.swap(SlotKey::DinnerVeg).unwrap();
    let menu = first.menu().clone();

    let second = Session::with_seed(common::file_context(catalog, dir.path()), 9);
    assert_eq!(second.menu(), &menu);
}

#[test]
fn test_reopen_refreshes_shopping_list_for_new_pantry() {
    let dir = TempDir::new().unwrap();
    let catalog = common::tiny_catalog();

    let mut first = Session::with_seed(common::file_context(Arc::clone(&catalog), dir.path()), 4);
    first.generate_menu().unwrap();
    assert!(first.menu().shopping_list().contains("小米"));

    // Another process stocks everything behind this session's back
    let mut other = Session::with_seed(common::file_context(Arc::clone(&catalog), dir.path()), 5);
    other
        .stock(["小米", "虾仁", "青菜", "紫菜", "西红柿"])
        .unwrap();

    let reopened = Session::with_seed(common::file_context(catalog, dir.path()), 6);
    assert!(reopened.menu().shopping_list().is_empty());
}

// ============================================================================
// Notifications
// ============================================================================

#[tokio::test]
async fn test_notifications_delivered_by_log_sink() {
    let mut session = Session::with_seed(common::memory_context(common::builtin_catalog()), 1);
    session.generate_menu().unwrap();
    assert!(session.notify_menu().await);
    assert!(session.request_weekly_plan().await);
}

// ============================================================================
// Session manager
// ============================================================================

#[tokio::test]
async fn test_manager_isolates_sessions() {
    let manager = Arc::new(SessionManager::new(common::memory_context(
        common::builtin_catalog(),
    )));
    let a = manager.create_seeded(1);
    let b = manager.create_seeded(2);
    assert_ne!(a, b);
    assert_eq!(manager.len(), 2);

    let mut handles = Vec::new();
    for id in [a, b] {
        let manager = Arc::clone(&manager);
        handles.push(tokio::spawn(async move {
            let session = manager.get(id).unwrap();
            let mut session = session.lock().await;
            session.generate_menu().unwrap();
            session.menu().dishes().count()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), SlotKey::ALL.len());
    }

    assert!(manager.close(a));
    assert!(!manager.close(a));
    assert_eq!(
        manager.get(a).err().map(|e| e.code),
        Some(ErrorCode::ResourceNotFound)
    );
    assert!(manager.get(b).is_ok());
    assert!(!manager.is_empty());
}
