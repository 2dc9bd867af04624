// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors
// ABOUTME: Output formatting helpers for little-chef
// ABOUTME: Renders the working menu, stock markers, shopping list, and history

use little_chef::models::{HistoryEntry, Meal, Preference, SlotKey};
use little_chef::session::Session;

const EMPTY: &str = "—";

/// Print the working menu with per-ingredient stock markers
pub fn display_menu(session: &Session) {
    let menu = session.menu();
    if menu.is_empty() {
        println!("No menu yet. Run `little-chef generate` first.");
        return;
    }

    println!("\n{} 的今日食谱", session.profile().nickname);
    println!("{}", "=".repeat(40));
    for meal in [Meal::Breakfast, Meal::Lunch, Meal::Dinner] {
        println!("\n[{}]", meal.title());
        for slot in meal.slots() {
            display_slot(session, *slot);
        }
    }
    println!("\n[加餐] {}", menu.fruit().unwrap_or(EMPTY));
    display_shopping_list(session);
}

fn display_slot(session: &Session, slot: SlotKey) {
    let Some(dish) = session.menu().slot(slot) else {
        println!("  {:<12} {EMPTY}", slot.as_str());
        return;
    };
    let status = session.ingredient_status(slot).unwrap_or_default();
    let ingredients: Vec<String> = status
        .iter()
        .map(|s| {
            if s.in_stock {
                format!("{}✓", s.name)
            } else {
                s.name.clone()
            }
        })
        .collect();
    let marker = match session.profile().preference(&dish.name) {
        Preference::Liked => " ♥",
        Preference::Disliked => " ✗",
        Preference::Neutral => "",
    };
    println!("  {:<12} {}{marker}", slot.as_str(), dish.name);
    println!("  {:<12} {}", "", ingredients.join(" · "));
}

/// Print the shopping list
pub fn display_shopping_list(session: &Session) {
    let list = session.menu().shopping_list();
    println!("\n[购物清单]");
    if list.is_empty() {
        println!("  Everything is in the pantry.");
    } else {
        for item in list {
            println!("  - {item}");
        }
    }
}

/// Print archived menus
pub fn display_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No saved menus yet.");
        return;
    }
    for entry in entries {
        let m = &entry.menu;
        let join = |dishes: &[Option<String>]| {
            dishes
                .iter()
                .map(|d| d.as_deref().unwrap_or(EMPTY))
                .collect::<Vec<_>>()
                .join(" / ")
        };
        println!("\n{}", entry.date.format("%Y-%m-%d"));
        println!("  早餐: {}", m.breakfast.as_deref().unwrap_or(EMPTY));
        println!("  午餐: {}", join(&m.lunch));
        println!("  晚餐: {}", join(&m.dinner));
        println!("  加餐: {}", m.fruit.as_deref().unwrap_or(EMPTY));
    }
}
