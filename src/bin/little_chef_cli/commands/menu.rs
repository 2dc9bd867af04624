// ABOUTME: Menu commands for little-chef
// ABOUTME: Handles generate, show, swap, feedback, card, save, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use chrono::{Local, NaiveDate};
use little_chef::errors::AppResult;
use little_chef::intelligence::SwapOutcome;
use little_chef::models::{Preference, SlotKey};
use little_chef::session::Session;

use crate::helpers::display::{display_history, display_menu, display_shopping_list};

type Result<T> = AppResult<T>;

/// Generate and print a new menu
pub fn generate(session: &mut Session) -> Result<()> {
    session.generate_menu()?;
    display_menu(session);
    Ok(())
}

/// Print the working menu
pub fn show(session: &Session) {
    display_menu(session);
}

/// Swap one slot
pub fn swap(session: &mut Session, slot: &str) -> Result<()> {
    let slot: SlotKey = slot.parse()?;
    match session.swap(slot)? {
        SwapOutcome::Replaced { previous, current } => {
            println!(
                "{slot}: {} → {current}",
                previous.as_deref().unwrap_or("—")
            );
            display_shopping_list(session);
        }
        SwapOutcome::Unchanged => println!("{slot}: no other safe dish available"),
    }
    Ok(())
}

/// Toggle like
pub fn like(session: &mut Session, dish: &str) -> Result<()> {
    let preference = session.toggle_like(dish)?;
    print_preference(dish, preference);
    Ok(())
}

/// Toggle dislike
pub fn dislike(session: &mut Session, dish: &str) -> Result<()> {
    let preference = session.toggle_dislike(dish)?;
    print_preference(dish, preference);
    Ok(())
}

fn print_preference(dish: &str, preference: Preference) {
    let label = match preference {
        Preference::Liked => "liked",
        Preference::Disliked => "disliked",
        Preference::Neutral => "neutral",
    };
    println!("{dish}: {label}");
}

/// Print the menu card
pub fn card(session: &Session, json: bool) -> Result<()> {
    let card = session.menu_card();
    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        print!("{}", card.render_text());
    }
    Ok(())
}

/// Archive the working menu
pub fn save(session: &Session, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let entry = session.save_to_history(date)?;
    println!("Saved menu for {}", entry.date.format("%Y-%m-%d"));
    Ok(())
}

/// Print archived menus
pub fn history(session: &Session, limit: usize) {
    let entries = session.history();
    display_history(&entries[..limit.min(entries.len())]);
}
