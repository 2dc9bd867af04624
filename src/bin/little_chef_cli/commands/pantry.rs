// ABOUTME: Pantry commands for little-chef
// ABOUTME: Handles list, add, remove, scan, and restock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

use std::fs;
use std::path::Path;

use little_chef::errors::{AppError, AppResult};
use little_chef::session::Session;

use crate::helpers::display::display_shopping_list;

type Result<T> = AppResult<T>;

/// List pantry contents, grouped as in the catalog's picker where possible
pub fn list(session: &Session) {
    let pantry = &session.profile().pantry;
    if pantry.is_empty() {
        println!("Pantry is empty.");
        return;
    }
    let mut shown = 0;
    for group in session.catalog().pantry_groups() {
        let items: Vec<&str> = group
            .items
            .iter()
            .filter(|i| pantry.contains(*i))
            .map(String::as_str)
            .collect();
        if !items.is_empty() {
            shown += items.len();
            println!("{}: {}", group.label, items.join(", "));
        }
    }
    if shown < pantry.len() {
        let others: Vec<&str> = pantry
            .iter()
            .filter(|i| {
                !session
                    .catalog()
                    .pantry_groups()
                    .iter()
                    .any(|g| g.items.contains(*i))
            })
            .map(String::as_str)
            .collect();
        println!("其他: {}", others.join(", "));
    }
}

/// Add items
pub fn add(session: &mut Session, items: &[String]) -> Result<()> {
    let added = session.stock(items)?;
    println!("Added {added} item(s).");
    Ok(())
}

/// Remove an item
pub fn remove(session: &mut Session, item: &str) -> Result<()> {
    session.unstock(item)?;
    println!("Removed {item}.");
    Ok(())
}

/// Recognize pantry items from a photo
pub async fn scan(session: &mut Session, image: Option<&Path>) -> Result<()> {
    let bytes = match image {
        Some(path) => fs::read(path).map_err(|e| {
            AppError::invalid_input(format!("Cannot read image {}", path.display()))
                .with_source(e)
        })?,
        None => Vec::new(),
    };
    println!("Scanning...");
    let found = session.scan_pantry(&bytes).await?;
    println!("Recognized: {}", found.join(", "));
    Ok(())
}

/// Move the shopping list into the pantry
pub fn restock(session: &mut Session) -> Result<()> {
    let added = session.restock()?;
    println!("Restocked {added} item(s).");
    display_shopping_list(session);
    Ok(())
}
