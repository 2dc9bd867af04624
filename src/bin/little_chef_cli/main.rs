// ABOUTME: Little Chef CLI - plan, tweak, and archive a toddler's daily menu from the terminal
// ABOUTME: Parses commands, loads configuration, and dispatches to a single planning session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors
//!
//! Usage:
//! ```bash
//! # Plan today's menu
//! little-chef generate
//!
//! # Swap the lunch soup for something else
//! little-chef swap lunch_soup
//!
//! # Record feedback
//! little-chef like "🐔 椰子鸡"
//!
//! # Buy everything on the shopping list
//! little-chef restock
//!
//! # Keep today's menu
//! little-chef save
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use little_chef::config::AppConfig;
use little_chef::session::{Session, SessionContext};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "little-chef",
    about = "Little Chef daily meal planner",
    long_about = "Plans a toddler's daily menu from the built-in recipe catalog, honoring allergens, pantry contents, and likes/dislikes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (profile, history, working menu)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a new menu for today
    Generate,

    /// Show the working menu and shopping list
    Show,

    /// Replace the dish in one slot
    Swap {
        /// Slot name (breakfast, lunch_meat, lunch_veg, lunch_soup, dinner_meat, dinner_veg, dinner_soup)
        slot: String,
    },

    /// Toggle "like" on a dish
    Like {
        /// Dish name
        dish: String,
    },

    /// Toggle "dislike" on a dish
    Dislike {
        /// Dish name
        dish: String,
    },

    /// Pantry management
    Pantry {
        #[command(subcommand)]
        action: PantryCommand,
    },

    /// Allergen management
    Allergens {
        #[command(subcommand)]
        action: AllergenCommand,
    },

    /// Move the shopping list into the pantry
    Restock,

    /// Archive the working menu
    Save {
        /// Date to file the menu under (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show archived menus, newest first
    History {
        /// Maximum entries to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Print the menu card
    Card {
        /// Emit the positioned layout as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Trigger notifications
    Notify {
        #[command(subcommand)]
        action: NotifyCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PantryCommand {
    /// List pantry contents
    List,

    /// Add items
    Add {
        /// Item names
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Remove an item
    Remove {
        /// Item name
        item: String,
    },

    /// Recognize items from a fridge photo
    Scan {
        /// Image file (optional for the mock provider)
        image: Option<PathBuf>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AllergenCommand {
    /// Show allergens
    List,

    /// Replace allergens
    Set {
        /// Preset allergens (repeatable)
        #[arg(long = "preset")]
        presets: Vec<String>,

        /// Extra allergens, comma-separated
        #[arg(long, default_value = "")]
        custom: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum NotifyCommand {
    /// Push the working menu
    Menu,
    /// Request a weekly plan
    Weekly,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone().with_level("warn")
    };
    logging.init()?;
    debug!(data_dir = %config.data_dir.display(), "starting little-chef");

    let mut session = Session::open(SessionContext::from_config(&config)?);

    match cli.command {
        Command::Generate => commands::menu::generate(&mut session)?,
        Command::Show => commands::menu::show(&session),
        Command::Swap { slot } => commands::menu::swap(&mut session, &slot)?,
        Command::Like { dish } => commands::menu::like(&mut session, &dish)?,
        Command::Dislike { dish } => commands::menu::dislike(&mut session, &dish)?,
        Command::Pantry { action } => match action {
            PantryCommand::List => commands::pantry::list(&session),
            PantryCommand::Add { items } => commands::pantry::add(&mut session, &items)?,
            PantryCommand::Remove { item } => commands::pantry::remove(&mut session, &item)?,
            PantryCommand::Scan { image } => {
                commands::pantry::scan(&mut session, image.as_deref()).await?;
            }
        },
        Command::Allergens { action } => match action {
            AllergenCommand::List => commands::profile::list_allergens(&session),
            AllergenCommand::Set { presets, custom } => {
                commands::profile::set_allergens(&mut session, &presets, &custom)?;
            }
        },
        Command::Restock => commands::pantry::restock(&mut session)?,
        Command::Save { date } => commands::menu::save(&session, date)?,
        Command::History { limit } => commands::menu::history(&session, limit),
        Command::Card { json } => commands::menu::card(&session, json)?,
        Command::Notify { action } => match action {
            NotifyCommand::Menu => commands::profile::notify_menu(&session).await,
            NotifyCommand::Weekly => commands::profile::request_weekly(&session).await,
        },
    }

    Ok(())
}
