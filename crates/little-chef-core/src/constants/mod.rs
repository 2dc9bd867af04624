// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Ingredient categories, profile defaults, storage file names, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! Constants shared by the core, the engine, and the application crate.

/// Service names used for structured logging
pub mod service_names {
    /// Main application
    pub const LITTLE_CHEF: &str = "little-chef";
    /// Vision (pantry scan) collaborator
    pub const VISION: &str = "vision";
    /// Notification push collaborator
    pub const NOTIFICATIONS: &str = "notifications";
}

/// Ingredient classification tables
pub mod ingredients {
    /// Raw or canonical ingredient names treated as red meat.
    ///
    /// "排骨" normalizes to "猪肉"; it is listed so the raw-name filter in dish
    /// selection catches it too.
    pub const RED_MEAT: &[&str] = &["牛肉", "猪肉", "排骨", "羊肉", "猪肝"];

    /// Allergens offered as presets when editing a profile
    pub const COMMON_ALLERGENS: &[&str] =
        &["牛奶", "奶粉", "牛肉", "鸡蛋", "虾", "鱼", "花生", "麦麸"];

    /// Check whether a name is in the red-meat list
    #[must_use]
    pub fn is_red_meat(name: &str) -> bool {
        RED_MEAT.contains(&name)
    }
}

/// Defaults for a freshly created profile
pub mod profile_defaults {
    /// Default child nickname
    pub const NICKNAME: &str = "Bingo";
    /// Default age label (display only)
    pub const AGE: &str = "2岁";
    /// Default height in centimetres (display only)
    pub const HEIGHT: &str = "90";
    /// Default weight in kilograms (display only)
    pub const WEIGHT: &str = "13";
    /// Default nutrition goals (display only)
    pub const NUTRITION_GOALS: &[&str] = &["补钙"];
    /// Starter pantry
    pub const PANTRY: &[&str] = &["鸡蛋", "牛肉", "西红柿", "土豆"];
}

/// Local storage layout
pub mod storage {
    /// Profile record file name
    pub const PROFILE_FILE: &str = "user_data.json";
    /// Menu history log file name
    pub const HISTORY_FILE: &str = "menu_history.json";
    /// Working menu file name
    pub const MENU_STATE_FILE: &str = "menu_state.json";
    /// Directory name under the platform data dir
    pub const APP_DIR: &str = "little-chef";
}

/// Menu card presentation
pub mod menu_card {
    /// Canvas width in pixels
    pub const WIDTH: u32 = 800;
    /// Canvas height in pixels
    pub const HEIGHT: u32 = 1200;
    /// Baseline of the title line
    pub const TITLE_Y: u32 = 100;
    /// Baseline of the first section header
    pub const FIRST_SECTION_Y: u32 = 220;
    /// Advance after a section header
    pub const HEADER_ADVANCE: u32 = 60;
    /// Advance after each dish line
    pub const LINE_ADVANCE: u32 = 50;
    /// Extra gap after a section
    pub const SECTION_GAP: u32 = 40;
    /// Offset of the fruit line below the last section
    pub const FRUIT_OFFSET: u32 = 30;
    /// Distance of the footer from the bottom edge
    pub const FOOTER_MARGIN: u32 = 50;
    /// Placeholder shown for an empty slot
    pub const EMPTY_SLOT: &str = "—";
    /// Drink always served with breakfast
    pub const BREAKFAST_DRINK: &str = "🥛 热牛奶";
    /// Footer text
    pub const FOOTER: &str = "Generated by Little Chef";
}
