// ABOUTME: Shareable menu card layout computed from the working menu
// ABOUTME: Produces positioned text lines for a fixed-size card plus a plain-text rendition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

//! # Menu Card
//!
//! Lays out the daily menu on a fixed 800×1200 card. Every line is centered
//! horizontally; only its vertical offset, role, and font size vary.
//! Rasterising the layout is left to the presentation layer.

use std::fmt::Write as _;

use little_chef_core::constants::menu_card as layout;
use little_chef_core::models::{DailyMenu, Meal};
use serde::{Deserialize, Serialize};

const TITLE_FONT: u32 = 60;
const HEADER_FONT: u32 = 40;
const BODY_FONT: u32 = 30;
const FOOTNOTE_FONT: u32 = 24;
const BORDER_INSET: u32 = 30;

/// What a line is for; drives font and color choice when rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// Card title
    Title,
    /// Meal section header
    Header,
    /// Dish, drink, or fruit line
    Body,
    /// Footer
    Footnote,
}

impl LineRole {
    /// Font size in pixels
    #[must_use]
    pub const fn font_size(self) -> u32 {
        match self {
            Self::Title => TITLE_FONT,
            Self::Header => HEADER_FONT,
            Self::Body => BODY_FONT,
            Self::Footnote => FOOTNOTE_FONT,
        }
    }
}

/// One centered line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLine {
    /// Line role
    pub role: LineRole,
    /// Text content
    pub text: String,
    /// Horizontal center
    pub x: u32,
    /// Vertical center
    pub y: u32,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: u32,
    /// Top edge
    pub top: u32,
    /// Right edge
    pub right: u32,
    /// Bottom edge
    pub bottom: u32,
}

/// Complete card layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCard {
    /// Card width
    pub width: u32,
    /// Card height
    pub height: u32,
    /// Decorative border
    pub border: Rect,
    /// Lines in drawing order
    pub lines: Vec<CardLine>,
}

impl MenuCard {
    /// Lay out a menu for a child's nickname
    #[must_use]
    pub fn compose(menu: &DailyMenu, nickname: &str) -> Self {
        let mut builder = CardBuilder::new();
        builder.push(LineRole::Title, format!("{nickname} 的今日食谱"), layout::TITLE_Y);

        let mut y = layout::FIRST_SECTION_Y;
        for meal in [Meal::Breakfast, Meal::Lunch, Meal::Dinner] {
            let mut dishes: Vec<String> = meal
                .slots()
                .iter()
                .map(|slot| menu.dish_name(*slot).unwrap_or(layout::EMPTY_SLOT).to_owned())
                .collect();
            if meal == Meal::Breakfast {
                dishes.push(layout::BREAKFAST_DRINK.to_owned());
            }
            y = builder.section(meal.title(), &dishes, y);
        }

        let fruit = menu.fruit().unwrap_or(layout::EMPTY_SLOT);
        builder.push(
            LineRole::Body,
            format!("🍎 加餐：{fruit}"),
            y + layout::FRUIT_OFFSET,
        );
        builder.push(
            LineRole::Footnote,
            layout::FOOTER.to_owned(),
            layout::HEIGHT - layout::FOOTER_MARGIN,
        );

        Self {
            width: layout::WIDTH,
            height: layout::HEIGHT,
            border: Rect {
                left: BORDER_INSET,
                top: BORDER_INSET,
                right: layout::WIDTH - BORDER_INSET,
                bottom: layout::HEIGHT - BORDER_INSET,
            },
            lines: builder.lines,
        }
    }

    /// Lines with a given role
    pub fn lines_with(&self, role: LineRole) -> impl Iterator<Item = &CardLine> + '_ {
        self.lines.iter().filter(move |l| l.role == role)
    }

    /// Plain-text rendition, one line per card line with a blank line before
    /// each section header and the footer
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            if matches!(line.role, LineRole::Header | LineRole::Footnote) {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", line.text);
        }
        out
    }
}

struct CardBuilder {
    lines: Vec<CardLine>,
}

impl CardBuilder {
    const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn push(&mut self, role: LineRole, text: String, y: u32) {
        self.lines.push(CardLine {
            role,
            text,
            x: layout::WIDTH / 2,
            y,
        });
    }

    /// Header, then one line per dish. Returns the y where the next section starts.
    fn section(&mut self, title: &str, dishes: &[String], mut y: u32) -> u32 {
        self.push(LineRole::Header, format!("— {title} —"), y);
        y += layout::HEADER_ADVANCE;
        for dish in dishes {
            self.push(LineRole::Body, dish.clone(), y);
            y += layout::LINE_ADVANCE;
        }
        y + layout::SECTION_GAP
    }
}
