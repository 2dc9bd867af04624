// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors
// ABOUTME: Re-exports command modules for little-chef
// ABOUTME: Provides menu, pantry, and profile commands

pub mod menu;
pub mod pantry;
pub mod profile;
