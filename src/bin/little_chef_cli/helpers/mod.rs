// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors
// ABOUTME: Re-exports helper modules for little-chef
// ABOUTME: Provides terminal display formatting

pub mod display;
