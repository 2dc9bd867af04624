// ABOUTME: External collaborator providers used by sessions
// ABOUTME: Currently the pantry vision provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

/// Pantry image recognition
pub mod vision;

pub use vision::{MockVisionProvider, VisionProvider, MOCK_RECOGNIZED};
