// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Smallest window the layouts are designed for.
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Location shown at startup when none is requested.
pub const DEFAULT_START_ROUTE: &str = "/";
