// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: display and fade durations with their bounds
//! - **Confirm**: dialog defaults live on the enums themselves

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays visible before fading (in milliseconds).
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 3000;

/// Minimum display time (in milliseconds).
pub const MIN_TOAST_DISPLAY_MS: u64 = 500;

/// Maximum display time (in milliseconds).
pub const MAX_TOAST_DISPLAY_MS: u64 = 60_000;

/// Default fade window before a hidden toast is removed (in milliseconds).
pub const DEFAULT_TOAST_FADE_MS: u64 = 500;

/// Minimum fade window (in milliseconds). Zero removes toasts right after hiding.
pub const MIN_TOAST_FADE_MS: u64 = 0;

/// Maximum fade window (in milliseconds).
pub const MAX_TOAST_FADE_MS: u64 = 5000;
