// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: stores
//! own the state, views render snapshots of it and send messages back.
//!
//! - [`notifications`] - Toast store and tray
//! - [`dialogs`] - Confirm store and modal
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod dialogs;
pub mod notifications;
