// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to inform users about actions (save success,
//! errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Toast` entry with severity levels
//! - [`store`] - `ToastStore` for ordering and lifecycle management
//! - [`toast`] - `ToastTray` for rendering toasts
//!
//! # Usage
//!
//! ```ignore
//! use feedback_kit::ui::notifications::{Severity, ToastStore};
//!
//! let store = ToastStore::default();
//! store.show(Severity::Danger, "Save failed")?;
//!
//! // In your view function, render the tray
//! let tray = ToastTray::view_overlay(&toasts, &i18n).map(Message::Toast);
//! ```
//!
//! # Lifecycle
//!
//! - Visible for 3s (configurable), then fading for 0.5s, then removed
//! - Display order is insertion order
//! - The dismiss button skips straight to the fade

mod notification;
mod store;
mod toast;

pub use notification::{Severity, Toast, ToastId};
pub use store::{Message, ToastState, ToastStore, ToastTiming, DEFAULT_DISPLAY, DEFAULT_FADE};
pub use toast::ToastTray;
