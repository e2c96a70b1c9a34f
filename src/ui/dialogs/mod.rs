// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation dialog.
//!
//! - [`confirm`] - `ConfirmStore`, the awaitable `Confirmation` and the re-ask policy
//! - [`modal`] - rendering of the dialog over the rest of the UI

pub mod confirm;
pub mod modal;

pub use confirm::{
    ConfirmKind, ConfirmState, ConfirmStore, Confirmation, DialogSnapshot, Message, ReaskPolicy,
};
