// SPDX-License-Identifier: MPL-2.0
//! `feedback_kit` provides toast notifications and awaitable confirmation
//! dialogs for Iced applications.
//!
//! Both are backed by observable stores (`tokio::sync::watch`) and reachable
//! through two helpers, [`feedback::show_alert`] and [`feedback::show_confirm`],
//! once the application has installed them at startup. The `app` module holds
//! a small demo shell that renders both.

#![doc(html_root_url = "https://docs.rs/feedback_kit/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod feedback;
pub mod i18n;
pub mod scheduler;
pub mod ui;
