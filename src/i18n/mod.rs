// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization using the Fluent localization system.
//! Translations cover the dialog buttons, the toast dismiss tooltip and the
//! demo application's own strings. Toast and dialog messages passed by callers
//! are displayed as-is.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at build time
//! - Runtime language switching
//! - Fallback to the default locale when translations are missing

pub mod fluent;
