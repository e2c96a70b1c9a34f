// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` entry and the `Severity` enum used by the
//! toast store and the toast tray.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a toast within its store.
///
/// Ids come from a per-store counter, so two toasts shown within the same
/// millisecond still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue).
    #[default]
    Info,
    /// Something worth noticing that did not fail (orange).
    Warning,
    /// A failure (red).
    Danger,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Danger => palette::DANGER_500,
        }
    }

    /// Returns the lowercase tag, as accepted by [`Severity::from_str`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Glyph drawn in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Danger => "⚠",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "danger" | "error" => Ok(Severity::Danger),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

/// A toast entry as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    message: String,
    /// Cleared when the exit transition starts.
    show: bool,
}

impl Toast {
    pub(crate) fn new(id: ToastId, severity: Severity, message: String) -> Self {
        Self {
            id,
            severity,
            message,
            show: true,
        }
    }

    /// Returns the toast's id.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `false` once the toast has started fading out.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.show
    }

    pub(crate) fn hide(&mut self) {
        self.show = false;
    }
}
