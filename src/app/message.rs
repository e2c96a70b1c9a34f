// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::error::Result;
use crate::ui::dialogs;
use crate::ui::notifications::{self, Severity};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a sample toast of the given severity.
    ShowAlert(Severity),
    /// Ask for confirmation before a (pretend) deletion.
    AskDelete,
    /// The confirmation started by `AskDelete` settled.
    DeleteAnswered(Result<bool>),
    Toast(notifications::Message),
    Confirm(dialogs::Message),
    /// A store changed outside `update` (timers, helpers called elsewhere).
    StoresChanged,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FEEDBACK_KIT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
