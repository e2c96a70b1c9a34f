// SPDX-License-Identifier: MPL-2.0
//! Alert and confirm helpers.
//!
//! [`Feedback`] bundles the toast store and the confirm store behind two calls,
//! [`Feedback::show_alert`] and [`Feedback::show_confirm`]. The application's
//! boot code builds one from the loaded configuration and registers it with
//! [`install`], after which the free functions [`show_alert`] and
//! [`show_confirm`] can be used from anywhere in the process.
//!
//! # Examples
//!
//! ```no_run
//! use feedback_kit::config::Config;
//! use feedback_kit::feedback::{self, Feedback};
//! use feedback_kit::ui::notifications::Severity;
//!
//! # async fn demo() -> feedback_kit::error::Result<()> {
//! feedback::install(Feedback::new(&Config::default()))?;
//!
//! feedback::show_alert(Severity::Success, "Saved")?;
//! if feedback::show_confirm("Delete?", "This cannot be undone.", None)?.await? {
//!     // delete
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ui::dialogs::{ConfirmKind, ConfirmStore, Confirmation};
use crate::ui::notifications::{Severity, ToastId, ToastStore};
use std::sync::OnceLock;

static INSTALLED: OnceLock<Feedback> = OnceLock::new();

/// Handle to both feedback stores. Clones share the same stores.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    toasts: ToastStore,
    confirm: ConfirmStore,
}

impl Feedback {
    /// Builds both stores from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::from_stores(
            ToastStore::new(config.toast.timing()),
            ConfirmStore::new(
                config.confirm.reask.unwrap_or_default(),
                config.confirm.default_kind.unwrap_or_default(),
            ),
        )
    }

    #[must_use]
    pub fn from_stores(toasts: ToastStore, confirm: ConfirmStore) -> Self {
        Self { toasts, confirm }
    }

    /// Shows a toast. See [`ToastStore::show`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`] outside a tokio runtime.
    pub fn show_alert(&self, severity: Severity, message: impl Into<String>) -> Result<ToastId> {
        self.toasts.show(severity, message)
    }

    /// Opens the confirm dialog. See [`ConfirmStore::ask`].
    pub fn show_confirm(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: Option<ConfirmKind>,
    ) -> Confirmation {
        self.confirm.ask(title, message, kind)
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastStore {
        &self.toasts
    }

    #[must_use]
    pub fn confirm(&self) -> &ConfirmStore {
        &self.confirm
    }
}

/// Registers `feedback` as the process-wide handle used by the free functions.
///
/// # Errors
///
/// Returns [`Error::AlreadyInstalled`] if a handle was installed before; the
/// first one stays in place.
pub fn install(feedback: Feedback) -> Result<()> {
    INSTALLED.set(feedback).map_err(|_| Error::AlreadyInstalled)?;
    tracing::debug!("feedback helpers installed");
    Ok(())
}

/// Returns the installed handle, if any.
#[must_use]
pub fn installed() -> Option<&'static Feedback> {
    INSTALLED.get()
}

fn require() -> Result<&'static Feedback> {
    installed().ok_or(Error::NotInstalled)
}

/// Shows a toast through the installed handle.
///
/// # Errors
///
/// Returns [`Error::NotInstalled`] before [`install`], or
/// [`Error::NoRuntime`] outside a tokio runtime.
pub fn show_alert(severity: Severity, message: impl Into<String>) -> Result<ToastId> {
    require()?.show_alert(severity, message)
}

/// Opens the confirm dialog through the installed handle.
///
/// # Errors
///
/// Returns [`Error::NotInstalled`] before [`install`].
pub fn show_confirm(
    title: impl Into<String>,
    message: impl Into<String>,
    kind: Option<ConfirmKind>,
) -> Result<Confirmation> {
    Ok(require()?.show_confirm(title, message, kind))
}
