// SPDX-License-Identifier: MPL-2.0
//! Demo application showing toasts and the confirm dialog.
//!
//! [`App::new`] is the startup hook: it loads the configuration, builds the
//! feedback stores and installs them so [`crate::feedback::show_alert`] and
//! [`crate::feedback::show_confirm`] work from anywhere. The rest of the app
//! renders the stores and routes user input back to them.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::error::Error;
use crate::feedback::{self, Feedback};
use crate::i18n::fluent::I18n;
use crate::ui::dialogs::DialogSnapshot;
use crate::ui::notifications::{Severity, Toast};
use iced::{window, Element, Subscription, Task};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Name of the item the demo pretends to delete.
const DEMO_ITEM: &str = "report.pdf";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    feedback: Feedback,
    /// Toasts as of the last update, for rendering.
    toasts: Vec<Toast>,
    /// Dialog as of the last update, for rendering.
    dialog: DialogSnapshot,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("dialog_open", &self.dialog.is_open)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, creates the feedback stores and installs them as
    /// the process-wide helpers.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        config::paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Err(err) = feedback::install(Feedback::new(&config)) {
            tracing::warn!("{err}; reusing the existing stores");
        }
        let feedback = feedback::installed()
            .cloned()
            .unwrap_or_else(|| Feedback::new(&config));

        let mut app = Self::with_feedback(i18n, feedback);

        // Show warnings for config loading issues
        if let Some(key) = config_warning {
            app.alert(Severity::Warning, app.i18n.tr(&key));
            app.refresh();
        }

        (app, Task::none())
    }

    /// Creates the app around existing stores without touching the global helpers.
    pub fn with_feedback(i18n: I18n, feedback: Feedback) -> Self {
        let mut app = Self {
            i18n,
            feedback,
            toasts: Vec::new(),
            dialog: DialogSnapshot::default(),
        };
        app.refresh();
        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_store_subscription(&self.feedback)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::ShowAlert(severity) => {
                self.alert(severity, self.i18n.tr(view::message_key(severity)));
                Task::none()
            }
            Message::AskDelete => {
                let confirmation = self.feedback.show_confirm(
                    self.i18n.tr("demo-delete-title"),
                    self.i18n.tr("demo-delete-message"),
                    None,
                );
                Task::perform(confirmation, Message::DeleteAnswered)
            }
            Message::DeleteAnswered(answer) => {
                self.handle_delete_answer(answer);
                Task::none()
            }
            Message::Toast(toast_message) => {
                self.feedback.toasts().handle_message(&toast_message);
                Task::none()
            }
            Message::Confirm(confirm_message) => {
                self.feedback.confirm().handle_message(&confirm_message);
                Task::none()
            }
            // The refresh below picks up the change.
            Message::StoresChanged => Task::none(),
        };

        self.refresh();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toasts: &self.toasts,
            dialog: &self.dialog,
        })
    }

    fn handle_delete_answer(&mut self, answer: crate::error::Result<bool>) {
        match answer {
            Ok(true) => {
                let text = self.i18n.tr_with_args("demo-deleted", &[("item", DEMO_ITEM)]);
                self.alert(Severity::Success, text);
            }
            Ok(false) => self.alert(Severity::Info, self.i18n.tr("demo-delete-cancelled")),
            Err(Error::ConfirmSuperseded) => {
                self.alert(Severity::Warning, self.i18n.tr("demo-delete-superseded"));
            }
            Err(err) => tracing::warn!("delete confirmation failed: {err}"),
        }
    }

    fn alert(&self, severity: Severity, text: String) {
        if let Err(err) = self.feedback.show_alert(severity, text) {
            tracing::warn!(%severity, "could not show toast: {err}");
        }
    }

    /// Copies the current store state into the render snapshots.
    fn refresh(&mut self) {
        self.toasts = self.feedback.toasts().items();
        self.dialog = self.feedback.confirm().snapshot();
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn dialog(&self) -> &DialogSnapshot {
        &self.dialog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::dialogs;
    use crate::ui::notifications;
    use iced::futures::StreamExt;
    use std::time::Duration;

    fn test_app() -> App {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        App::with_feedback(i18n, Feedback::default())
    }

    #[tokio::test(start_paused = true)]
    async fn show_alert_message_adds_toast_snapshot() {
        let mut app = test_app();
        let _ = app.update(Message::ShowAlert(Severity::Danger));

        assert_eq!(app.toasts().len(), 1);
        assert_eq!(app.toasts()[0].severity(), Severity::Danger);
        assert_eq!(app.toasts()[0].message(), app.i18n.tr("demo-message-danger"));
    }

    #[tokio::test(start_paused = true)]
    async fn changes_made_outside_update_reach_the_view() {
        let feedback = Feedback::default();
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let mut app = App::with_feedback(i18n, feedback.clone());
        let mut changes = Box::pin(subscription::store_changes(
            &subscription::WatchedStores(feedback.clone()),
        ));

        // As a background task would: straight to the stores, not via update.
        let _pending = feedback.show_confirm("Delete?", "This cannot be undone.", None);
        feedback.show_alert(Severity::Info, "Synced").unwrap();
        assert!(!app.dialog().is_open);

        let message = changes.next().await.expect("stores are alive");
        assert!(matches!(message, Message::StoresChanged));
        let _ = app.update(message);
        assert!(app.dialog().is_open);
        assert_eq!(app.toasts().len(), 1);

        // Timer-driven transitions arrive the same way.
        tokio::time::sleep(Duration::from_millis(3001)).await;
        let _ = app.update(changes.next().await.expect("stores are alive"));
        assert!(!app.toasts()[0].is_shown());
    }

    #[tokio::test]
    async fn store_changes_end_when_the_stores_are_dropped() {
        let feedback = Feedback::default();
        let mut changes = Box::pin(subscription::store_changes(
            &subscription::WatchedStores(feedback.clone()),
        ));
        drop(feedback);

        assert!(changes.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_message_starts_fade() {
        let mut app = test_app();
        let _ = app.update(Message::ShowAlert(Severity::Success));
        let id = app.toasts()[0].id();

        let _ = app.update(Message::Toast(notifications::Message::Dismiss(id)));
        assert!(!app.toasts()[0].is_shown());
    }

    #[tokio::test]
    async fn ask_delete_opens_dialog_and_answer_closes_it() {
        let mut app = test_app();
        let _ = app.update(Message::AskDelete);

        assert!(app.dialog().is_open);
        assert_eq!(app.dialog().title, app.i18n.tr("demo-delete-title"));

        let _ = app.update(Message::Confirm(dialogs::Message::Answer(false)));
        assert!(!app.dialog().is_open);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_answers_produce_matching_toasts() {
        let mut app = test_app();

        let _ = app.update(Message::DeleteAnswered(Ok(true)));
        let _ = app.update(Message::DeleteAnswered(Ok(false)));
        let _ = app.update(Message::DeleteAnswered(Err(Error::ConfirmAbandoned)));

        let toasts = app.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].severity(), Severity::Success);
        assert_eq!(toasts[0].message(), "Deleted report.pdf");
        assert_eq!(toasts[1].severity(), Severity::Info);
    }

    #[test]
    fn title_is_localized() {
        let app = test_app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn alert_outside_runtime_is_logged_not_fatal() {
        let mut app = test_app();
        let _ = app.update(Message::ShowAlert(Severity::Warning));
        assert!(app.toasts().is_empty());
    }
}
