// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The demo panel sits at the bottom layer, the toast tray above it and the
//! confirm modal on top when it is open.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dialogs::{modal, DialogSnapshot};
use crate::ui::notifications::{Severity, Toast, ToastTray};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Severities offered by the demo buttons, in display order.
pub const DEMO_SEVERITIES: [Severity; 4] = [
    Severity::Success,
    Severity::Info,
    Severity::Warning,
    Severity::Danger,
];

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a [Toast],
    pub dialog: &'a DialogSnapshot,
}

/// Renders the demo panel with the toast tray and the confirm modal layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = Stack::new()
        .push(demo_panel(ctx.i18n))
        .push(ToastTray::view_overlay(ctx.toasts, ctx.i18n).map(Message::Toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    modal::view(base, ctx.dialog, ctx.i18n, Message::Confirm)
}

fn demo_panel(i18n: &I18n) -> Element<'_, Message> {
    let alerts = DEMO_SEVERITIES
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, severity| {
            row.push(
                button(Text::new(i18n.tr(show_key(*severity))).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press(Message::ShowAlert(*severity)),
            )
        });

    let delete = button(Text::new(i18n.tr("demo-delete")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button::danger)
        .on_press(Message::AskDelete);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(alerts)
        .push(delete);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

/// Translation key of the button that shows a toast of `severity`.
pub fn show_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "demo-show-success",
        Severity::Info => "demo-show-info",
        Severity::Warning => "demo-show-warning",
        Severity::Danger => "demo-show-danger",
    }
}

/// Translation key of the sample message shown in a toast of `severity`.
pub fn message_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "demo-message-success",
        Severity::Info => "demo-message-info",
        Severity::Warning => "demo-message-warning",
        Severity::Danger => "demo-message-danger",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_demo_severity_has_translated_labels() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        for severity in DEMO_SEVERITIES {
            assert!(!i18n.tr(show_key(severity)).starts_with("MISSING"));
            assert!(!i18n.tr(message_key(severity)).starts_with("MISSING"));
        }
    }

    #[test]
    fn view_renders_with_open_dialog() {
        let i18n = I18n::default();
        let dialog = DialogSnapshot {
            is_open: true,
            title: "Delete?".to_string(),
            ..DialogSnapshot::default()
        };
        let _element = view(ViewContext {
            i18n: &i18n,
            toasts: &[],
            dialog: &dialog,
        });
    }
}
