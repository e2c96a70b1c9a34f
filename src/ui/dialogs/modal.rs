// SPDX-License-Identifier: MPL-2.0
//! Confirm modal rendering.
//!
//! The modal sits on top of the base view behind a dimmed backdrop. Clicking
//! the backdrop counts as cancelling.

use super::confirm::{ConfirmKind, DialogSnapshot, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, center, container, mouse_area, opaque, stack, Column, Container, Row, Text,
};
use iced::{alignment, Color, Element, Length, Theme};

/// Returns the accent color of the accept button for a dialog kind.
#[must_use]
pub fn accent(kind: ConfirmKind) -> Color {
    match kind {
        ConfirmKind::Danger => palette::DANGER_500,
        ConfirmKind::Info => palette::INFO_500,
    }
}

/// Renders the dialog card alone.
pub fn card<'a>(dialog: &'a DialogSnapshot, i18n: &'a I18n) -> Element<'a, Message> {
    let kind = dialog.kind;

    let title = Text::new(dialog.title.as_str()).size(typography::TITLE_SM);
    let message = Text::new(dialog.message.as_str()).size(typography::BODY);

    let cancel = button(Text::new(i18n.tr("confirm-cancel")).size(typography::BODY))
        .on_press(Message::Answer(false))
        .padding([spacing::XS, spacing::MD])
        .style(button::secondary);
    let accept = button(Text::new(i18n.tr("confirm-accept")).size(typography::BODY))
        .on_press(Message::Answer(true))
        .padding([spacing::XS, spacing::MD])
        .style(move |theme: &Theme, status| accept_button_style(theme, status, kind));

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(cancel)
        .push(accept);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(message)
        .push(
            Container::new(actions)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(move |theme: &Theme| card_style(theme, kind))
        .into()
}

/// Layers the dialog over `base` when it is open; returns `base` otherwise.
pub fn view<'a, M>(
    base: Element<'a, M>,
    dialog: &'a DialogSnapshot,
    i18n: &'a I18n,
    map: impl Fn(Message) -> M + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    if !dialog.is_open {
        return base;
    }

    let backdrop_message = map(Message::Answer(false));
    let card = opaque(card(dialog, i18n).map(map));

    stack![
        base,
        opaque(
            mouse_area(center(card).style(|_theme: &Theme| container::Style {
                background: Some(
                    Color {
                        a: opacity::OVERLAY_STRONG,
                        ..palette::BLACK
                    }
                    .into()
                ),
                ..container::Style::default()
            }))
            .on_press(backdrop_message)
        )
    ]
    .into()
}

fn card_style(theme: &Theme, kind: ConfirmKind) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: accent(kind),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn accept_button_style(_theme: &Theme, status: button::Status, kind: ConfirmKind) -> button::Style {
    let base = accent(kind);
    let background = match status {
        button::Status::Active => base,
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_HOVER,
            ..base
        },
        button::Status::Pressed => Color {
            a: opacity::OVERLAY_PRESSED,
            ..base
        },
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base
        },
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
