// SPDX-License-Identifier: MPL-2.0
//! Toast tray rendering.
//!
//! Toasts appear as small cards with a severity-colored border, stacked in the
//! bottom-right corner. A toast that has started its exit transition is drawn
//! faded until the store removes it.

use super::notification::Toast;
use super::store::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders toasts held by a [`super::ToastStore`].
pub struct ToastTray;

impl ToastTray {
    /// Renders a single toast.
    pub fn view<'a>(toast: &'a Toast, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = toast.severity();
        let accent_color = severity.color();
        let fading = !toast.is_shown();

        let icon_widget = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(accent_color, fading)),
            });

        let message_widget = Text::new(toast.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, fading)),
            });

        let dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
            .on_press(Message::Dismiss(toast.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        let dismiss = tooltip(
            dismiss_button,
            Text::new(i18n.tr("toast-dismiss")).size(typography::CAPTION),
            tooltip::Position::Left,
        );

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, fading))
            .into()
    }

    /// Renders all toasts, oldest at the top, in the bottom-right corner.
    pub fn view_overlay<'a>(toasts: &'a [Toast], i18n: &'a I18n) -> Element<'a, Message> {
        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts.iter().map(|toast| Self::view(toast, i18n)))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn faded(color: Color, fading: bool) -> Color {
    if fading {
        Color {
            a: color.a * opacity::OVERLAY_MEDIUM,
            ..color
        }
    } else {
        color
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, fading: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, fading))),
        border: iced::Border {
            color: faded(accent_color, fading),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if fading { shadow::NONE } else { shadow::MD },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
