// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering slot notifications.
//!
//! Toasts are small cards with a severity-colored accent border and a close
//! button, pinned to the screen corner or edge named by their placement.

use super::severity::Severity;
use super::Message;
use crate::scheduler::Placement;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast for `placement`.
    pub fn view(placement: Placement, message: &str, severity: Severity) -> Element<'_, Message> {
        let accent_color = severity.color();

        let message_widget =
            Text::new(message)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(placement))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every active toast at its own placement, layered over the page.
    pub fn view_overlay<'a>(
        active: impl Iterator<Item = (&'a Placement, &'a str)>,
        severity: Severity,
    ) -> Element<'a, Message> {
        let layers: Vec<Element<'a, Message>> = active
            .map(|(placement, message)| {
                let (horizontal, vertical) = anchor(*placement);
                Container::new(Self::view(*placement, message, severity))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(horizontal)
                    .align_y(vertical)
                    .padding(spacing::MD)
                    .into()
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Screen anchor of a placement.
pub fn anchor(placement: Placement) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match placement {
        Placement::TopLeft | Placement::BottomLeft => alignment::Horizontal::Left,
        Placement::TopCenter | Placement::BottomCenter => alignment::Horizontal::Center,
        Placement::TopRight | Placement::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if placement.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: if status == button::Status::Hovered {
                hover_background(opacity::OVERLAY_SUBTLE)
            } else {
                hover_background(opacity::OVERLAY_MEDIUM)
            },
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
