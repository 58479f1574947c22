// SPDX-License-Identifier: MPL-2.0
//! Notification placements screen.
//!
//! Six buttons, one per screen placement. Pressing a button shows the
//! configured message at that placement for the configured duration; pressing
//! it again while the toast is up does nothing. The toast's close button
//! dismisses it early.

use super::host::IcedTimerHost;
use super::severity::Severity;
use super::toast::Toast;
use super::Message;
use crate::error::Result;
use crate::scheduler::{NotificationScheduler, Placement};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Task, Theme};
use log::warn;
use std::time::Duration;

type Scheduler = NotificationScheduler<Placement, IcedTimerHost<Placement>>;

/// Showcase screen state.
#[derive(Debug)]
pub struct State {
    scheduler: Scheduler,
    message: String,
    severity: Severity,
    /// Last contract violation reported by the scheduler, shown under the header.
    last_error: Option<String>,
}

impl State {
    /// Creates the screen with toasts lasting `duration` and showing `message`.
    pub fn new(duration: Duration, message: impl Into<String>) -> Self {
        Self {
            scheduler: NotificationScheduler::new(IcedTimerHost::new())
                .with_default_duration(duration),
            message: message.into(),
            severity: Severity::default(),
            last_error: None,
        }
    }

    /// Sets the accent used for every toast on this screen.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Trigger(placement) => {
                if let Err(err) = self.scheduler.trigger(placement, self.message.clone()) {
                    warn!("Could not show toast at {}: {}", placement, err);
                    self.last_error = Some(err.to_string());
                }
            }
            Message::Dismiss(placement) => {
                if let Err(err) = self.scheduler.dismiss(&placement) {
                    warn!("Could not dismiss toast at {}: {}", placement, err);
                    self.last_error = Some(err.to_string());
                }
            }
            Message::Expired(expiry) => {
                self.scheduler.expire(expiry);
            }
        }

        self.scheduler
            .host_mut()
            .take_tasks()
            .map(Message::Expired)
    }

    /// Releases every pending toast timer. Called once when the window closes.
    pub fn teardown(&mut self) -> Result<()> {
        self.scheduler.teardown()
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn view<'a>(&'a self, warning: Option<&'a str>) -> Element<'a, Message> {
        let title = Text::new("Notifications")
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_500),
            });
        let subtitle = Text::new("Notification places. Click a button to show a toast.")
            .size(typography::BODY_SM);

        let mut header = Column::new().spacing(spacing::XXS).push(title).push(subtitle);
        if let Some(notice) = warning.or(self.last_error()) {
            header = header.push(Text::new(notice).size(typography::BODY_SM).style(
                |_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                },
            ));
        }

        let placements = Placement::ALL;
        let (top, bottom) = placements.split_at(3);
        let grid = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fixed(sizing::BUTTON_GRID_WIDTH))
            .push(button_row(top))
            .push(button_row(bottom));

        let page = Container::new(
            Column::new()
                .spacing(spacing::LG)
                .align_x(alignment::Horizontal::Center)
                .push(header)
                .push(grid),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        });

        Stack::new()
            .push(page)
            .push(Toast::view_overlay(self.scheduler.active(), self.severity))
            .into()
    }
}

fn button_row<'a>(placements: &[Placement]) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = placements
        .iter()
        .map(|&placement| {
            let label = Container::new(Text::new(placement.label()).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center);

            button(label)
                .on_press(Message::Trigger(placement))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(placement_button_style)
                .into()
        })
        .collect();

    Row::with_children(buttons).spacing(spacing::SM).into()
}

fn placement_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Active | button::Status::Disabled => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: iced::Color::WHITE,
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
