// SPDX-License-Identifier: MPL-2.0
//! Application root state for the notifications dashboard.
//!
//! The `App` owns the showcase screen (and through it the notification
//! scheduler), applies the persisted configuration at startup, and tears the
//! scheduler down when the window is closed so no toast timer outlives it.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::notifications::{showcase, Severity};
use iced::{window, Element, Subscription, Task, Theme};
use log::{info, warn};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    showcase: showcase::State,
    /// Warning produced while loading `settings.toml`, shown in the header.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_toasts", &self.showcase.scheduler().active_count())
            .field("config_warning", &self.config_warning)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through `App::update` so timers are released first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the configured toast accent, falling back to the default.
fn toast_severity(name: Option<&str>) -> Severity {
    match name.map(str::parse::<Severity>) {
        Some(Ok(severity)) => severity,
        Some(Err(err)) => {
            warn!("Ignoring [showcase] severity: {}", err);
            Severity::default()
        }
        None => Severity::default(),
    }
}

impl App {
    /// Loads the configuration and builds the showcase screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::from_flags(flags), Task::none())
    }

    fn from_flags(flags: Flags) -> Self {
        if !paths::init_cli_override(flags.config_dir) {
            warn!("Config directory override already set, keeping the first one");
        }

        let (config, config_warning) = config::load();
        if let Some(warning) = &config_warning {
            warn!("{}", warning);
        }

        let duration = match flags.duration_ms {
            Some(millis) => Duration::from_millis(
                millis.clamp(config::MIN_DURATION_MS, config::MAX_DURATION_MS),
            ),
            None => config.notifications.duration(),
        };
        info!("Toasts stay visible for {:?}", duration);

        let severity = toast_severity(config.showcase.severity.as_deref());

        Self {
            showcase: showcase::State::new(duration, config.showcase.message())
                .with_severity(severity),
            config_warning,
        }
    }

    fn title(&self) -> String {
        match self.showcase.scheduler().active_count() {
            0 => "Toastboard".to_string(),
            count => format!("Toastboard ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => {
                self.showcase.update(message).map(Message::Notification)
            }
            Message::WindowCloseRequested(id) => {
                if let Err(err) = self.showcase.teardown() {
                    warn!("Notification teardown on close: {}", err);
                }
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.showcase
            .view(self.config_warning.as_deref())
            .map(Message::Notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Placement;
    use crate::ui::notifications::NotificationMessage;

    fn app() -> App {
        App {
            showcase: showcase::State::new(Duration::from_secs(6), "hello"),
            config_warning: None,
        }
    }

    #[test]
    fn title_counts_active_toasts() {
        let mut app = app();
        assert_eq!(app.title(), "Toastboard");

        let _ = app.update(Message::Notification(NotificationMessage::Trigger(
            Placement::TopLeft,
        )));
        let _ = app.update(Message::Notification(NotificationMessage::Trigger(
            Placement::BottomRight,
        )));
        assert_eq!(app.title(), "Toastboard (2)");
    }

    #[test]
    fn notification_messages_reach_showcase() {
        let mut app = app();
        let _ = app.update(Message::Notification(NotificationMessage::Trigger(
            Placement::TopCenter,
        )));
        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(
            Placement::TopCenter,
        )));

        assert!(!app.showcase.scheduler().is_active(&Placement::TopCenter));
    }

    #[test]
    fn configured_severity_is_parsed_with_fallback() {
        assert_eq!(toast_severity(Some("warning")), Severity::Warning);
        assert_eq!(toast_severity(Some("bogus")), Severity::Info);
        assert_eq!(toast_severity(None), Severity::Info);
    }

    #[test]
    fn window_settings_defer_close_to_update() {
        let settings = window_settings();
        assert!(!settings.exit_on_close_request);
        assert_eq!(
            settings.min_size,
            Some(iced::Size::new(
                MIN_WINDOW_WIDTH as f32,
                MIN_WINDOW_HEIGHT as f32
            ))
        );
    }
}
