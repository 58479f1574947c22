// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOASTBOARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional toast lifetime override in milliseconds.
    /// Takes precedence over `[notifications] duration_ms`.
    pub duration_ms: Option<u64>,
}
