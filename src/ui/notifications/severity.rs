// SPDX-License-Identifier: MPL-2.0
//! Accent variants for toasts.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;

/// Severity level determines the toast's accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Brand blue.
    Primary,
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Primary,
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Danger,
    ];

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Primary => palette::PRIMARY_500,
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Danger => palette::ERROR_500,
        }
    }

    /// Name used in `settings.toml`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Primary => "primary",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown severity '{}' (expected primary, info, success, warning or danger)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSeverity {}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}
