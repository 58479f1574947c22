// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for the dashboard.
//!
//! The slot logic lives in [`crate::scheduler`]; this module connects it to
//! Iced: timers run as runtime tasks, toasts render at their placement, and
//! the showcase screen offers one button per placement.
//!
//! # Components
//!
//! - [`host`] - `IcedTimerHost`, expiry timers as abortable Iced tasks
//! - [`toast`] - Toast widget and the placement overlay
//! - [`severity`] - accent color variants
//! - [`showcase`] - the placements screen and its state
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{showcase, NotificationMessage};
//!
//! let mut screen = showcase::State::new(Duration::from_secs(6), "Saved");
//!
//! // In update, forward messages and return the timer tasks to the runtime
//! let task = screen.update(NotificationMessage::Trigger(Placement::TopLeft));
//! ```

pub mod host;
pub mod severity;
pub mod showcase;
mod toast;

use crate::scheduler::{Expiry, Placement};

pub use host::IcedTimerHost;
pub use severity::{Severity, UnknownSeverity};
pub use toast::{anchor, Toast};

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Show the configured message at a placement.
    Trigger(Placement),
    /// Close the toast at a placement.
    Dismiss(Placement),
    /// A toast timer fired.
    Expired(Expiry<Placement>),
}

pub use Message as NotificationMessage;
