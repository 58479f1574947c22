// SPDX-License-Identifier: MPL-2.0
//! `toastboard` shows short-lived toast notifications, one per screen slot.
//!
//! The core is [`scheduler::NotificationScheduler`], a UI-independent table of
//! slots that bounds every notification's lifetime with an owned, cancellable
//! timer. The [`ui`] and [`app`] modules wrap it in an Iced dashboard screen.

pub mod app;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod ui;
