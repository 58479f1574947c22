// SPDX-License-Identifier: MPL-2.0
//! Timed notification slots.
//!
//! A slot is an independent notification channel, typically a screen
//! position. Each slot shows at most one notification at a time and retires
//! it automatically once its duration elapses.
//!
//! # Components
//!
//! - [`manager`] - `NotificationScheduler`, the slot table and its lifecycle
//! - [`state`] - per-slot state and the changes reported to observers
//! - [`slot`] - `Placement`, the screen positions used by the dashboard
//! - [`timer`] - the `TimerHost` seam and its manual/tokio implementations
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use toastboard::scheduler::{ManualTimerHost, NotificationScheduler, Placement};
//!
//! let mut scheduler = NotificationScheduler::new(ManualTimerHost::new());
//!
//! assert_eq!(scheduler.trigger(Placement::TopLeft, "hello"), Ok(true));
//! // Already showing: the second message is dropped.
//! assert_eq!(scheduler.trigger(Placement::TopLeft, "world"), Ok(false));
//! assert_eq!(scheduler.message(&Placement::TopLeft), Some("hello"));
//!
//! scheduler.advance(Duration::from_secs(6));
//! assert!(!scheduler.is_active(&Placement::TopLeft));
//! ```
//!
//! # Lifecycle
//!
//! `Idle --trigger--> Active --{expiry | dismiss}--> Idle`. A trigger on an
//! active slot changes nothing. `teardown` (or dropping the scheduler) cancels
//! every pending timer; after teardown, mutating calls fail with
//! `Error::AlreadyDisposed`.

pub mod manager;
pub mod slot;
pub mod state;
pub mod timer;

pub use manager::NotificationScheduler;
pub use slot::{Placement, UnknownPlacement};
pub use state::{SlotState, StateChange};
pub use timer::{
    Expiry, ManualHandle, ManualTimerHost, TimerHost, TokioTimerHost, MAX_TIMER_DELAY,
};
