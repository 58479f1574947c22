// SPDX-License-Identifier: MPL-2.0
//! Per-slot notification state.

use std::time::Instant;

/// Internal state of one slot. The timer handle lives here and nowhere else,
/// so it exists exactly while the slot is active.
#[derive(Debug)]
pub(crate) enum NotificationState<K> {
    Idle,
    Active(Activation<K>),
}

#[derive(Debug)]
pub(crate) struct Activation<K> {
    pub(crate) message: String,
    pub(crate) deadline: Instant,
    pub(crate) generation: u64,
    pub(crate) handle: K,
}

impl<K> NotificationState<K> {
    pub(crate) fn view(&self) -> SlotState<'_> {
        match self {
            NotificationState::Idle => SlotState::Idle,
            NotificationState::Active(activation) => SlotState::Active {
                message: &activation.message,
                deadline: activation.deadline,
            },
        }
    }
}

/// Read-only view of a slot, as exposed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState<'a> {
    Idle,
    Active { message: &'a str, deadline: Instant },
}

impl<'a> SlotState<'a> {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, SlotState::Active { .. })
    }

    /// Message being displayed, if any. Borrows from the scheduler, not from
    /// this view.
    #[must_use]
    pub fn message(&self) -> Option<&'a str> {
        match *self {
            SlotState::Idle => None,
            SlotState::Active { message, .. } => Some(message),
        }
    }
}

/// Transition reported to the registered observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange<S> {
    /// `slot` went from idle to showing `message` until `deadline`.
    Activated {
        slot: S,
        message: String,
        deadline: Instant,
    },
    /// `slot` reached its deadline and went back to idle.
    Expired { slot: S },
    /// `slot` was closed explicitly before its deadline.
    Dismissed { slot: S },
    /// Every slot was released; no further changes follow.
    TornDown,
}

impl<S> StateChange<S> {
    /// Slot affected by this change, `None` for teardown.
    pub fn slot(&self) -> Option<&S> {
        match self {
            StateChange::Activated { slot, .. }
            | StateChange::Expired { slot }
            | StateChange::Dismissed { slot } => Some(slot),
            StateChange::TornDown => None,
        }
    }
}
