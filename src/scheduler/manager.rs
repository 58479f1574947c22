// SPDX-License-Identifier: MPL-2.0
//! Slot table and lifecycle of timed notifications.
//!
//! The `NotificationScheduler` keeps one entry per slot, shows at most one
//! notification per slot, retires it when its timer fires and ignores triggers
//! for a slot that is already showing something. Every pending timer is owned
//! by its slot entry and cancelled on dismiss, teardown or drop.

use super::state::{Activation, NotificationState, SlotState, StateChange};
use super::timer::{saturating_deadline, Expiry, ManualTimerHost, TimerHost, MAX_TIMER_DELAY};
use crate::config::defaults::DEFAULT_DURATION_MS;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Shortest delay ever handed to the timer host.
const MIN_TIMER_DELAY: Duration = Duration::from_millis(1);

fn clamp_delay(duration: Duration) -> Duration {
    duration.clamp(MIN_TIMER_DELAY, MAX_TIMER_DELAY)
}

type Observer<S> = Box<dyn FnMut(&StateChange<S>)>;

struct Entry<S, K> {
    slot: S,
    state: NotificationState<K>,
    next_generation: u64,
}

/// Multi-slot notification scheduler.
///
/// Entries live in an arena (`entries`) indexed by slot, created on the first
/// trigger for a slot and kept for the scheduler's lifetime in first-trigger
/// order.
pub struct NotificationScheduler<S, H>
where
    H: TimerHost<S>,
{
    host: H,
    entries: Vec<Entry<S, H::Handle>>,
    index: HashMap<S, usize>,
    default_duration: Duration,
    observer: Option<Observer<S>>,
    disposed: bool,
}

impl<S: fmt::Debug, H: TimerHost<S>> fmt::Debug for NotificationScheduler<S, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active: Vec<&S> = self
            .entries
            .iter()
            .filter(|entry| matches!(entry.state, NotificationState::Active(_)))
            .map(|entry| &entry.slot)
            .collect();
        f.debug_struct("NotificationScheduler")
            .field("slots", &self.entries.len())
            .field("active", &active)
            .field("default_duration", &self.default_duration)
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl<S, H> NotificationScheduler<S, H>
where
    S: Clone + Eq + Hash + fmt::Debug,
    H: TimerHost<S>,
{
    /// Creates a scheduler on `host` with the default 6 second lifetime.
    pub fn new(host: H) -> Self {
        Self {
            host,
            entries: Vec::new(),
            index: HashMap::new(),
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            observer: None,
            disposed: false,
        }
    }

    /// Sets the lifetime used by [`trigger`](Self::trigger).
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = clamp_delay(duration);
        self
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Registers the callback invoked on every state change.
    ///
    /// Replaces any previously registered observer.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&StateChange<S>) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Shows `message` in `slot` for the default duration.
    ///
    /// Returns `Ok(false)` without touching anything if the slot is already
    /// showing a notification.
    pub fn trigger(&mut self, slot: S, message: impl Into<String>) -> Result<bool> {
        let duration = self.default_duration;
        self.trigger_for(slot, message, duration)
    }

    /// Shows `message` in `slot` for `duration`.
    ///
    /// A zero duration is raised to the minimum timer delay, and anything
    /// longer than [`MAX_TIMER_DELAY`] is cut down to it.
    pub fn trigger_for(
        &mut self,
        slot: S,
        message: impl Into<String>,
        duration: Duration,
    ) -> Result<bool> {
        self.ensure_live("trigger")?;

        let existing = self.index.get(&slot).copied();
        if let Some(idx) = existing {
            if let NotificationState::Active(_) = self.entries[idx].state {
                debug!("Ignoring trigger for already active slot {:?}", slot);
                return Ok(false);
            }
        }

        // The table is only touched once the deadline is known.
        let duration = clamp_delay(duration);
        let now = self.host.now();
        let deadline = saturating_deadline(now, duration);
        let delay = deadline.saturating_duration_since(now);

        let idx = existing.unwrap_or_else(|| {
            let idx = self.entries.len();
            self.entries.push(Entry {
                slot: slot.clone(),
                state: NotificationState::Idle,
                next_generation: 0,
            });
            self.index.insert(slot.clone(), idx);
            idx
        });

        let generation = {
            let entry = &mut self.entries[idx];
            let generation = entry.next_generation;
            entry.next_generation += 1;
            generation
        };
        let handle = self.host.schedule(
            delay,
            Expiry {
                slot: slot.clone(),
                generation,
            },
        );

        let message = message.into();
        self.entries[idx].state = NotificationState::Active(Activation {
            message: message.clone(),
            deadline,
            generation,
            handle,
        });

        debug!("Activated slot {:?} for {:?}", slot, delay);
        self.notify(&StateChange::Activated {
            slot,
            message,
            deadline,
        });
        Ok(true)
    }

    /// Closes the notification in `slot` and cancels its timer.
    ///
    /// Returns `Ok(false)` for an idle or never-triggered slot.
    pub fn dismiss(&mut self, slot: &S) -> Result<bool> {
        self.ensure_live("dismiss")?;

        let Some(&idx) = self.index.get(slot) else {
            return Ok(false);
        };

        match std::mem::replace(&mut self.entries[idx].state, NotificationState::Idle) {
            NotificationState::Active(activation) => {
                self.host.cancel(activation.handle);
                debug!("Dismissed slot {:?}", slot);
                self.notify(&StateChange::Dismissed { slot: slot.clone() });
                Ok(true)
            }
            NotificationState::Idle => Ok(false),
        }
    }

    /// Applies a fired timer.
    ///
    /// The expiry only takes effect if its slot is still showing the
    /// activation it was scheduled for; anything else is a stale delivery and
    /// is dropped. Returns whether the slot went back to idle.
    pub fn expire(&mut self, expiry: Expiry<S>) -> bool {
        if self.disposed {
            debug!("Discarding expiry for {:?} after teardown", expiry.slot);
            return false;
        }

        let Some(&idx) = self.index.get(&expiry.slot) else {
            return false;
        };

        let entry = &mut self.entries[idx];
        let current = matches!(
            &entry.state,
            NotificationState::Active(activation) if activation.generation == expiry.generation
        );
        if !current {
            debug!(
                "Discarding stale expiry for {:?} (generation {})",
                expiry.slot, expiry.generation
            );
            return false;
        }

        // The timer already fired, so its handle is simply released.
        entry.state = NotificationState::Idle;
        debug!("Expired slot {:?}", expiry.slot);
        self.notify(&StateChange::Expired { slot: expiry.slot });
        true
    }

    /// Applies a batch of fired timers, returning how many took effect.
    pub fn expire_all(&mut self, expiries: impl IntoIterator<Item = Expiry<S>>) -> usize {
        expiries
            .into_iter()
            .filter(|expiry| self.expire(expiry.clone()))
            .count()
    }

    /// Cancels every pending timer and releases the table.
    ///
    /// Any later `trigger`, `dismiss` or `teardown` fails with
    /// [`Error::AlreadyDisposed`].
    pub fn teardown(&mut self) -> Result<()> {
        self.ensure_live("teardown")?;
        self.release_all();
        debug!("Notification scheduler torn down");
        self.notify(&StateChange::TornDown);
        Ok(())
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns whether `slot` is currently showing a notification.
    #[must_use]
    pub fn is_active(&self, slot: &S) -> bool {
        self.state(slot).is_active()
    }

    /// Returns the state of `slot`; never-triggered slots are idle.
    #[must_use]
    pub fn state(&self, slot: &S) -> SlotState<'_> {
        self.index
            .get(slot)
            .map_or(SlotState::Idle, |&idx| self.entries[idx].state.view())
    }

    /// Returns the message shown in `slot`, if it is active.
    #[must_use]
    pub fn message(&self, slot: &S) -> Option<&str> {
        match self.state(slot) {
            SlotState::Active { message, .. } => Some(message),
            SlotState::Idle => None,
        }
    }

    /// Returns the deadline of the notification in `slot`, if it is active.
    #[must_use]
    pub fn deadline(&self, slot: &S) -> Option<Instant> {
        match self.state(slot) {
            SlotState::Active { deadline, .. } => Some(deadline),
            SlotState::Idle => None,
        }
    }

    /// Iterates over every known slot and its state, in first-trigger order.
    pub fn states(&self) -> impl Iterator<Item = (&S, SlotState<'_>)> {
        self.entries
            .iter()
            .map(|entry| (&entry.slot, entry.state.view()))
    }

    /// Iterates over active slots only.
    pub fn active(&self) -> impl Iterator<Item = (&S, &str)> {
        self.states()
            .filter_map(|(slot, state)| state.message().map(|message| (slot, message)))
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.state, NotificationState::Active(_)))
            .count()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn ensure_live(&self, operation: &str) -> Result<()> {
        if self.disposed {
            warn!("Notification scheduler {} called after teardown", operation);
            return Err(Error::AlreadyDisposed);
        }
        Ok(())
    }

    fn notify(&mut self, change: &StateChange<S>) {
        if let Some(observer) = self.observer.as_mut() {
            observer(change);
        }
    }
}

impl<S, H> NotificationScheduler<S, H>
where
    H: TimerHost<S>,
{
    /// Cancels every timer before the table goes away.
    fn release_all(&mut self) {
        for entry in self.entries.drain(..) {
            if let NotificationState::Active(activation) = entry.state {
                self.host.cancel(activation.handle);
            }
        }
        self.index.clear();
        self.disposed = true;
    }
}

impl<S, H> Drop for NotificationScheduler<S, H>
where
    H: TimerHost<S>,
{
    fn drop(&mut self) {
        if !self.disposed {
            self.release_all();
        }
    }
}

impl<S> NotificationScheduler<S, ManualTimerHost<S>>
where
    S: Clone + Eq + Hash + fmt::Debug,
{
    /// Advances the virtual clock and applies every expiry that fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let fired = self.host.advance(by);
        self.expire_all(fired)
    }
}
