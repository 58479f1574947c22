// SPDX-License-Identifier: MPL-2.0
//! Host timer facilities used by the scheduler.
//!
//! A [`TimerHost`] turns "call me back after `delay`" into an owned handle that
//! can be cancelled until the callback fires. When a timer fires, the host
//! hands the [`Expiry`] back to whoever owns the scheduler, and that owner
//! applies it through `NotificationScheduler::expire`. The scheduler's table
//! is never touched from the timer side.
//!
//! - [`ManualTimerHost`] - virtual clock, advanced explicitly (tests, benches)
//! - [`TokioTimerHost`] - one sleeping tokio task per timer, reported over mpsc

use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Longest delay a timer is scheduled for; about 30 years, the same horizon
/// tokio uses for a sleep that never wakes.
pub const MAX_TIMER_DELAY: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Returns `now + delay`, shortening `delay` until the sum is representable.
pub(crate) fn saturating_deadline(now: Instant, mut delay: Duration) -> Instant {
    loop {
        if let Some(deadline) = now.checked_add(delay) {
            return deadline;
        }
        delay /= 2;
    }
}

/// Payload delivered when a scheduled expiry fires.
///
/// `generation` identifies the activation the timer was scheduled for, so a
/// late delivery can be told apart from the slot's current activation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expiry<S> {
    pub slot: S,
    pub generation: u64,
}

/// Timer facility the scheduler delegates to.
///
/// Implementations must guarantee that `cancel` prevents a not-yet-fired
/// timer from delivering its expiry, and that each scheduled expiry is
/// delivered at most once.
pub trait TimerHost<S> {
    /// Owned handle to one pending timer.
    type Handle;

    /// Current time as seen by this host.
    fn now(&self) -> Instant;

    /// Schedules `expiry` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, expiry: Expiry<S>) -> Self::Handle;

    /// Cancels a pending timer. Cancelling a timer that already fired is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

// =============================================================================
// Manual (virtual clock) host
// =============================================================================

/// Handle to a timer scheduled on a [`ManualTimerHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualHandle(u64);

#[derive(Debug)]
struct PendingTimer<S> {
    id: u64,
    deadline: Instant,
    expiry: Expiry<S>,
}

/// Deterministic timer host driven by an explicit virtual clock.
///
/// Nothing fires on its own; [`ManualTimerHost::advance`] moves the clock and
/// returns every expiry whose deadline has been reached, in deadline order.
#[derive(Debug)]
pub struct ManualTimerHost<S> {
    now: Instant,
    next_id: u64,
    pending: Vec<PendingTimer<S>>,
    scheduled_total: usize,
    cancelled_total: usize,
}

impl<S> Default for ManualTimerHost<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ManualTimerHost<S> {
    /// Creates a host whose virtual clock starts at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
            next_id: 0,
            pending: Vec::new(),
            scheduled_total: 0,
            cancelled_total: 0,
        }
    }

    /// Moves the virtual clock forward and returns the expiries that fired.
    pub fn advance(&mut self, by: Duration) -> Vec<Expiry<S>> {
        self.now = saturating_deadline(self.now, by);
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|timer| timer.deadline <= now);
        self.pending = pending;

        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter().map(|timer| timer.expiry).collect()
    }

    /// Number of timers scheduled but neither fired nor cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Total number of `schedule` calls over the host's lifetime.
    #[must_use]
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    /// Total number of timers cancelled before firing.
    #[must_use]
    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }
}

impl<S> TimerHost<S> for ManualTimerHost<S> {
    type Handle = ManualHandle;

    fn now(&self) -> Instant {
        self.now
    }

    fn schedule(&mut self, delay: Duration, expiry: Expiry<S>) -> ManualHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.scheduled_total += 1;
        self.pending.push(PendingTimer {
            id,
            deadline: saturating_deadline(self.now, delay),
            expiry,
        });
        ManualHandle(id)
    }

    fn cancel(&mut self, handle: ManualHandle) {
        if let Some(pos) = self.pending.iter().position(|timer| timer.id == handle.0) {
            self.pending.remove(pos);
            self.cancelled_total += 1;
        }
    }
}

// =============================================================================
// Tokio host
// =============================================================================

/// Timer host backed by the tokio runtime.
///
/// Each timer is a spawned task that sleeps for the requested delay, then
/// sends its [`Expiry`] on an unbounded channel. The receiving half is handed
/// to the owner of the scheduler, which applies expiries as they arrive.
/// Cancelling aborts the task.
#[derive(Debug)]
pub struct TokioTimerHost<S> {
    runtime: tokio::runtime::Handle,
    sender: mpsc::UnboundedSender<Expiry<S>>,
}

impl<S: Send + 'static> TokioTimerHost<S> {
    /// Creates a host on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime context.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Expiry<S>>) {
        Self::with_runtime(tokio::runtime::Handle::current())
    }

    /// Creates a host that spawns its timers on `runtime`.
    #[must_use]
    pub fn with_runtime(
        runtime: tokio::runtime::Handle,
    ) -> (Self, mpsc::UnboundedReceiver<Expiry<S>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { runtime, sender }, receiver)
    }
}

impl<S: Send + 'static> TimerHost<S> for TokioTimerHost<S> {
    type Handle = AbortHandle;

    fn now(&self) -> Instant {
        // tokio's clock, so paused-time tests see consistent deadlines
        tokio::time::Instant::now().into_std()
    }

    fn schedule(&mut self, delay: Duration, expiry: Expiry<S>) -> AbortHandle {
        let sender = self.sender.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owner shut down; nothing left to notify.
            let _ = sender.send(expiry);
        });
        task.abort_handle()
    }

    fn cancel(&mut self, handle: AbortHandle) {
        handle.abort();
    }
}
