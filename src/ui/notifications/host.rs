// SPDX-License-Identifier: MPL-2.0
//! Timer host that runs expiry timers as Iced tasks.
//!
//! Each scheduled timer becomes an abortable `Task` that sleeps on the tokio
//! executor and then yields its [`Expiry`]. The tasks are queued here until
//! the component's `update` hands them back to the runtime via
//! [`IcedTimerHost::take_tasks`].

use crate::scheduler::{Expiry, TimerHost};
use iced::task::{self, Task};
use std::time::{Duration, Instant};

pub struct IcedTimerHost<S> {
    pending: Vec<Task<Expiry<S>>>,
}

impl<S> Default for IcedTimerHost<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> IcedTimerHost<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Number of timer tasks waiting to be handed to the runtime.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }
}

impl<S: Send + 'static> IcedTimerHost<S> {
    /// Drains the queued timer tasks into a single batch.
    pub fn take_tasks(&mut self) -> Task<Expiry<S>> {
        Task::batch(std::mem::take(&mut self.pending))
    }
}

impl<S: Send + 'static> TimerHost<S> for IcedTimerHost<S> {
    type Handle = task::Handle;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn schedule(&mut self, delay: Duration, expiry: Expiry<S>) -> task::Handle {
        // The sleep is created on first poll, inside the runtime.
        let (timer, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| expiry,
        )
        .abortable();
        self.pending.push(timer);
        handle
    }

    fn cancel(&mut self, handle: task::Handle) {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Placement;

    #[test]
    fn schedule_queues_one_task_per_timer() {
        let mut host = IcedTimerHost::new();
        host.schedule(
            Duration::from_millis(10),
            Expiry {
                slot: Placement::TopLeft,
                generation: 0,
            },
        );
        host.schedule(
            Duration::from_millis(10),
            Expiry {
                slot: Placement::BottomRight,
                generation: 0,
            },
        );
        assert_eq!(host.queued_count(), 2);
    }

    #[test]
    fn take_tasks_empties_the_queue() {
        let mut host = IcedTimerHost::new();
        host.schedule(
            Duration::from_millis(10),
            Expiry {
                slot: Placement::TopCenter,
                generation: 3,
            },
        );

        let _batch = host.take_tasks();
        assert_eq!(host.queued_count(), 0);
    }
}
