// SPDX-License-Identifier: MPL-2.0
//! Behavioral contract of the notification scheduler, driven by the virtual clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use toastboard::error::Error;
use toastboard::scheduler::{
    ManualTimerHost, NotificationScheduler, Placement, SlotState, StateChange, MAX_TIMER_DELAY,
};

type Scheduler<S> = NotificationScheduler<S, ManualTimerHost<S>>;

fn scheduler<S>() -> Scheduler<S>
where
    S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    NotificationScheduler::new(ManualTimerHost::new())
}

#[test]
fn retrigger_before_expiry_keeps_first_message_and_single_timer() {
    for placement in Placement::ALL {
        let mut scheduler = scheduler();
        assert_eq!(scheduler.trigger(placement, "m"), Ok(true));
        assert_eq!(scheduler.trigger(placement, "m2"), Ok(false));

        assert!(scheduler.is_active(&placement));
        assert_eq!(scheduler.message(&placement), Some("m"));
        assert_eq!(scheduler.host().scheduled_total(), 1);
    }
}

#[test]
fn dismissed_timer_never_fires() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);

    let mut scheduler = scheduler();
    scheduler.set_observer(move |change: &StateChange<Placement>| {
        sink.borrow_mut().push(change.clone());
    });

    for placement in Placement::ALL {
        scheduler.trigger(placement, "m").unwrap();
        assert_eq!(scheduler.dismiss(&placement), Ok(true));
    }
    changes.borrow_mut().clear();

    assert_eq!(scheduler.advance(Duration::from_secs(60)), 0);
    assert!(changes.borrow().is_empty());
    assert_eq!(scheduler.host().pending_count(), 0);
}

#[test]
fn expiry_transitions_exactly_once() {
    let expired = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&expired);

    let mut scheduler = scheduler();
    scheduler.set_observer(move |change: &StateChange<Placement>| {
        if matches!(change, StateChange::Expired { .. }) {
            *counter.borrow_mut() += 1;
        }
    });

    for placement in Placement::ALL {
        scheduler.trigger(placement, "m").unwrap();
    }
    scheduler.advance(Duration::from_millis(6000));
    scheduler.advance(Duration::from_millis(6000));

    assert_eq!(*expired.borrow(), Placement::ALL.len());
    assert_eq!(scheduler.active_count(), 0);
}

#[test]
fn teardown_leaves_everything_idle_and_silent() {
    let mut scheduler = scheduler();
    scheduler
        .trigger_for(Placement::TopLeft, "a", Duration::from_millis(10))
        .unwrap();
    scheduler.trigger(Placement::BottomRight, "b").unwrap();

    // Fired on the host side, not yet applied.
    let in_flight = scheduler.host_mut().advance(Duration::from_millis(10));
    assert_eq!(in_flight.len(), 1);

    scheduler.teardown().unwrap();
    assert!(Placement::ALL
        .iter()
        .all(|placement| scheduler.state(placement) == SlotState::Idle));
    assert_eq!(scheduler.expire_all(in_flight), 0);
    assert_eq!(scheduler.advance(Duration::from_secs(60)), 0);
    assert_eq!(scheduler.host().pending_count(), 0);
}

#[test]
fn scenario_a_duplicate_trigger_is_ignored() {
    let mut scheduler = scheduler();
    scheduler.trigger("tl", "hello").unwrap();
    assert!(scheduler.is_active(&"tl"));

    scheduler.trigger("tl", "world").unwrap();
    assert!(scheduler.is_active(&"tl"));
    assert_eq!(scheduler.message(&"tl"), Some("hello"));
}

#[test]
fn scenario_b_short_duration_expires() {
    let mut scheduler = scheduler();
    scheduler
        .trigger_for("tr", "x", Duration::from_millis(100))
        .unwrap();

    scheduler.advance(Duration::from_millis(150));
    assert!(!scheduler.is_active(&"tr"));
}

#[test]
fn scenario_c_dismiss_then_wait_changes_nothing() {
    let mut scheduler = scheduler();
    scheduler.trigger("bl", "y").unwrap();
    scheduler.dismiss(&"bl").unwrap();

    assert_eq!(scheduler.advance(Duration::from_millis(6500)), 0);
    assert_eq!(scheduler.state(&"bl"), SlotState::Idle);
}

#[test]
fn scenario_d_trigger_after_teardown_fails() {
    let mut scheduler = scheduler();
    scheduler.teardown().unwrap();

    assert_eq!(scheduler.trigger("tc", "z"), Err(Error::AlreadyDisposed));
    assert!(scheduler.is_disposed());
    assert!(!scheduler.is_active(&"tc"));
}

#[test]
fn string_keys_are_open_ended() {
    let mut scheduler: Scheduler<String> = scheduler();
    for key in ["inbox", "uploads", "alerts"] {
        scheduler.trigger(key.to_string(), key).unwrap();
    }

    let active: Vec<_> = scheduler
        .active()
        .map(|(slot, message)| (slot.clone(), message.to_string()))
        .collect();
    assert_eq!(active.len(), 3);
    assert_eq!(active[0], ("inbox".to_string(), "inbox".to_string()));
}

#[test]
fn configured_default_duration_applies_to_trigger() {
    let mut scheduler =
        scheduler::<Placement>().with_default_duration(Duration::from_millis(250));
    scheduler.trigger(Placement::TopCenter, "short").unwrap();

    assert_eq!(scheduler.advance(Duration::from_millis(249)), 0);
    assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
}

#[test]
fn maximal_duration_neither_panics_nor_corrupts_the_slot() {
    let mut scheduler = scheduler();
    assert_eq!(scheduler.trigger_for("tl", "x", Duration::MAX), Ok(true));
    assert!(scheduler.is_active(&"tl"));
    assert_eq!(scheduler.advance(Duration::from_secs(3600)), 0);

    // The slot still cycles normally afterwards.
    assert_eq!(scheduler.dismiss(&"tl"), Ok(true));
    assert_eq!(scheduler.trigger_for("tl", "y", Duration::from_millis(5)), Ok(true));
    assert_eq!(scheduler.advance(Duration::from_millis(5)), 1);
    assert_eq!(scheduler.host().pending_count(), 0);
}

#[test]
fn huge_default_duration_reaches_trigger_safely() {
    let mut scheduler =
        scheduler::<Placement>().with_default_duration(Duration::from_secs(u64::MAX / 2));
    assert_eq!(scheduler.default_duration(), MAX_TIMER_DELAY);

    assert_eq!(scheduler.trigger(Placement::BottomLeft, "long"), Ok(true));
    assert_eq!(scheduler.advance(MAX_TIMER_DELAY), 1);
}

#[test]
fn zero_default_duration_expires_after_minimum_delay() {
    let mut scheduler = scheduler::<Placement>().with_default_duration(Duration::ZERO);
    assert!(scheduler.default_duration() > Duration::ZERO);

    scheduler.trigger(Placement::TopRight, "blink").unwrap();
    assert!(scheduler.is_active(&Placement::TopRight));
    assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    assert!(!scheduler.is_active(&Placement::TopRight));
}
