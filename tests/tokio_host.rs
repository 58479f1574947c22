// SPDX-License-Identifier: MPL-2.0
//! Scheduler driven by real tokio timers (on a paused clock).

use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use toastboard::scheduler::{Expiry, NotificationScheduler, TokioTimerHost};

type Scheduler = NotificationScheduler<&'static str, TokioTimerHost<&'static str>>;

fn scheduler() -> (Scheduler, UnboundedReceiver<Expiry<&'static str>>) {
    let (host, expiries) = TokioTimerHost::new();
    (NotificationScheduler::new(host), expiries)
}

/// Applies everything the timers have delivered so far.
fn drain(
    scheduler: &mut Scheduler,
    expiries: &mut UnboundedReceiver<Expiry<&'static str>>,
) -> usize {
    let mut applied = 0;
    while let Ok(expiry) = expiries.try_recv() {
        if scheduler.expire(expiry) {
            applied += 1;
        }
    }
    applied
}

#[tokio::test(start_paused = true)]
async fn timer_expires_slot_after_duration() {
    let (mut scheduler, mut expiries) = scheduler();
    scheduler
        .trigger_for("tr", "x", Duration::from_millis(100))
        .unwrap();

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(drain(&mut scheduler, &mut expiries), 1);
    assert!(!scheduler.is_active(&"tr"));
}

#[tokio::test(start_paused = true)]
async fn slot_stays_active_before_deadline() {
    let (mut scheduler, mut expiries) = scheduler();
    scheduler
        .trigger_for("tl", "hello", Duration::from_millis(100))
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(drain(&mut scheduler, &mut expiries), 0);
    assert!(scheduler.is_active(&"tl"));
}

#[tokio::test(start_paused = true)]
async fn dismissed_timer_is_aborted() {
    let (mut scheduler, mut expiries) = scheduler();
    scheduler.trigger("bl", "y").unwrap();
    scheduler.dismiss(&"bl").unwrap();

    tokio::time::sleep(Duration::from_millis(6500)).await;

    assert!(expiries.try_recv().is_err());
    assert!(!scheduler.is_active(&"bl"));
}

#[tokio::test(start_paused = true)]
async fn teardown_aborts_every_timer() {
    let (mut scheduler, mut expiries) = scheduler();
    scheduler.trigger("tl", "a").unwrap();
    scheduler.trigger("br", "b").unwrap();

    scheduler.teardown().unwrap();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert!(expiries.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn delivered_but_unapplied_expiry_is_discarded_after_dismiss() {
    let (mut scheduler, mut expiries) = scheduler();
    scheduler
        .trigger_for("tc", "z", Duration::from_millis(10))
        .unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;
    // The timer already sent its expiry; the slot is closed before it is applied.
    scheduler.dismiss(&"tc").unwrap();
    scheduler.trigger("tc", "again").unwrap();

    assert_eq!(drain(&mut scheduler, &mut expiries), 0);
    assert_eq!(scheduler.message(&"tc"), Some("again"));
}

#[tokio::test(start_paused = true)]
async fn deadline_uses_tokio_clock() {
    let (mut scheduler, _expiries) = scheduler();
    let before = tokio::time::Instant::now().into_std();
    scheduler
        .trigger_for("br", "x", Duration::from_millis(300))
        .unwrap();

    let deadline = scheduler.deadline(&"br").expect("slot is active");
    assert_eq!(deadline - before, Duration::from_millis(300));
}
