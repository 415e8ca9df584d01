//! Tests for the midnight scheduler state machine.

use chrono::{Local, TimeZone};
use logsweep::{MidnightScheduler, delay_until_next_midnight};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn delay_is_positive_and_bounded() {
    let delay = delay_until_next_midnight(Local::now());
    assert!(delay > Duration::ZERO);
    // A DST fall-back night can stretch to 25 hours.
    assert!(delay <= Duration::from_secs(25 * 3600));
}

#[test]
fn delay_shrinks_toward_midnight() {
    let evening = Local
        .from_local_datetime(&Local::now().date_naive().and_hms_opt(23, 59, 30).unwrap())
        .earliest()
        .unwrap();
    let morning = Local
        .from_local_datetime(&Local::now().date_naive().and_hms_opt(0, 0, 30).unwrap())
        .earliest()
        .unwrap();

    assert!(delay_until_next_midnight(evening) < delay_until_next_midnight(morning));
}

#[test]
fn starts_idle() {
    let scheduler = MidnightScheduler::new();
    assert!(!scheduler.is_armed());
}

#[test]
fn arm_and_cancel_transitions() {
    let mut scheduler = MidnightScheduler::new();
    scheduler.arm(|| {});
    assert!(scheduler.is_armed());

    scheduler.cancel();
    assert!(!scheduler.is_armed());

    // Cancelling when idle is a no-op.
    scheduler.cancel();
    assert!(!scheduler.is_armed());
}

#[test]
fn cancel_is_prompt_even_when_armed_for_hours() {
    let mut scheduler = MidnightScheduler::new();
    scheduler.arm(|| {});

    let started = Instant::now();
    scheduler.cancel();
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn fires_and_stays_armed_across_firings() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    let mut scheduler = MidnightScheduler::new();
    scheduler.arm_with(
        || Duration::from_millis(20),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    thread::sleep(Duration::from_millis(300));
    assert!(scheduler.is_armed(), "scheduler re-arms after each firing");
    scheduler.cancel();

    let count = fired.load(Ordering::SeqCst);
    assert!(count >= 3, "expected repeated firings, got {count}");

    // No further firings once cancelled.
    thread::sleep(Duration::from_millis(100));
    assert_eq!(fired.load(Ordering::SeqCst), count);
}

#[test]
fn second_arm_is_ignored_while_armed() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let mut scheduler = MidnightScheduler::new();
    let counter = Arc::clone(&first);
    scheduler.arm_with(
        || Duration::from_millis(20),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );
    let counter = Arc::clone(&second);
    scheduler.arm_with(
        || Duration::from_millis(20),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    thread::sleep(Duration::from_millis(150));
    scheduler.cancel();

    assert!(first.load(Ordering::SeqCst) > 0);
    assert_eq!(second.load(Ordering::SeqCst), 0, "only one timer may exist");
}

#[test]
fn drop_cancels_the_timer() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    {
        let mut scheduler = MidnightScheduler::new();
        scheduler.arm_with(
            || Duration::from_millis(20),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        thread::sleep(Duration::from_millis(100));
    }

    let count = fired.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(100));
    assert_eq!(fired.load(Ordering::SeqCst), count);
}
