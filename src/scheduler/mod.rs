//! Self-rearming local-midnight timer.
//!
//! Two states: `Idle` (no pending timer) and `Armed` (one worker waiting for
//! the next local midnight). The worker recomputes its deadline from the wall
//! clock after every firing, so a slow callback cannot drift the schedule,
//! and there is never a moment with zero or two timers pending.

use crate::internal;
use chrono::{DateTime, Local, NaiveTime, TimeZone};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Upper bound on a single uninterruptible sleep; keeps `cancel` responsive
/// even when the timer is armed for many hours.
const WAIT_CHUNK: Duration = Duration::from_millis(250);

/// Used when the next midnight cannot be represented in the local calendar
/// (a DST gap at midnight, or the end of the supported date range).
const FALLBACK_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

struct TimerHandle {
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

/// One timer per controller: `arm` transitions Idle to Armed, `cancel` back.
///
/// Dropping the scheduler cancels a pending timer.
#[derive(Default)]
pub struct MidnightScheduler {
    timer: Option<TimerHandle>,
}

impl MidnightScheduler {
    /// Starts idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a timer is currently pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Arms the scheduler for the next local midnight; after each firing it
    /// re-arms itself for the following one. No-op when already armed; a
    /// controller never holds two timers.
    pub fn arm<F>(&mut self, on_fire: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.arm_with(|| delay_until_next_midnight(Local::now()), on_fire);
    }

    /// Same machine with a caller-supplied cadence. This is the seam tests
    /// use to drive the timer with a fast clock instead of waiting for a
    /// real midnight.
    pub fn arm_with<D, F>(&mut self, mut next_delay: D, mut on_fire: F)
    where
        D: FnMut() -> Duration + Send + 'static,
        F: FnMut() + Send + 'static,
    {
        if self.timer.is_some() {
            internal::warn("SCHEDULE", "Already armed; ignoring");
            return;
        }

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = Arc::clone(&shutdown);

        let spawned = thread::Builder::new()
            .name("logsweep-midnight".into())
            .spawn(move || {
                loop {
                    let delay = next_delay();
                    internal::debug("SCHEDULE", &format!("Next firing in {delay:?}"));
                    if !wait(&shutdown_flag, delay) {
                        break;
                    }
                    on_fire();
                    // The loop continues straight into the next deadline;
                    // the timer stays armed across the firing.
                }
                internal::debug("SCHEDULE", "Timer stopped");
            });

        match spawned {
            Ok(handle) => {
                self.timer = Some(TimerHandle {
                    shutdown,
                    thread: Some(handle),
                });
            }
            Err(e) => {
                internal::error("SCHEDULE", &format!("Failed to spawn timer thread: {e}"));
            }
        }
    }

    /// Releases the pending timer and waits for the worker to stop. Safe to
    /// call when already idle.
    pub fn cancel(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.shutdown.store(true, Ordering::Relaxed);
            if let Some(handle) = timer.thread.take() {
                let _ = handle.join();
            }
            internal::debug("SCHEDULE", "Timer cancelled");
        }
    }
}

impl Drop for MidnightScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Sleeps for `total` while polling the shutdown flag. Returns `false` if
/// cancelled before the deadline.
fn wait(shutdown: &AtomicBool, total: Duration) -> bool {
    let mut remaining = total;
    while !remaining.is_zero() {
        if shutdown.load(Ordering::Relaxed) {
            return false;
        }
        let chunk = remaining.min(WAIT_CHUNK);
        thread::sleep(chunk);
        remaining = remaining.saturating_sub(chunk);
    }
    !shutdown.load(Ordering::Relaxed)
}

/// Time left until the next local midnight. Always positive, normally at
/// most 24 hours; a DST fall-back night can reach 25.
#[must_use]
pub fn delay_until_next_midnight(now: DateTime<Local>) -> Duration {
    let Some(next_day) = now.date_naive().succ_opt() else {
        return FALLBACK_DELAY;
    };
    let midnight = next_day.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight).earliest() {
        Some(next) => (next - now).to_std().unwrap_or(FALLBACK_DELAY),
        None => FALLBACK_DELAY,
    }
}
