use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Shortest period a repeating timer may be scheduled with.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Opaque handle for a scheduled repeating timer.
///
/// Handles are never reused by a scheduler, so a tick carrying a cancelled
/// handle can always be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a scheduler-assigned handle. Schedulers must not hand out the
    /// same value twice.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Capability to start and stop repeating timers.
///
/// Implementations only book-keep timers; the host delivers each firing back
/// to the owner (see [`crate::PlaybackController::on_timer`]).
pub trait Scheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct RepeatingTimer {
    id: TimerId,
    period: Duration,
    next_fire: Duration,
}

/// Manually driven clock.
///
/// Time only moves when [`ManualClock::fire_next`] or [`ManualClock::settle`]
/// is called, which makes timer-driven behaviour reproducible tick by tick.
/// The command line player drives it from a real sleep loop.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: Vec<RepeatingTimer>,
    fired: usize,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Total number of firings delivered so far across all timers.
    pub fn fired(&self) -> usize {
        self.fired
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    /// Absolute time of the earliest pending firing.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.iter().map(|timer| timer.next_fire).min()
    }

    /// Pops the earliest firing due at or before `until`, moving the clock to
    /// its deadline. Returns `None` once nothing else is due.
    pub fn fire_next(&mut self, until: Duration) -> Option<TimerId> {
        let timer = self
            .timers
            .iter_mut()
            .filter(|timer| timer.next_fire <= until)
            .min_by_key(|timer| (timer.next_fire, timer.id))?;

        self.now = self.now.max(timer.next_fire);
        timer.next_fire += timer.period;
        self.fired += 1;
        Some(timer.id)
    }

    /// Moves the clock forward to `until` without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualClock {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.timers.push(RepeatingTimer {
            id,
            period,
            next_fire: self.now + period,
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|timer| timer.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_repeatedly_at_the_period() {
        let mut clock = ManualClock::new();
        let id = clock.schedule_repeating(100 * MS);

        assert_eq!(clock.fire_next(99 * MS), None);
        assert_eq!(clock.fire_next(250 * MS), Some(id));
        assert_eq!(clock.now(), 100 * MS);
        assert_eq!(clock.fire_next(250 * MS), Some(id));
        assert_eq!(clock.fire_next(250 * MS), None);
        assert_eq!(clock.fired(), 2);
        assert_eq!(clock.next_deadline(), Some(300 * MS));
    }

    #[test]
    fn cancelled_timers_stop_firing() {
        let mut clock = ManualClock::new();
        let id = clock.schedule_repeating(10 * MS);
        clock.cancel(id);

        assert!(!clock.is_live(id));
        assert_eq!(clock.fire_next(Duration::from_secs(1)), None);
        assert_eq!(clock.next_deadline(), None);
    }

    #[test]
    fn handles_are_not_reused() {
        let mut clock = ManualClock::new();
        let first = clock.schedule_repeating(10 * MS);
        clock.cancel(first);
        let second = clock.schedule_repeating(10 * MS);

        assert_ne!(first, second);
        assert_eq!(clock.live_timers(), 1);
    }

    #[test]
    fn rescheduling_starts_from_current_time() {
        let mut clock = ManualClock::new();
        clock.settle(35 * MS);
        clock.schedule_repeating(10 * MS);

        assert_eq!(clock.next_deadline(), Some(45 * MS));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut clock = ManualClock::new();
        clock.schedule_repeating(Duration::ZERO);

        assert_eq!(clock.next_deadline(), Some(MIN_PERIOD));
    }
}
