// Repeating timer facility. The host loop polls it; each poll yields at most
// one tick, so a slow frame never produces a burst of catch-up points.

use std::time::{Duration, Instant};

/// Identifies one scheduled repeating timer. Handles are never reused, so a
/// tick carrying an old handle can always be told apart from the live one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

pub trait Timer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;
    /// Cancelling an unknown or already-cancelled handle does nothing.
    fn cancel(&mut self, handle: TimerHandle);
}

struct Active {
    handle: TimerHandle,
    interval: Duration,
    next_due: Instant,
}

/// Single-slot polled timer. Scheduling replaces whatever was active.
#[derive(Default)]
pub struct IntervalTimer {
    next_id: u64,
    active: Option<Active>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live handle if its interval has elapsed at `now`. Re-arms from
    /// `now`, not from the missed due time: overdue ticks are dropped.
    pub fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        let active = self.active.as_mut()?;
        if now < active.next_due {
            return None;
        }
        active.next_due = now + active.interval;
        Some(active.handle)
    }

    /// How long the host may sleep before the next tick; None when idle.
    pub fn until_next_due(&self, now: Instant) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|a| a.next_due.saturating_duration_since(now))
    }
}

impl Timer for IntervalTimer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active = Some(Active { handle, interval, next_due: Instant::now() + interval });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.active.as_ref().is_some_and(|a| a.handle == handle) {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn no_tick_before_the_interval() {
        let mut timer = IntervalTimer::new();
        let start = Instant::now();
        timer.schedule_repeating(Duration::from_secs(60));
        assert_eq!(timer.poll(start), None);
        assert!(timer.until_next_due(start).is_some_and(|d| d > Duration::from_secs(59)));
    }

    #[test]
    fn overdue_timer_yields_one_tick_and_rearms_from_now() {
        let mut timer = IntervalTimer::new();
        let handle = timer.schedule_repeating(MS);
        let late = Instant::now() + Duration::from_millis(50);

        assert_eq!(timer.poll(late), Some(handle));
        // Fifty missed intervals do not queue up.
        assert_eq!(timer.poll(late), None);
        assert_eq!(timer.poll(late + MS), Some(handle));
    }

    #[test]
    fn cancel_stops_ticks() {
        let mut timer = IntervalTimer::new();
        let handle = timer.schedule_repeating(MS);
        timer.cancel(handle);
        assert_eq!(timer.poll(Instant::now() + Duration::from_secs(1)), None);
        assert_eq!(timer.until_next_due(Instant::now()), None);
    }

    #[test]
    fn new_schedule_gets_a_fresh_handle_and_old_cancel_is_ignored() {
        let mut timer = IntervalTimer::new();
        let old = timer.schedule_repeating(MS);
        timer.cancel(old);
        let new = timer.schedule_repeating(MS);
        assert_ne!(old, new);

        timer.cancel(old);
        assert!(timer.until_next_due(Instant::now()).is_some());
        assert_eq!(timer.poll(Instant::now() + Duration::from_secs(1)), Some(new));
    }
}
