//! Clock-driven scheduler.

use core::time::Duration;

use crate::phase::PhaseState;

use super::{Scheduler, SystemClock};

/// [`Scheduler`] that holds one state and an optional wake time read off a
/// [`SystemClock`].
///
/// The delay of [`Scheduler::go_after_sleep`] counts from the clock reading at
/// the time of the request, so a late poll never shortens the next interval.
#[derive(Debug, Clone)]
pub struct ClockScheduler<C> {
    clock: C,
    state: PhaseState,
    wake_at: Option<Duration>,
}

impl<C: SystemClock> ClockScheduler<C> {
    /// Create a scheduler in [`PhaseState::Idle`] that is immediately due.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: PhaseState::Idle,
            wake_at: None,
        }
    }

    /// Clock reading at which the pending sleep ends, if any.
    #[inline]
    pub fn wake_at(&self) -> Option<Duration> {
        self.wake_at
    }

    /// Whether a requested sleep has not finished yet.
    pub fn is_sleeping(&self) -> bool {
        self.wake_at
            .map(|wake| self.clock.elapsed() < wake)
            .unwrap_or(false)
    }

    /// The underlying clock.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: SystemClock> Scheduler for ClockScheduler<C> {
    fn poll_state(&mut self) -> Option<PhaseState> {
        if let Some(wake) = self.wake_at {
            if self.clock.elapsed() < wake {
                return None;
            }
            self.wake_at = None;
        }
        Some(self.state)
    }

    fn state(&self) -> PhaseState {
        self.state
    }

    fn set_state(&mut self, state: PhaseState) {
        self.state = state;
    }

    fn go_after_sleep(&mut self, next: PhaseState, delay: Duration) {
        self.state = next;
        self.wake_at = Some(self.clock.elapsed().saturating_add(delay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_starts_idle_and_due() {
        let mut scheduler = ClockScheduler::new(|| Duration::ZERO);
        assert_eq!(scheduler.poll_state(), Some(PhaseState::Idle));
        assert!(!scheduler.is_sleeping());
    }

    #[test]
    fn test_sleep_hides_state_until_due() {
        let now = Cell::new(Duration::from_micros(100));
        let mut scheduler = ClockScheduler::new(|| now.get());

        scheduler.go_after_sleep(PhaseState::Step2, Duration::from_micros(2000));
        assert_eq!(scheduler.wake_at(), Some(Duration::from_micros(2100)));
        assert_eq!(scheduler.poll_state(), None);

        now.set(Duration::from_micros(2099));
        assert_eq!(scheduler.poll_state(), None);
        assert!(scheduler.is_sleeping());

        now.set(Duration::from_micros(2100));
        assert_eq!(scheduler.poll_state(), Some(PhaseState::Step2));
        assert_eq!(scheduler.wake_at(), None);
    }

    #[test]
    fn test_set_state_keeps_wake_time() {
        let now = Cell::new(Duration::ZERO);
        let mut scheduler = ClockScheduler::new(|| now.get());

        scheduler.go_after_sleep(PhaseState::StepOverflow, Duration::from_micros(10));
        scheduler.set_state(PhaseState::Step1);
        assert_eq!(scheduler.poll_state(), None);
        assert_eq!(scheduler.state(), PhaseState::Step1);
    }
}
