//! Cooperative re-invocation of the driver.
//!
//! The driver never waits. After a step it hands the scheduler the state to
//! resume in and the time that must pass first; the scheduler reports the
//! state again once that time is up. Whatever calls [`Stepper::update`]
//! (a polling loop, a timer interrupt) may call it as often as it likes.
//!
//! [`Stepper::update`]: crate::motor::Stepper::update

mod clock;
mod timed;

use core::time::Duration;

use crate::phase::PhaseState;

pub use clock::{ManualClock, SystemClock};
#[cfg(feature = "std")]
pub use clock::OperatingSystemClock;
pub use timed::ClockScheduler;

/// Per-driver state store with delayed wake-up.
pub trait Scheduler {
    /// Current state if the driver is due, `None` while a requested sleep is
    /// still running.
    fn poll_state(&mut self) -> Option<PhaseState>;

    /// Current state, regardless of any pending sleep.
    fn state(&self) -> PhaseState;

    /// Replace the current state without touching the wake time.
    fn set_state(&mut self, state: PhaseState);

    /// Resume in `next` once `delay` has elapsed from now.
    fn go_after_sleep(&mut self, next: PhaseState, delay: Duration);
}
