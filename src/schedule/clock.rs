//! Time sources for schedulers.

use core::cell::Cell;
use core::time::Duration;

/// Monotonic time source read by [`ClockScheduler`](super::ClockScheduler).
///
/// Takes `&self` so an interrupt-safe timer can be read without exclusive
/// access.
pub trait SystemClock {
    /// Time since the clock's epoch (boot, timer start, ...).
    fn elapsed(&self) -> Duration;
}

/// Any `Fn() -> Duration`, e.g. a closure over a hardware timer.
impl<F> SystemClock for F
where
    F: Fn() -> Duration,
{
    fn elapsed(&self) -> Duration {
        self()
    }
}

/// Clock advanced by hand, for simulation and host-side tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Clock stopped at zero.
    pub const fn new() -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl SystemClock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }
}

/// Wall-clock time since construction, from `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct OperatingSystemClock(std::time::Instant);

#[cfg(feature = "std")]
impl OperatingSystemClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self(std::time::Instant::now())
    }
}

#[cfg(feature = "std")]
impl Default for OperatingSystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl SystemClock for OperatingSystemClock {
    fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_clock() {
        let clock = || Duration::from_micros(42);
        assert_eq!(clock.elapsed(), Duration::from_micros(42));
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.elapsed(), Duration::ZERO);

        clock.advance(Duration::from_micros(1500));
        clock.advance(Duration::from_micros(500));
        assert_eq!(clock.elapsed(), Duration::from_micros(2000));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_os_clock_is_monotonic() {
        let clock = OperatingSystemClock::new();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
