//! Unit types for motor quantities.
//!
//! Keeps step counts and rotational speed from being mixed up with plain
//! integers at API boundaries.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Motor position or distance in whole steps.
///
/// Signed: negative values lie on the reverse side of the reference position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i64);

impl Steps {
    /// The reference position.
    pub const ZERO: Steps = Steps(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Absolute number of steps.
    #[inline]
    pub const fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Steps {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Steps {
    fn from(value: i32) -> Self {
        Self(value as i64)
    }
}

/// Rotational speed in revolutions per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Rpm(pub u16);

impl Rpm {
    /// Create a new Rpm value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_arithmetic() {
        let a = Steps(10);
        let b = Steps(-4);

        assert_eq!(a + b, Steps(6));
        assert_eq!(a - b, Steps(14));
        assert_eq!(-a, Steps(-10));
        assert_eq!(b.abs(), 4);
    }

    #[test]
    fn test_steps_from_int() {
        assert_eq!(Steps::from(-3i32), Steps(-3));
        assert_eq!(Steps::from(7i64).value(), 7);
    }
}
