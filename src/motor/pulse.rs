//! Minimum time between physical steps.

use core::time::Duration;

use crate::config::units::Rpm;
use crate::error::{ConfigError, Error, Result};

const MICROS_PER_MINUTE: u32 = 60_000_000;

/// Minimum pulse width, fixed for the lifetime of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseWidth {
    micros: u32,
}

impl PulseWidth {
    /// Derive the pulse width from speed and motor resolution:
    /// `60_000_000 µs / (rpm × steps_per_revolution)`, truncated.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero speed, zero resolution, or a
    /// product so large the width truncates to zero.
    pub fn from_speed(rpm: Rpm, steps_per_revolution: u16) -> Result<Self> {
        if rpm.0 == 0 {
            return Err(Error::Config(ConfigError::InvalidRpm(rpm.0)));
        }
        if steps_per_revolution == 0 {
            return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
                steps_per_revolution,
            )));
        }

        // u16 × u16 always fits in u32.
        let steps_per_minute = rpm.0 as u32 * steps_per_revolution as u32;
        let micros = MICROS_PER_MINUTE / steps_per_minute;
        if micros == 0 {
            return Err(Error::Config(ConfigError::PulseWidthTooShort {
                rpm: rpm.0,
                steps_per_revolution,
            }));
        }

        Ok(Self { micros })
    }

    /// Width in microseconds.
    #[inline]
    pub const fn as_micros(self) -> u32 {
        self.micros
    }

    /// Width as a [`Duration`].
    #[inline]
    pub fn as_duration(self) -> Duration {
        Duration::from_micros(self.micros as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_speed() {
        let width = PulseWidth::from_speed(Rpm(150), 200).unwrap();
        assert_eq!(width.as_micros(), 2000);
        assert_eq!(width.as_duration(), Duration::from_micros(2000));
    }

    #[test]
    fn test_truncates() {
        // 60_000_000 / (7 * 200) = 42857.14...
        assert_eq!(PulseWidth::from_speed(Rpm(7), 200).unwrap().as_micros(), 42857);
    }

    #[test]
    fn test_largest_product_does_not_overflow() {
        assert!(matches!(
            PulseWidth::from_speed(Rpm(u16::MAX), u16::MAX),
            Err(Error::Config(ConfigError::PulseWidthTooShort { .. }))
        ));
    }

    #[test]
    fn test_one_microsecond_is_accepted() {
        // 60_000_000 / (30_000 * 2000) = 1
        assert_eq!(PulseWidth::from_speed(Rpm(30_000), 2000).unwrap().as_micros(), 1);
    }

    #[test]
    fn test_zero_inputs_rejected() {
        assert_eq!(
            PulseWidth::from_speed(Rpm(0), 200),
            Err(Error::Config(ConfigError::InvalidRpm(0)))
        );
        assert_eq!(
            PulseWidth::from_speed(Rpm(60), 0),
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        );
    }
}
