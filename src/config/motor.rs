//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::Rpm;
use crate::error::Result;
use crate::motor::PulseWidth;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Commanded speed in revolutions per minute.
    pub rpm: Rpm,

    /// Full steps per revolution (200 for 1.8° motors).
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u16,
}

fn default_steps_per_revolution() -> u16 {
    200
}

impl MotorConfig {
    /// Minimum time between two physical steps at the configured speed.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the speed parameters leave no time
    /// between steps.
    pub fn pulse_width(&self) -> Result<PulseWidth> {
        PulseWidth::from_speed(self.rpm, self.steps_per_revolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_width_from_config() {
        let config = MotorConfig {
            name: String::try_from("test").unwrap(),
            rpm: Rpm(150),
            steps_per_revolution: 200,
        };

        // 60_000_000 / (150 * 200) = 2000
        assert_eq!(config.pulse_width().unwrap().as_micros(), 2000);
    }
}
