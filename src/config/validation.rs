//! Configuration validation.

use crate::error::Result;

use super::{MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks that every motor's speed parameters yield a positive pulse width.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, motor) in config.motors.iter() {
        validate_motor(motor)?;
    }

    Ok(())
}

fn validate_motor(config: &MotorConfig) -> Result<()> {
    config.pulse_width().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Rpm;
    use crate::error::{ConfigError, Error};

    fn motor(rpm: u16, steps_per_revolution: u16) -> MotorConfig {
        MotorConfig {
            name: heapless::String::try_from("test").unwrap(),
            rpm: Rpm(rpm),
            steps_per_revolution,
        }
    }

    #[test]
    fn test_zero_rpm_rejected() {
        assert!(matches!(
            validate_motor(&motor(0, 200)),
            Err(Error::Config(ConfigError::InvalidRpm(0)))
        ));
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(
            validate_motor(&motor(60, 0)),
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
    }

    #[test]
    fn test_valid_system_passes() {
        let mut config = SystemConfig::default();
        config
            .motors
            .insert(heapless::String::try_from("x").unwrap(), motor(150, 200))
            .unwrap();

        assert!(validate_config(&config).is_ok());
    }
}
