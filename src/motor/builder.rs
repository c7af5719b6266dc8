//! Builder pattern for Stepper.

use crate::config::units::Rpm;
use crate::config::{MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::phase::PhaseOutput;
use crate::schedule::Scheduler;

use super::driver::Stepper;
use super::pulse::PulseWidth;

/// Builder for creating Stepper instances.
pub struct StepperBuilder<O, S>
where
    O: PhaseOutput,
    S: Scheduler,
{
    output: Option<O>,
    scheduler: Option<S>,
    name: Option<heapless::String<32>>,
    rpm: Option<Rpm>,
    steps_per_revolution: Option<u16>,
}

impl<O, S> Default for StepperBuilder<O, S>
where
    O: PhaseOutput,
    S: Scheduler,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S> StepperBuilder<O, S>
where
    O: PhaseOutput,
    S: Scheduler,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            output: None,
            scheduler: None,
            name: None,
            rpm: None,
            steps_per_revolution: None,
        }
    }

    /// Set the coil output port.
    pub fn output(mut self, output: O) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the scheduler.
    pub fn scheduler(mut self, scheduler: S) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Set the motor name. Names longer than 32 bytes are cut short.
    pub fn name(mut self, name: &str) -> Self {
        let mut stored = heapless::String::new();
        for c in name.chars() {
            if stored.push(c).is_err() {
                warn!("motor name truncated to {}", stored.as_str());
                break;
            }
        }
        self.name = Some(stored);
        self
    }

    /// Set the commanded speed in revolutions per minute.
    pub fn rpm(mut self, rpm: u16) -> Self {
        self.rpm = Some(Rpm(rpm));
        self
    }

    /// Set full steps per revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.rpm = Some(config.rpm);
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self
    }

    /// Configure from SystemConfig by motor name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MotorNotFound`] if no motor has that key.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the Stepper.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the speed
    /// parameters do not yield a positive pulse width.
    pub fn build(self) -> Result<Stepper<O, S>> {
        let output = self
            .output
            .ok_or(Error::Config(ConfigError::MissingField("output")))?;
        let scheduler = self
            .scheduler
            .ok_or(Error::Config(ConfigError::MissingField("scheduler")))?;
        let rpm = self
            .rpm
            .ok_or(Error::Config(ConfigError::MissingField("rpm")))?;
        let steps = self
            .steps_per_revolution
            .ok_or(Error::Config(ConfigError::MissingField("steps_per_revolution")))?;

        let pulse_width = PulseWidth::from_speed(rpm, steps)?;
        let name = self.name.unwrap_or_else(|| {
            let mut name = heapless::String::new();
            let _ = name.push_str("motor");
            name
        });

        Ok(Stepper::new(output, scheduler, pulse_width, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::PhasePattern;
    use crate::schedule::ClockScheduler;
    use core::convert::Infallible;
    use core::time::Duration;

    struct NullPort;

    impl PhaseOutput for NullPort {
        type Error = Infallible;

        fn write(&mut self, _pattern: PhasePattern) -> core::result::Result<(), Infallible> {
            Ok(())
        }
    }

    fn clock() -> Duration {
        Duration::ZERO
    }

    #[test]
    fn test_build_from_fields() {
        let motor = StepperBuilder::new()
            .name("spindle")
            .rpm(150)
            .steps_per_revolution(200)
            .output(NullPort)
            .scheduler(ClockScheduler::new(clock))
            .build()
            .unwrap();

        assert_eq!(motor.name(), "spindle");
        assert_eq!(motor.min_pulse_width().as_micros(), 2000);
        assert!(motor.is_ready());
    }

    #[test]
    fn test_missing_output() {
        let result = StepperBuilder::<NullPort, ClockScheduler<fn() -> Duration>>::new()
            .rpm(150)
            .steps_per_revolution(200)
            .scheduler(ClockScheduler::new(clock as fn() -> Duration))
            .build();

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField("output")))
        ));
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let result = StepperBuilder::new()
            .rpm(0)
            .steps_per_revolution(200)
            .output(NullPort)
            .scheduler(ClockScheduler::new(clock))
            .build();

        assert!(matches!(result, Err(Error::Config(ConfigError::InvalidRpm(0)))));
    }

    #[test]
    fn test_long_name_truncated() {
        let motor = StepperBuilder::new()
            .name("an-extremely-long-motor-name-that-overflows")
            .rpm(60)
            .steps_per_revolution(200)
            .output(NullPort)
            .scheduler(ClockScheduler::new(clock))
            .build()
            .unwrap();

        assert_eq!(motor.name().len(), 32);
        assert!(motor.name().starts_with("an-extremely-long"));
    }

    #[test]
    fn test_default_name() {
        let motor = StepperBuilder::new()
            .rpm(60)
            .steps_per_revolution(200)
            .output(NullPort)
            .scheduler(ClockScheduler::new(clock))
            .build()
            .unwrap();

        assert_eq!(motor.name(), "motor");
    }
}
