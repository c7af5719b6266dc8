//! Basic stepper example.
//!
//! Builds a motor from TOML, then drives it from a host polling loop with the
//! operating-system clock. Coil lines are printed instead of toggling GPIO.

use std::convert::Infallible;

use phase_stepper::{
    ClockScheduler, OperatingSystemClock, PhaseOutput, PhasePattern, Steps, StepperBuilder,
};

/// Output port that prints each pattern.
struct ConsolePort;

impl PhaseOutput for ConsolePort {
    type Error = Infallible;

    fn setup(&mut self) -> Result<(), Infallible> {
        println!("lines configured as outputs");
        Ok(())
    }

    fn write(&mut self, pattern: PhasePattern) -> Result<(), Infallible> {
        let bits: String = pattern
            .lines()
            .iter()
            .map(|high| if *high { '1' } else { '0' })
            .collect();
        println!("coils {}", bits);
        Ok(())
    }
}

fn main() {
    println!("=== Basic Stepper Example ===\n");

    let toml_content = r#"
[motors.demo]
name = "demo_motor"
rpm = 150
steps_per_revolution = 200
"#;

    let config = phase_stepper::config::parse_config(toml_content)
        .expect("Failed to parse config");

    let mut motor = StepperBuilder::new()
        .from_config(&config, "demo")
        .expect("motor 'demo' missing")
        .output(ConsolePort)
        .scheduler(ClockScheduler::new(OperatingSystemClock::new()))
        .build()
        .expect("Failed to build motor");

    println!(
        "Motor '{}' created, {} us between steps",
        motor.name(),
        motor.min_pulse_width().as_micros()
    );

    motor.move_to(Steps(6));
    while !motor.is_ready() {
        motor.update().expect("console port cannot fail");
    }
    println!("Position after forward move: {}", motor.current_position().0);

    motor.move_by(Steps(-3));
    while !motor.is_ready() {
        motor.update().expect("console port cannot fail");
    }
    println!("Position after reverse move: {}", motor.current_position().0);

    motor.stop_off().expect("console port cannot fail");
    println!("\n=== Example Complete ===");
}
