//! Motor module for phase-stepper.
//!
//! Provides the non-blocking four-phase driver, its builder and the pulse
//! width derived from the commanded speed.

mod builder;
mod driver;
mod pulse;

pub use builder::StepperBuilder;
pub use driver::Stepper;
pub use pulse::PulseWidth;
