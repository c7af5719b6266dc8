//! # phase-stepper
//!
//! Non-blocking driver for 4-wire bipolar stepper motors.
//!
//! ## Features
//!
//! - **Four-phase sequencing**: full-step coil patterns visited cyclically in
//!   either direction, one line toggled per step
//! - **Non-blocking**: the driver never sleeps, it asks a [`Scheduler`] to call
//!   [`Stepper::update`] again once the minimum pulse width has elapsed
//! - **embedded-hal 1.0**: coils are driven through four `OutputPin`s
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: motors can be described in TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use phase_stepper::{ClockScheduler, FourPinPort, StepperBuilder};
//!
//! let mut motor = StepperBuilder::new()
//!     .name("x_axis")
//!     .rpm(150)
//!     .steps_per_revolution(200)
//!     .output(FourPinPort::new(a1, a2, b1, b2))
//!     .scheduler(ClockScheduler::new(clock))
//!     .build()?;
//!
//! motor.move_to(Steps(400));
//! loop {
//!     motor.update()?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// This must come first so the macros are visible to the other modules.
#[macro_use]
pub(crate) mod fmt;

pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod phase;
pub mod schedule;

pub use config::{validate_config, MotorConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{Direction, MotionState};
pub use motor::{PulseWidth, Stepper, StepperBuilder};
pub use phase::{FourPinPort, PhaseOutput, PhasePattern, PhaseState};
pub use schedule::{ClockScheduler, ManualClock, Scheduler, SystemClock};

#[cfg(feature = "std")]
pub use config::load_config;

#[cfg(feature = "std")]
pub use schedule::OperatingSystemClock;

pub use config::units::{Rpm, Steps};
