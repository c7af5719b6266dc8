//! Error types for phase-stepper.
//!
//! Only construction and configuration can be rejected. Runtime commands are
//! total; the single runtime failure path is a fallible output port.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all phase-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A required builder field was not provided
    MissingField(&'static str),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Speed must be at least 1 rpm
    InvalidRpm(u16),
    /// Steps per revolution must be at least 1
    InvalidStepsPerRevolution(u16),
    /// rpm × steps per revolution leaves no time between steps
    PulseWidthTooShort {
        /// Requested speed
        rpm: u16,
        /// Requested steps per revolution
        steps_per_revolution: u16,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Writing the coil pattern to the output port failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::InvalidRpm(v) => write!(f, "Invalid rpm: {}. Must be > 0", v),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::PulseWidthTooShort { rpm, steps_per_revolution } => write!(
                f,
                "{} rpm at {} steps/rev leaves a pulse width under 1 us",
                rpm, steps_per_revolution
            ),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::InvalidRpm(0).into();
        assert_eq!(err, Error::Config(ConfigError::InvalidRpm(0)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_pulse_width() {
        let err = Error::Config(ConfigError::PulseWidthTooShort {
            rpm: 60000,
            steps_per_revolution: 2000,
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: 60000 rpm at 2000 steps/rev leaves a pulse width under 1 us"
        );
    }
}
