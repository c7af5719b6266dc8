//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use phase_stepper::load_config;
///
/// let config = load_config("motors.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

// Keeps as much of the message as fits instead of dropping it entirely.
fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.x_axis]
name = "X-Axis"
rpm = 150
steps_per_revolution = 200
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor("x_axis").unwrap();
        assert_eq!(motor.pulse_width().unwrap().as_micros(), 2000);
    }

    #[test]
    fn test_default_steps_per_revolution() {
        let toml = r#"
[motors.feeder]
name = "Feeder"
rpm = 60
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.motor("feeder").unwrap().steps_per_revolution, 200);
    }

    #[test]
    fn test_parse_rejects_zero_rpm() {
        let toml = r#"
[motors.x_axis]
name = "X-Axis"
rpm = 0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidRpm(0)))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            parse_config("[motors.x_axis]\nrpm = \"fast\""),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/motors.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }

    #[test]
    fn test_truncated_keeps_prefix() {
        let long = "x".repeat(300);
        assert_eq!(truncated(&long).len(), 128);
    }
}
