//! CLI configuration
//!
//! Settings are read from an optional TOML file:
//!
//! ```toml
//! default_unit = "mi"
//! precision = 3
//! ```

use std::fs;

use log::debug;

use crate::errors::{CoordError, CoordResult};
use crate::units::DistanceUnit;

/// Largest number of decimal places accepted for `precision`
pub const MAX_PRECISION: usize = 17;

/// Output settings for the command line tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CliConfig {
    /// Unit used when `--unit` is not given
    pub default_unit: DistanceUnit,
    /// Decimal places printed for distances
    pub precision: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_unit: DistanceUnit::Kilometers,
            precision: 2,
        }
    }
}

impl CliConfig {
    /// Parse configuration from a TOML string
    ///
    /// Missing keys keep their defaults, unknown keys are ignored.
    pub fn from_str(content: &str) -> CoordResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CoordError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = CliConfig::default();

        if let Some(value) = toml_value.get("default_unit") {
            let code = value
                .as_str()
                .ok_or_else(|| CoordError::ConfigError("default_unit must be a string".to_string()))?;
            config.default_unit = DistanceUnit::from_code(code)?;
        }

        if let Some(value) = toml_value.get("precision") {
            config.precision = value
                .as_integer()
                .and_then(|p| usize::try_from(p).ok())
                .filter(|p| *p <= MAX_PRECISION)
                .ok_or_else(|| {
                    CoordError::ConfigError(format!(
                        "precision must be an integer between 0 and {}",
                        MAX_PRECISION
                    ))
                })?;
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> CoordResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Format a distance with the configured precision
    pub fn format_distance(&self, distance: f64, unit: DistanceUnit) -> String {
        format!("{:.*} {}", self.precision, distance, unit.code())
    }
}
