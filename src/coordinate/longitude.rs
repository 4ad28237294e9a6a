//! Longitude value object

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{CoordError, CoordResult};
use crate::utils::string_utils::parse_numeric;

/// A longitude in degrees, guaranteed to lie within [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude {
    value: f64,
}

impl Longitude {
    /// Western edge of the antimeridian
    pub const MIN: f64 = -180.0;
    /// Eastern edge of the antimeridian
    pub const MAX: f64 = 180.0;

    /// Create a longitude, rejecting values outside [-180, 180]
    pub fn new(value: f64) -> CoordResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(CoordError::LongitudeOutOfRange(value));
        }
        Ok(Longitude { value })
    }

    /// Parse a longitude from a numeric string
    pub fn from_string(value: &str) -> CoordResult<Self> {
        let parsed = parse_numeric(value)
            .ok_or_else(|| CoordError::InvalidLongitude(value.to_string()))?;
        Self::new(parsed)
    }

    /// Raw value in degrees
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Exact comparison, no tolerance
    pub fn equals(&self, other: &Longitude) -> bool {
        self.value == other.value
    }

    /// Single-entry map keyed by "longitude"
    pub fn to_map(&self) -> HashMap<String, f64> {
        HashMap::from([("longitude".to_string(), self.value)])
    }

    /// Strictly above 0 degrees
    pub fn is_eastern(&self) -> bool {
        self.value > 0.0
    }

    /// Strictly below 0 degrees
    pub fn is_western(&self) -> bool {
        self.value < 0.0
    }

    /// Exactly 0 degrees
    pub fn is_prime_meridian(&self) -> bool {
        self.value == 0.0
    }

    /// True on either side of the antimeridian (+180 or -180)
    pub fn is_international_date_line(&self) -> bool {
        self.value == Self::MAX || self.value == Self::MIN
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Longitude {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Longitude::from_string(s)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = CoordError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Longitude::new(value)
    }
}

impl From<Longitude> for f64 {
    fn from(longitude: Longitude) -> Self {
        longitude.value
    }
}
