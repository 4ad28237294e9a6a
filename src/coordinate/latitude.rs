//! Latitude value object

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{CoordError, CoordResult};
use crate::utils::string_utils::parse_numeric;

/// A latitude in degrees, guaranteed to lie within [-90, 90]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude {
    value: f64,
}

impl Latitude {
    /// Southern pole
    pub const MIN: f64 = -90.0;
    /// Northern pole
    pub const MAX: f64 = 90.0;

    /// Create a latitude, rejecting values outside [-90, 90]
    pub fn new(value: f64) -> CoordResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(CoordError::LatitudeOutOfRange(value));
        }
        Ok(Latitude { value })
    }

    /// Parse a latitude from a numeric string
    pub fn from_string(value: &str) -> CoordResult<Self> {
        let parsed = parse_numeric(value)
            .ok_or_else(|| CoordError::InvalidLatitude(value.to_string()))?;
        Self::new(parsed)
    }

    /// Raw value in degrees
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Exact comparison, no tolerance
    pub fn equals(&self, other: &Latitude) -> bool {
        self.value == other.value
    }

    /// Single-entry map keyed by "latitude"
    pub fn to_map(&self) -> HashMap<String, f64> {
        HashMap::from([("latitude".to_string(), self.value)])
    }

    /// Strictly above 0 degrees
    pub fn is_northern(&self) -> bool {
        self.value > 0.0
    }

    /// Strictly below 0 degrees
    pub fn is_southern(&self) -> bool {
        self.value < 0.0
    }

    /// Exactly 0 degrees
    pub fn is_equator(&self) -> bool {
        self.value == 0.0
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Latitude {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Latitude::from_string(s)
    }
}

impl TryFrom<f64> for Latitude {
    type Error = CoordError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Latitude::new(value)
    }
}

impl From<Latitude> for f64 {
    fn from(latitude: Latitude) -> Self {
        latitude.value
    }
}
