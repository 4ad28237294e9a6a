//! Latitude/longitude pair with classification and great-circle distance

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use super::latitude::Latitude;
use super::longitude::Longitude;
use crate::errors::{CoordError, CoordResult};
use crate::units::DistanceUnit;
use crate::utils::string_utils::{coerce_leading_float, trim_numeric_padding};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const LATITUDE_KEY: &str = "latitude";
const LONGITUDE_KEY: &str = "longitude";

/// A geographic position made of a validated latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: Latitude,
    longitude: Longitude,
}

impl Coordinates {
    /// Combine two already validated components
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Coordinates { latitude, longitude }
    }

    /// Build from raw degrees, latitude is validated first
    pub fn from_floats(latitude: f64, longitude: f64) -> CoordResult<Self> {
        Ok(Coordinates::new(Latitude::new(latitude)?, Longitude::new(longitude)?))
    }

    /// Build from a map holding both "latitude" and "longitude"
    pub fn from_map(data: &HashMap<String, f64>) -> CoordResult<Self> {
        let latitude = data
            .get(LATITUDE_KEY)
            .ok_or(CoordError::MissingKey(LATITUDE_KEY))?;
        let longitude = data
            .get(LONGITUDE_KEY)
            .ok_or(CoordError::MissingKey(LONGITUDE_KEY))?;

        Self::from_floats(*latitude, *longitude)
    }

    /// Parse a "latitude,longitude" string
    ///
    /// Each half is trimmed and coerced through its leading numeric prefix,
    /// so text without digits reads as 0.0. Use [`Latitude::from_string`] and
    /// [`Longitude::from_string`] for strict parsing.
    pub fn from_string(coordinates: &str) -> CoordResult<Self> {
        debug!("Parsing coordinates '{}'", coordinates);

        let parts: Vec<&str> = coordinates.split(',').collect();
        if parts.len() != 2 {
            return Err(CoordError::InvalidFormat(coordinates.to_string()));
        }

        let latitude = coerce_part(trim_numeric_padding(parts[0]), LATITUDE_KEY);
        let longitude = coerce_part(trim_numeric_padding(parts[1]), LONGITUDE_KEY);

        Self::from_floats(latitude, longitude)
    }

    /// Latitude component
    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// Longitude component
    pub fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// Component-wise exact comparison
    pub fn equals(&self, other: &Coordinates) -> bool {
        self.latitude.equals(&other.latitude) && self.longitude.equals(&other.longitude)
    }

    /// Map with "latitude" and "longitude" entries
    pub fn to_map(&self) -> HashMap<String, f64> {
        HashMap::from([
            (LATITUDE_KEY.to_string(), self.latitude.value()),
            (LONGITUDE_KEY.to_string(), self.longitude.value()),
        ])
    }

    /// North of the equator
    pub fn is_northern(&self) -> bool {
        self.latitude.is_northern()
    }

    /// South of the equator
    pub fn is_southern(&self) -> bool {
        self.latitude.is_southern()
    }

    /// Exactly on the equator
    pub fn is_equator(&self) -> bool {
        self.latitude.is_equator()
    }

    /// East of the prime meridian
    pub fn is_eastern(&self) -> bool {
        self.longitude.is_eastern()
    }

    /// West of the prime meridian
    pub fn is_western(&self) -> bool {
        self.longitude.is_western()
    }

    /// Exactly on the prime meridian
    pub fn is_prime_meridian(&self) -> bool {
        self.longitude.is_prime_meridian()
    }

    /// On the antimeridian, at +180 or -180
    pub fn is_international_date_line(&self) -> bool {
        self.longitude.is_international_date_line()
    }

    /// Same as [`Coordinates::is_prime_meridian`]
    pub fn is_greenwich_meridian(&self) -> bool {
        self.is_prime_meridian()
    }

    /// Great-circle distance in kilometers using the haversine formula
    ///
    /// Identical points return exactly 0.0.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self.equals(other) {
            return 0.0;
        }

        let lat1 = self.latitude.value().to_radians();
        let lon1 = self.longitude.value().to_radians();
        let lat2 = other.latitude.value().to_radians();
        let lon2 = other.longitude.value().to_radians();

        let dlat = lat2 - lat1;
        let dlon = lon2 - lon1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // Rounding can push a just past 1 near antipodes
        let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

        let distance = EARTH_RADIUS_KM * c;
        debug!("Distance from {} to {}: {} km", self, other, distance);
        distance
    }

    /// Great-circle distance expressed in `unit`
    pub fn distance_to_in(&self, other: &Coordinates, unit: DistanceUnit) -> f64 {
        unit.convert(self.distance_to(other))
    }
}

/// Lenient float coercion for one half of a coordinate pair
fn coerce_part(part: &str, axis: &str) -> f64 {
    let (value, matched) = coerce_leading_float(part);
    if !matched {
        warn!("Non-numeric {} '{}' read as 0", axis, part);
    }
    value
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinates::from_string(s)
    }
}

impl From<(Latitude, Longitude)> for Coordinates {
    fn from((latitude, longitude): (Latitude, Longitude)) -> Self {
        Coordinates::new(latitude, longitude)
    }
}
