//! Distance units and their conversion factors

use std::fmt;
use std::str::FromStr;

use crate::errors::{CoordError, CoordResult};

/// Units a kilometer distance can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
    NauticalMiles,
    Meters,
    Millimeters,
    Centimeters,
    Decimeters,
    Inches,
    Feet,
    Yards,
    LightYears,
}

impl DistanceUnit {
    /// Every unit, in declaration order
    pub const ALL: [DistanceUnit; 11] = [
        DistanceUnit::Kilometers,
        DistanceUnit::Miles,
        DistanceUnit::NauticalMiles,
        DistanceUnit::Meters,
        DistanceUnit::Millimeters,
        DistanceUnit::Centimeters,
        DistanceUnit::Decimeters,
        DistanceUnit::Inches,
        DistanceUnit::Feet,
        DistanceUnit::Yards,
        DistanceUnit::LightYears,
    ];

    /// Short code, e.g. "km"
    pub fn code(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
            DistanceUnit::Meters => "m",
            DistanceUnit::Millimeters => "mm",
            DistanceUnit::Centimeters => "cm",
            DistanceUnit::Decimeters => "dm",
            DistanceUnit::Inches => "in",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Yards => "yd",
            DistanceUnit::LightYears => "ly",
        }
    }

    /// Human readable plural name
    pub fn display_name(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Miles => "miles",
            DistanceUnit::NauticalMiles => "nautical miles",
            DistanceUnit::Meters => "meters",
            DistanceUnit::Millimeters => "millimeters",
            DistanceUnit::Centimeters => "centimeters",
            DistanceUnit::Decimeters => "decimeters",
            DistanceUnit::Inches => "inches",
            DistanceUnit::Feet => "feet",
            DistanceUnit::Yards => "yards",
            DistanceUnit::LightYears => "light years",
        }
    }

    /// Same as [`DistanceUnit::code`]
    pub fn abbreviation(&self) -> &'static str {
        self.code()
    }

    /// How many of this unit make one kilometer
    pub fn conversion_factor(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Miles => 0.621371,
            DistanceUnit::NauticalMiles => 0.539957,
            DistanceUnit::Meters => 1000.0,
            DistanceUnit::Millimeters => 1_000_000.0,
            DistanceUnit::Centimeters => 100_000.0,
            DistanceUnit::Decimeters => 10_000.0,
            DistanceUnit::Inches => 39370.1,
            DistanceUnit::Feet => 3280.84,
            DistanceUnit::Yards => 1093.61,
            DistanceUnit::LightYears => 1.057e-13,
        }
    }

    /// Convert a kilometer quantity into this unit
    pub fn convert(&self, kilometers: f64) -> f64 {
        kilometers * self.conversion_factor()
    }

    /// Look a unit up by its code
    pub fn from_code(code: &str) -> CoordResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.code() == code)
            .ok_or_else(|| CoordError::UnknownUnit(code.to_string()))
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DistanceUnit {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceUnit::from_code(s)
    }
}
