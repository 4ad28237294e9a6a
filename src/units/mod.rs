//! Units of length used to express distances

mod distance_unit;

pub use self::distance_unit::DistanceUnit;
