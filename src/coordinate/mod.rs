//! Coordinate handling for geographic positions
//!
//! This module provides validated latitude and longitude values and the
//! pair type built from them.

mod latitude;
mod longitude;
mod coordinates;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::latitude::Latitude;
pub use self::longitude::Longitude;
pub use self::coordinates::{Coordinates, EARTH_RADIUS_KM};
