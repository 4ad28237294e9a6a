pub mod errors;
pub mod utils;
pub mod coordinate;
pub mod units;
pub mod commands;

pub use errors::{CoordError, CoordResult, ErrorKind};
pub use coordinate::{Coordinates, Latitude, Longitude, EARTH_RADIUS_KM};
pub use units::DistanceUnit;
