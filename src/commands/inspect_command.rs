//! Coordinate inspection command
//!
//! Prints the normalized forms of a coordinate and every hemisphere or
//! landmark classification that applies to it.

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::coordinate::Coordinates;
use crate::errors::{CoordError, CoordResult};

/// Command for describing a single coordinate
pub struct InspectCommand {
    coordinates: Coordinates,
}

impl InspectCommand {
    /// Create a new inspect command from the `inspect` subcommand matches
    pub fn new(args: &ArgMatches) -> CoordResult<Self> {
        let raw = args
            .get_one::<String>("coordinate")
            .ok_or_else(|| CoordError::GenericError("Missing coordinate".to_string()))?;
        let coordinates = Coordinates::from_string(raw)?;
        debug!("Inspecting {}", coordinates);

        Ok(InspectCommand { coordinates })
    }

    /// Names of the classifications that hold for this coordinate
    pub fn classifications(&self) -> Vec<&'static str> {
        let c = &self.coordinates;
        let checks = [
            (c.is_northern(), "northern hemisphere"),
            (c.is_southern(), "southern hemisphere"),
            (c.is_equator(), "equator"),
            (c.is_eastern(), "eastern hemisphere"),
            (c.is_western(), "western hemisphere"),
            (c.is_prime_meridian(), "prime meridian"),
            (c.is_international_date_line(), "international date line"),
        ];

        checks
            .into_iter()
            .filter(|(holds, _)| *holds)
            .map(|(_, name)| name)
            .collect()
    }
}

impl Command for InspectCommand {
    fn report(&self) -> CoordResult<String> {
        let mut lines = vec![
            format!("Coordinates: {}", self.coordinates),
            format!("  latitude:  {}", self.coordinates.latitude()),
            format!("  longitude: {}", self.coordinates.longitude()),
        ];

        let classifications = self.classifications();
        if classifications.is_empty() {
            lines.push("  classification: none".to_string());
        } else {
            lines.push(format!("  classification: {}", classifications.join(", ")));
        }

        Ok(lines.join("\n"))
    }
}
