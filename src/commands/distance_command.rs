//! Great-circle distance command
//!
//! Computes the haversine distance between two "lat,lon" points and
//! prints it in the requested unit.

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::coordinate::Coordinates;
use crate::errors::{CoordError, CoordResult};
use crate::units::DistanceUnit;
use crate::utils::CliConfig;

/// Command for measuring the distance between two points
pub struct DistanceCommand<'a> {
    /// Starting point
    from: Coordinates,
    /// End point
    to: Coordinates,
    /// Output unit
    unit: DistanceUnit,
    /// Output settings
    config: &'a CliConfig,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - Matches of the `distance` subcommand
    /// * `config` - Output settings
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches, config: &'a CliConfig) -> CoordResult<Self> {
        let from = parse_point(args, "from")?;
        let to = parse_point(args, "to")?;

        let unit = match args.get_one::<String>("unit") {
            Some(code) => DistanceUnit::from_code(code)?,
            None => config.default_unit,
        };

        debug!("Distance command: from={} to={} unit={}", from, to, unit);

        Ok(DistanceCommand { from, to, unit, config })
    }

    /// Distance in the selected unit
    pub fn distance(&self) -> f64 {
        self.from.distance_to_in(&self.to, self.unit)
    }
}

fn parse_point(args: &ArgMatches, name: &str) -> CoordResult<Coordinates> {
    let raw = args
        .get_one::<String>(name)
        .ok_or_else(|| CoordError::GenericError(format!("Missing {} coordinate", name)))?;
    Coordinates::from_string(raw)
}

impl Command for DistanceCommand<'_> {
    fn report(&self) -> CoordResult<String> {
        let distance = self.distance();
        debug!("Distance from {} to {} is {} {}", self.from, self.to, distance, self.unit.display_name());
        Ok(self.config.format_distance(distance, self.unit))
    }
}
