//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod distance_command;
pub mod inspect_command;
pub mod units_command;

pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use inspect_command::InspectCommand;
pub use units_command::UnitsCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::errors::{CoordError, CoordResult};
use crate::utils::CliConfig;

/// Build the clap definition of the `coord` command line
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("coord")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate geographic coordinates and measure distances between them")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance between two points")
                .arg(
                    Arg::new("from")
                        .help("Start point as 'lat,lon'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .help("End point as 'lat,lon'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(2),
                )
                .arg(
                    Arg::new("unit")
                        .short('u')
                        .long("unit")
                        .help("Output unit code (km, mi, nmi, m, ...)")
                        .value_name("CODE"),
                ),
        )
        .subcommand(
            ClapCommand::new("inspect")
                .about("Describe a single coordinate")
                .arg(
                    Arg::new("coordinate")
                        .help("Point as 'lat,lon'")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                ),
        )
        .subcommand(ClapCommand::new("units").about("List supported distance units"))
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct CoordCommandFactory;

impl CoordCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CoordCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a CliConfig) -> CoordResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("distance", sub_args)) => Ok(Box::new(DistanceCommand::new(sub_args, config)?)),
            Some(("inspect", sub_args)) => Ok(Box::new(InspectCommand::new(sub_args)?)),
            Some(("units", _)) => Ok(Box::new(UnitsCommand)),
            Some((name, _)) => Err(CoordError::GenericError(format!("Unknown command: {}", name))),
            None => Err(CoordError::GenericError("No command given".to_string())),
        }
    }
}
