//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, enabling a clean separation of concerns.

use crate::errors::CoordResult;
use crate::utils::CliConfig;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Produce the text the command prints
    fn report(&self) -> CoordResult<String>;

    /// Execute the command, printing its report to stdout
    fn execute(&self) -> CoordResult<()> {
        println!("{}", self.report()?);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
///
/// This trait defines the interface for command factories
/// which can parse CLI arguments and create the appropriate Command.
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Output settings shared by all commands
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, config: &'a CliConfig) -> CoordResult<Box<dyn Command + 'a>>;
}
