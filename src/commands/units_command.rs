//! Distance unit listing command

use crate::commands::command_traits::Command;
use crate::errors::CoordResult;
use crate::units::DistanceUnit;

/// Command that prints the table of supported distance units
pub struct UnitsCommand;

impl Command for UnitsCommand {
    fn report(&self) -> CoordResult<String> {
        let mut lines = vec![format!("{:<6}{:<18}{}", "code", "name", "per km")];
        for unit in DistanceUnit::ALL {
            lines.push(format!("{:<6}{:<18}{}", unit.code(), unit.display_name(), unit.conversion_factor()));
        }
        Ok(lines.join("\n"))
    }
}
