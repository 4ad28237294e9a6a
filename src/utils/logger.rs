//! Logger setup for the command line tool
//!
//! The library only emits records through the `log` facade. This module
//! wires those records to `env_logger`, optionally redirected to a file.

use std::fs::File;
use std::io;
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initializes the global logger
///
/// # Arguments
///
/// * `verbose` - Log at debug level instead of info
/// * `log_file` - Write records to this file instead of stderr
///
/// `RUST_LOG` overrides the level chosen here.
pub fn init_global_logger(verbose: bool, log_file: Option<&str>) -> io::Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
    builder.parse_default_env();
    builder.format_timestamp(None);

    if let Some(path) = log_file {
        let file = File::create(Path::new(path))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // Only fails when a logger is already installed
    if builder.try_init().is_err() {
        eprintln!("Warning: Global logger was already initialized");
    }

    Ok(())
}
