use std::process;
use log::error;

use coord::commands::{build_cli, Command, CommandFactory, CoordCommandFactory};
use coord::utils::logger::init_global_logger;
use coord::utils::CliConfig;

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let log_file = matches.get_one::<String>("log-file").map(String::as_str);
    if let Err(e) = init_global_logger(verbose, log_file) {
        eprintln!("Error initializing logger: {}", e);
        process::exit(1);
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match CliConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration from {}: {}", path, e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => CliConfig::default(),
    };

    let factory = CoordCommandFactory::new();

    match factory.create_command(&matches, &config) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
