mod bounds;
mod cli;
mod config;
mod decide;
mod discovery;
mod feedback;
mod logging;
mod mission;
mod model;
mod policy;
mod state;

use std::io;
use std::process;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let config = match cli.mission_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    let mut reader = io::stdin().lock();
    let mut writer = io::stdout().lock();

    if let Err(e) = mission::run(&mut reader, &mut writer, &config) {
        eprintln!("Mission failed: {e}");
        process::exit(1);
    }
}
