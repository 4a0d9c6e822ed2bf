// src/bin/cotag.rs
use clap::Parser;
use colored::Colorize;
use tracing::Level;

use cotag_core::cli::{dispatch, Cli};
use cotag_core::exit::CotagExit;

fn main() -> CotagExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            CotagExit::for_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
