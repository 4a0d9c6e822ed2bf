// src/cli/dispatch.rs
//! Command dispatch logic extracted from binary to keep `main` small.

use anyhow::Result;

use super::args::{Cli, Commands, KnnArgs};
use super::handlers::{handle_dot, handle_knn};
use crate::config::Config;
use crate::exit::CotagExit;

/// Loads configuration and executes the parsed command.
///
/// # Errors
/// Returns error if the config is invalid or the command handler fails.
pub fn execute(cli: Cli) -> Result<CotagExit> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    match cli.command {
        Some(Commands::Knn {
            input,
            output,
            k,
            threshold,
            format,
        }) => handle_knn(
            &KnnArgs {
                input,
                output,
                k,
                threshold,
                format,
            },
            &config,
        ),
        Some(Commands::Dot { source, target }) => handle_dot(&source, &target, &config),
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            Ok(CotagExit::Success)
        }
    }
}
