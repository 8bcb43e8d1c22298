//! goodreads: sync Goodreads shelves into a folder of markdown notes.
//!
//! This is the main entry point for the `goodreads` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and turns errors into
//! exit codes so the calling script or CI job sees every failure.

mod cli;
mod commands;
pub mod book;
pub mod cache;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod feed;
pub mod fs;
pub mod mode;
pub mod note;
pub mod render;

#[cfg(test)]
mod test_support;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            return ExitCode::from(code as u8);
        }
    };

    init_logging(cli.global.verbose);

    match commands::dispatch(&cli.global, cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Initialise env_logger. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
