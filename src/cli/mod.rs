//! CLI argument parsing for goodreads.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sync Goodreads shelves into a folder of markdown notes.
///
/// Each shelf ("read" or "want") is fetched from its RSS feed, summarised
/// into a list note, and used to refresh the header of existing book notes.
#[derive(Parser, Debug)]
#[command(name = "goodreads")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Directory receiving the list notes.
    #[arg(long, global = true, default_value = "Listas")]
    pub listas_dir: PathBuf,

    /// Directory holding the book notes.
    #[arg(long, global = true, default_value = "Libros")]
    pub books_dir: PathBuf,

    /// Working directory for the shelf cache and default config file.
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Inline JSON configuration (takes precedence over GOODREADS_CONFIG and the config file).
    #[arg(long, global = true, value_name = "JSON")]
    pub config_json: Option<String>,

    /// Configuration file [default: <data-dir>/config.json].
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render shelves into the notes folder.
    ///
    /// Writes the list note for each mode and refreshes the header of every
    /// book note that already exists. Modes run one after another.
    Render(RenderArgs),

    /// Print a shelf as JSON.
    List(ListArgs),
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Shelves to render: read, want.
    #[arg(required = true, value_name = "MODE")]
    pub modes: Vec<String>,

    /// Stop at the first shelf that fails instead of rendering the rest.
    #[arg(long)]
    pub fail_fast: bool,

    /// Ignore today's cache and fetch the feed again.
    #[arg(long)]
    pub refresh: bool,
}

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Shelf to print: read or want.
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Ignore today's cache and fetch the feed again.
    #[arg(long)]
    pub refresh: bool,
}
