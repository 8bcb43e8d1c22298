//! Command implementations for goodreads.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the settings resolution they share.

mod list;
mod render;

use crate::cli::{Command, GlobalArgs};
use crate::config::{CONFIG_ENV_VAR, Settings, Workspace, resolve_feeds};
use crate::error::Result;

/// File name of the default config inside the data directory.
const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Dispatch a command to its implementation.
pub fn dispatch(global: &GlobalArgs, command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(global, args),
        Command::List(args) => list::cmd_list(global, args),
    }
}

/// Build the run settings from the global flags and the process environment.
fn resolve_settings(global: &GlobalArgs, refresh: bool) -> Result<Settings> {
    let env = std::env::var(CONFIG_ENV_VAR).ok();
    settings_from(global, env.as_deref(), refresh)
}

/// Build the run settings from the global flags and an explicit env value.
fn settings_from(global: &GlobalArgs, env: Option<&str>, refresh: bool) -> Result<Settings> {
    let config_path = global
        .config_path
        .clone()
        .unwrap_or_else(|| global.data_dir.join(DEFAULT_CONFIG_FILE));

    let (feeds, source) = resolve_feeds(global.config_json.as_deref(), env, &config_path)?;

    let settings = Settings {
        feeds,
        source,
        workspace: Workspace {
            listas_dir: global.listas_dir.clone(),
            books_dir: global.books_dir.clone(),
            data_dir: global.data_dir.clone(),
        },
        refresh,
    };
    log::info!("using configuration from {}", settings.source);
    Ok(settings)
}
