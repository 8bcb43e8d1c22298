//! Configuration for the goodreads CLI.
//!
//! The feed configuration is a small JSON object naming the two shelf feeds.
//! It comes from one of three places, checked in order:
//!
//! 1. the `--config-json` flag,
//! 2. the `GOODREADS_CONFIG` environment variable (the CI secret),
//! 3. a JSON file, by default `<data-dir>/config.json`.
//!
//! Everything is resolved once into a [`Settings`] value before any work
//! starts, so a missing or malformed configuration fails the run before the
//! network or the vault is touched.

mod model;
mod operations;


pub use model::{ConfigSource, FeedConfig, Settings, Workspace};
pub use operations::{CONFIG_ENV_VAR, resolve_feeds};
