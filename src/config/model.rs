//! Config struct definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Shelf feed URLs.
///
/// Unknown fields in the JSON are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// RSS feed of the "read" shelf.
    pub read_url: String,

    /// RSS feed of the "to-read" shelf.
    pub want_url: String,
}

/// Where the feed configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config-json` flag.
    Flag,
    /// `GOODREADS_CONFIG` environment variable.
    Env,
    /// JSON file on disk.
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag => write!(f, "--config-json"),
            ConfigSource::Env => write!(f, "${}", super::CONFIG_ENV_VAR),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Directories the sync reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Receives the list notes.
    pub listas_dir: PathBuf,
    /// Holds existing book notes.
    pub books_dir: PathBuf,
    /// Cache and default config location.
    pub data_dir: PathBuf,
}

impl Workspace {
    /// Name used for wiki links into the books directory.
    pub fn books_link_prefix(&self) -> String {
        self.books_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub feeds: FeedConfig,
    pub source: ConfigSource,
    pub workspace: Workspace,
    /// Ignore today's cache and fetch again.
    pub refresh: bool,
}
