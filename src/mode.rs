//! Shelf modes.

use crate::config::FeedConfig;
use crate::error::SyncError;
use std::fmt;
use std::str::FromStr;

/// Which Goodreads shelf to sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Books already read.
    Read,
    /// Books on the "want to read" shelf.
    Want,
}

impl Mode {
    /// Identifier used in cache file names.
    pub fn id(self) -> &'static str {
        match self {
            Mode::Read => "read",
            Mode::Want => "want",
        }
    }

    /// File name of the list note written into the listas directory.
    pub fn list_file_name(self) -> &'static str {
        match self {
            Mode::Read => "Libros Leidos.md",
            Mode::Want => "Want to Read.md",
        }
    }

    /// Feed URL for this shelf.
    pub fn feed_url(self, feeds: &FeedConfig) -> &str {
        match self {
            Mode::Read => &feeds.read_url,
            Mode::Want => &feeds.want_url,
        }
    }

    /// Parse every token, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Mode>, SyncError> {
        tokens.iter().map(|t| t.as_ref().parse()).collect()
    }
}

impl FromStr for Mode {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Mode::Read),
            "want" => Ok(Mode::Want),
            other => Err(SyncError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
