//! File I/O operations for book notes.

use super::BookNote;
use crate::error::{Result, io_err};
use std::path::Path;

impl BookNote {
    /// Load a note from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        Ok(Self::parse(&content))
    }

    /// Atomically save the note to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P, markers: &str) -> Result<()> {
        let content = self.render(markers)?;
        crate::fs::atomic_write_file(path, &content)
    }
}
