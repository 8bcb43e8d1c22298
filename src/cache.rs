//! Per-day shelf cache.
//!
//! A fetched shelf is stored as `books-<mode>-<YYYY-MM-DD>.json` in the data
//! directory. Runs on the same day reuse it instead of walking every feed
//! page again. An empty cached shelf is never trusted.

use crate::book::Book;
use crate::error::{Result, SyncError, io_err};
use crate::feed::{FeedSource, fetch_shelf};
use crate::mode::Mode;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Cache file for a shelf on a given day.
pub fn cache_path(data_dir: &Path, mode: Mode, day: NaiveDate) -> PathBuf {
    data_dir.join(format!("books-{}-{}.json", mode.id(), day.format("%Y-%m-%d")))
}

/// Read a cached shelf.
///
/// Returns `None` when the file is missing, empty, or unreadable.
pub fn load(path: &Path) -> Option<Vec<Book>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("ignoring unreadable cache '{}': {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str::<Vec<Book>>(&content) {
        Ok(books) if books.is_empty() => None,
        Ok(books) => Some(books),
        Err(e) => {
            log::warn!("ignoring corrupt cache '{}': {}", path.display(), e);
            None
        }
    }
}

/// Write a shelf to the cache, replacing any previous file.
pub fn store(path: &Path, books: &[Book]) -> Result<()> {
    let json = serde_json::to_string_pretty(books)
        .map_err(|e| SyncError::Serialization(format!("cache: {}", e)))?;
    crate::fs::atomic_write_file(path, &json)
}

/// Return today's cached shelf, fetching and caching it on a miss.
pub fn load_or_fetch(
    source: &dyn FeedSource,
    url: &str,
    path: &Path,
    refresh: bool,
) -> Result<Vec<Book>> {
    if !refresh
        && let Some(books) = load(path)
    {
        log::info!("using cached shelf {} ({} books)", path.display(), books.len());
        return Ok(books);
    }

    let books = fetch_shelf(source, url)?;
    log::info!("fetched {} books from {}", books.len(), url);
    store(path, &books)?;
    Ok(books)
}

/// Remove cache files for a mode that are not from `today`.
///
/// Returns the number of files removed.
pub fn prune(data_dir: &Path, mode: Mode, today: NaiveDate) -> Result<usize> {
    let prefix = format!("books-{}-", mode.id());
    let keep = cache_path(data_dir, mode, today);
    let mut removed = 0;

    let entries = std::fs::read_dir(data_dir).map_err(|e| io_err(data_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(data_dir, e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(&prefix) && name.ends_with(".json") && path != keep {
            std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
            log::debug!("pruned stale cache {}", path.display());
            removed += 1;
        }
    }

    Ok(removed)
}
