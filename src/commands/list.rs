//! `goodreads list` command implementation.

use super::resolve_settings;
use crate::book::Book;
use crate::cache;
use crate::cli::{GlobalArgs, ListArgs};
use crate::config::Settings;
use crate::error::{Result, SyncError};
use crate::feed::{FeedSource, HttpFeed};
use crate::mode::Mode;
use chrono::{Local, NaiveDate};

/// Print a shelf as a JSON array on stdout.
pub fn cmd_list(global: &GlobalArgs, args: ListArgs) -> Result<()> {
    let mode: Mode = args.mode.parse()?;
    let settings = resolve_settings(global, args.refresh)?;

    let source = HttpFeed::default();
    let books = shelf(mode, &settings, &source, Local::now().date_naive())?;

    let json = serde_json::to_string_pretty(&books)
        .map_err(|e| SyncError::Serialization(format!("shelf JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn shelf(
    mode: Mode,
    settings: &Settings,
    source: &dyn FeedSource,
    today: NaiveDate,
) -> Result<Vec<Book>> {
    let path = cache::cache_path(&settings.workspace.data_dir, mode, today);
    cache::load_or_fetch(source, mode.feed_url(&settings.feeds), &path, settings.refresh)
}
