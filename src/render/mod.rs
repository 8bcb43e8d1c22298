//! Rendering a shelf into the vault.
//!
//! For one mode this:
//!
//! 1. loads the shelf (today's cache or the feed),
//! 2. rewrites the list note in the listas directory,
//! 3. refreshes the header of every book note that already exists,
//! 4. prunes older cache files for the mode.
//!
//! Several modes are run through [`RenderReport::run`], which records a
//! [`ModeOutcome`] per mode and applies a [`FailurePolicy`].

mod report;


pub use report::{FailurePolicy, ModeOutcome, ModeSummary, RenderReport};

use crate::book::Book;
use crate::cache;
use crate::config::Settings;
use crate::error::Result;
use crate::feed::FeedSource;
use crate::mode::Mode;
use crate::note::{BOOK_MARKERS, BookNote};
use chrono::NaiveDateTime;
use std::path::Path;

/// Separator between the date link and the book link in list notes.
const LIST_DOT: char = '\u{1427}';

/// Render the list note body.
///
/// The count covers the whole shelf; only books with a read date and a
/// usable note name get a bullet.
pub fn render_list(books: &[Book], books_link_prefix: &str, now: NaiveDateTime) -> String {
    let mut out = format!(
        "Leidos {} libros ({})\n\n",
        books.len(),
        now.format("%Y-%m-%d %H:%M")
    );

    for book in books {
        let name = book.note_name();
        let Some(day) = book.read_day() else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "- [[{}]] {} [[{}/{}|{}]]\n",
            day, LIST_DOT, books_link_prefix, name, name
        ));
    }

    out
}

/// Refresh the header of every existing book note.
///
/// Returns how many notes were rewritten. Missing notes are not created.
pub fn update_book_notes(books: &[Book], books_dir: &Path) -> Result<usize> {
    let mut updated = 0;

    for book in books {
        let name = book.note_name();
        if name.is_empty() {
            log::debug!("skipping book {} with an empty note name", book.book_id);
            continue;
        }

        let path = books_dir.join(format!("{}.md", name));
        if !path.is_file() {
            continue;
        }

        let mut note = BookNote::load(&path)?;
        note.merge_header(book.note_fields()?);
        note.save(&path, BOOK_MARKERS)?;
        log::info!("updated {}", path.display());
        updated += 1;
    }

    Ok(updated)
}

/// Sync one shelf into the vault.
///
/// # Arguments
///
/// * `mode` - Shelf to render
/// * `settings` - Resolved feeds, directories and refresh flag
/// * `source` - Where feed pages come from
/// * `now` - Timestamp for the list heading; its date picks the cache file
///
/// # Returns
///
/// * `Ok(ModeSummary)` - List written, notes refreshed, stale cache pruned
/// * `Err(SyncError)` - The first failing step; a fetch failure writes nothing
pub fn render_mode(
    mode: Mode,
    settings: &Settings,
    source: &dyn FeedSource,
    now: NaiveDateTime,
) -> Result<ModeSummary> {
    let workspace = &settings.workspace;
    let today = now.date();
    let cache_file = cache::cache_path(&workspace.data_dir, mode, today);

    let books = cache::load_or_fetch(
        source,
        mode.feed_url(&settings.feeds),
        &cache_file,
        settings.refresh,
    )?;

    let list_path = workspace.listas_dir.join(mode.list_file_name());
    let list = render_list(&books, &workspace.books_link_prefix(), now);
    crate::fs::atomic_write_file(&list_path, &list)?;
    log::info!("wrote {} ({} books)", list_path.display(), books.len());

    let notes_updated = update_book_notes(&books, &workspace.books_dir)?;

    let pruned = cache::prune(&workspace.data_dir, mode, today)?;
    if pruned > 0 {
        log::debug!("pruned {} stale {} cache file(s)", pruned, mode);
    }

    Ok(ModeSummary {
        mode,
        list_path,
        books: books.len(),
        notes_updated,
    })
}
