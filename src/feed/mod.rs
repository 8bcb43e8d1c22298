//! Shelf feed fetching.
//!
//! A shelf is exposed as a paginated RSS feed. Pages are requested with a
//! `page` query parameter, starting at 1, until a page comes back with no
//! books. There are no retries: a failed request fails the whole shelf.

mod parser;


use crate::book::Book;
use crate::error::{Result, SyncError};
use std::time::Duration;

pub use parser::{html_to_text, parse_books, parse_items};

/// Upper bound on pages fetched per shelf.
pub const MAX_PAGES: u32 = 100;

/// Browser-like agent string; the feed endpoint rejects unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";

/// Something that can return the raw body of one feed page.
pub trait FeedSource {
    fn fetch_page(&self, url: &str, page: u32) -> Result<String>;
}

/// Blocking HTTP feed source.
pub struct HttpFeed {
    agent: ureq::Agent,
}

impl HttpFeed {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Default for HttpFeed {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl FeedSource for HttpFeed {
    fn fetch_page(&self, url: &str, page: u32) -> Result<String> {
        let fetch_err = |message: String| SyncError::Fetch {
            url: url.to_string(),
            message,
        };

        let response = self
            .agent
            .get(url)
            .query("page", &page.to_string())
            .call()
            .map_err(|e| fetch_err(e.to_string()))?;

        response
            .into_string()
            .map_err(|e| fetch_err(format!("failed to read response body: {}", e)))
    }
}

/// Fetch every page of a shelf feed.
pub fn fetch_shelf(source: &dyn FeedSource, url: &str) -> Result<Vec<Book>> {
    let mut books = Vec::new();

    for page in 1..=MAX_PAGES {
        log::debug!("fetching page {} of {}", page, url);
        let body = source.fetch_page(url, page)?;
        let page_books = parse_books(&body)?;
        if page_books.is_empty() {
            log::debug!("page {} is empty, stopping", page);
            return Ok(books);
        }
        books.extend(page_books);
    }

    log::warn!(
        "stopped after {} pages of {}; the shelf may be truncated",
        MAX_PAGES,
        url
    );
    Ok(books)
}
