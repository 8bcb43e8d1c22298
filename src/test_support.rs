use crate::book::Book;
use crate::config::{ConfigSource, FeedConfig, Settings, Workspace};
use crate::error::{Result, SyncError};
use crate::feed::FeedSource;
use std::cell::RefCell;
use std::collections::HashMap;
use tempfile::TempDir;

pub(crate) const READ_URL: &str = "https://feed/read";
pub(crate) const WANT_URL: &str = "https://feed/want";

/// In-memory feed keyed by (url, page).
///
/// Unknown pages come back as an empty channel unless a repeating body is
/// set, so pagination ends naturally.
pub(crate) struct FakeFeed {
    pages: HashMap<(String, u32), Option<String>>,
    repeating: HashMap<String, String>,
    requests: RefCell<Vec<(String, u32)>>,
}

impl FakeFeed {
    pub(crate) fn new() -> Self {
        Self {
            pages: HashMap::new(),
            repeating: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_page(mut self, url: &str, page: u32, body: String) -> Self {
        self.pages.insert((url.to_string(), page), Some(body));
        self
    }

    pub(crate) fn with_failure(mut self, url: &str, page: u32) -> Self {
        self.pages.insert((url.to_string(), page), None);
        self
    }

    pub(crate) fn repeating(mut self, url: &str, body: String) -> Self {
        self.repeating.insert(url.to_string(), body);
        self
    }

    pub(crate) fn requests(&self) -> Vec<(String, u32)> {
        self.requests.borrow().clone()
    }
}

impl FeedSource for FakeFeed {
    fn fetch_page(&self, url: &str, page: u32) -> Result<String> {
        self.requests.borrow_mut().push((url.to_string(), page));

        match self.pages.get(&(url.to_string(), page)) {
            Some(Some(body)) => Ok(body.clone()),
            Some(None) => Err(SyncError::Fetch {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
            None => Ok(self
                .repeating
                .get(url)
                .cloned()
                .unwrap_or_else(|| rss_page(&[]))),
        }
    }
}

/// Wrap items in an RSS channel.
pub(crate) fn rss_page(items: &[&str]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\"><channel><title>shelf</title>{}</channel></rss>\n",
        items.concat()
    )
}

/// A minimal read item with a fixed read date.
pub(crate) fn rss_item(book_id: &str, title: &str) -> String {
    format!(
        "<item><book_id>{}</book_id><title>{}</title><author_name>Ann Author</author_name>\
         <num_pages>300</num_pages><pubDate>Fri, 30 Nov 2018 07:08:00 -0800</pubDate></item>",
        book_id, title
    )
}

/// A book with only a title and id set.
pub(crate) fn book(title: &str) -> Book {
    Book {
        title: title.to_string(),
        url: String::new(),
        book_id: "1".to_string(),
        description: String::new(),
        pages: None,
        author: String::new(),
        isbn: None,
        read_date: None,
        rating: None,
        year: None,
    }
}

pub(crate) fn feed_item(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A temporary vault with `Listas/`, `Libros/` and `data/`.
pub(crate) struct Vault {
    _dir: TempDir,
    pub(crate) settings: Settings,
}

pub(crate) fn vault() -> Vault {
    let dir = TempDir::new().unwrap();
    let workspace = Workspace {
        listas_dir: dir.path().join("Listas"),
        books_dir: dir.path().join("Libros"),
        data_dir: dir.path().join("data"),
    };
    std::fs::create_dir(&workspace.listas_dir).unwrap();
    std::fs::create_dir(&workspace.books_dir).unwrap();
    std::fs::create_dir(&workspace.data_dir).unwrap();

    let settings = Settings {
        feeds: FeedConfig {
            read_url: READ_URL.to_string(),
            want_url: WANT_URL.to_string(),
        },
        source: ConfigSource::Flag,
        workspace,
        refresh: false,
    };

    Vault {
        _dir: dir,
        settings,
    }
}
