//! Book model.
//!
//! A [`Book`] is one entry of a shelf feed. It is built from the flattened
//! `<item>` fields of the RSS document, cached as JSON, and rendered into the
//! YAML header of the matching book note.

use crate::error::{Result, SyncError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[cfg(test)]
mod tests;

/// One book from a shelf feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub url: String,
    pub book_id: String,
    pub description: String,
    pub pages: Option<u32>,
    pub author: String,
    pub isbn: Option<String>,
    /// When the book was read (or shelved, for the want shelf).
    pub read_date: Option<DateTime<FixedOffset>>,
    /// Average community rating.
    pub rating: Option<f64>,
    /// Original publication year.
    pub year: Option<i32>,
}

/// Header fields written into a book note.
#[derive(Serialize)]
struct NoteHeader<'a> {
    title: &'a str,
    url: &'a str,
    book_id: &'a str,
    description: &'a str,
    pages: Option<u32>,
    author: String,
    isbn: Option<&'a str>,
    read_date: Option<String>,
    rating: Option<f64>,
    year: Option<i32>,
}

impl Book {
    /// Build a book from the fields of one feed item.
    ///
    /// Missing fields are treated as empty; numbers and dates that do not
    /// parse become `None`.
    pub fn from_item(item: &HashMap<String, String>) -> Self {
        let field = |name: &str| item.get(name).map(String::as_str).unwrap_or("");

        let isbn = field("isbn").trim();
        let read_date = ["pubDate", "user_date_added", "user_date_created"]
            .into_iter()
            .find_map(|name| parse_date(field(name)));

        Self {
            title: field("title").to_string(),
            url: field("link").to_string(),
            book_id: field("book_id").to_string(),
            description: field("book_description").to_string(),
            pages: field("num_pages").trim().parse().ok(),
            author: field("author_name").to_string(),
            isbn: (!isbn.is_empty()).then(|| isbn.to_string()),
            read_date,
            rating: field("average_rating").trim().parse().ok(),
            year: field("book_published").trim().parse().ok(),
        }
    }

    /// File stem of the book note in the books directory.
    ///
    /// The title is cut at the first `:` and then at the first `(`, so
    /// subtitles and series markers are dropped.
    pub fn note_name(&self) -> String {
        let mut name = self.title.as_str();
        for delimiter in [':', '('] {
            name = name.split_once(delimiter).map_or(name, |(head, _)| head);
        }

        name.chars()
            .filter_map(|c| match c {
                ':' | '\\' => None,
                '/' => Some('-'),
                c => Some(c),
            })
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Date part of `read_date`, as `YYYY-MM-DD`.
    pub fn read_day(&self) -> Option<String> {
        self.read_date
            .map(|d| d.date_naive().format("%Y-%m-%d").to_string())
    }

    /// Header fields for the book note.
    ///
    /// The author becomes a wiki link and the read date is reduced to a day.
    pub fn note_fields(&self) -> Result<BTreeMap<String, serde_yaml::Value>> {
        let header = NoteHeader {
            title: &self.title,
            url: &self.url,
            book_id: &self.book_id,
            description: &self.description,
            pages: self.pages,
            author: format!("[[Autores/{0}|{0}]]", self.author),
            isbn: self.isbn.as_deref(),
            read_date: self.read_day(),
            rating: self.rating,
            year: self.year,
        };

        let value = serde_yaml::to_value(&header)
            .map_err(|e| SyncError::Serialization(format!("book header: {}", e)))?;

        let mut fields = BTreeMap::new();
        if let serde_yaml::Value::Mapping(mapping) = value {
            for (key, value) in mapping {
                if let serde_yaml::Value::String(key) = key {
                    fields.insert(key, value);
                }
            }
        }
        Ok(fields)
    }
}

/// Parse an RFC 2822 feed date, e.g. `Fri, 30 Nov 2018 07:08:00 -0800`.
pub fn parse_date(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(text.trim()).ok()
}
