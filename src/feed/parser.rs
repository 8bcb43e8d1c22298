//! RSS parsing for shelf feeds.
//!
//! Each `<item>` is flattened into element name → text. Nested elements are
//! not kept apart: `<book><num_pages>` simply yields a `num_pages` field.
//! Element text is trimmed and then treated as HTML, since descriptions and
//! titles arrive as escaped or CDATA-wrapped markup.

use crate::book::Book;
use crate::error::{Result, SyncError};
use quick_xml::Reader;
use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::Event;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid tag regex"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[A-Za-z][A-Za-z0-9]*);").expect("Invalid entity regex")
});

/// Parse one feed page into books, in feed order.
///
/// Items without a `book_id` are skipped.
pub fn parse_books(xml: &str) -> Result<Vec<Book>> {
    Ok(parse_items(xml)?
        .iter()
        .filter(|item| item.get("book_id").is_some_and(|id| !id.is_empty()))
        .map(Book::from_item)
        .collect())
}

/// Flatten every `<item>` of the document into a field map.
pub fn parse_items(xml: &str) -> Result<Vec<HashMap<String, String>>> {
    let mut reader = Reader::from_str(xml);
    let mut items = Vec::new();
    let mut item: Option<HashMap<String, String>> = None;
    let mut current: Option<String> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| SyncError::Feed(format!("at byte {}: {}", reader.buffer_position(), e)))?;

        match event {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                if name == "item" {
                    item = Some(HashMap::new());
                    current = None;
                } else if item.is_some() {
                    current = Some(name);
                }
            }
            Event::Text(text) => {
                if let (Some(fields), Some(name)) = (item.as_mut(), current.as_ref()) {
                    let raw = match text.unescape() {
                        Ok(s) => s.into_owned(),
                        Err(_) => String::from_utf8_lossy(&text).into_owned(),
                    };
                    fields.entry(name.clone()).or_default().push_str(&raw);
                }
            }
            Event::CData(data) => {
                if let (Some(fields), Some(name)) = (item.as_mut(), current.as_ref()) {
                    fields
                        .entry(name.clone())
                        .or_default()
                        .push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(end) => {
                if end.name().as_ref() == b"item" {
                    if let Some(fields) = item.take() {
                        items.push(fields);
                    }
                    current = None;
                } else if let (Some(fields), Some(name)) = (item.as_mut(), current.take()) {
                    let value = fields.remove(&name).unwrap_or_default();
                    fields.insert(name, html_to_text(value.trim()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if item.is_some() {
        return Err(SyncError::Feed("unterminated <item> element".to_string()));
    }

    Ok(items)
}

/// Strip tags and decode HTML entities.
///
/// Each entity is decoded on its own; a bare `&` or an unknown entity is
/// left as written.
pub fn html_to_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    ENTITY_RE
        .replace_all(&stripped, |caps: &Captures| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Resolve the body of one entity reference (`amp`, `#39`, `#x27`).
fn decode_entity(entity: &str) -> Option<String> {
    let code = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse().ok()
    } else {
        return resolve_html5_entity(entity).map(str::to_string);
    };

    code.and_then(char::from_u32).map(String::from)
}
