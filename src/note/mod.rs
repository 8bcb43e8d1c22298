//! Book note model.
//!
//! Book notes live in the books directory and are owned by the user. The
//! sync only ever refreshes their YAML header and keeps the text. A note
//! written by this tool looks like:
//!
//! ```text
//! ---
//! author: '[[Autores/Frank Herbert|Frank Herbert]]'
//! title: Dune
//! ...
//! ---
//!
//! #libro
//!
//! ----
//!
//! Free-form notes about the book.
//! ```
//!
//! The header ends at the YAML document end marker (`...`). Everything after
//! the `----` separator line is the user's text. Notes that were never
//! touched by the sync keep their frontmatter fields (if any) and all of
//! their body as text.

use crate::error::{Result, SyncError};
use serde_yaml::Value;
use std::collections::BTreeMap;

mod io;

/// Tag line written between the header and the text.
pub const BOOK_MARKERS: &str = "#libro";

/// Line separating the generated part of a note from the user's text.
pub const TEXT_SEPARATOR: &str = "----";

/// YAML document end marker closing the header.
const HEADER_END: &str = "...";

/// A parsed book note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookNote {
    /// Header fields, kept sorted for deterministic output.
    pub header: BTreeMap<String, Value>,
    /// User text, without surrounding whitespace.
    pub text: String,
}

/// Parse header YAML, keeping only string keys of a top-level mapping.
///
/// Returns `None` when the YAML is invalid or not a mapping.
fn parse_header(yaml: &str) -> Option<BTreeMap<String, Value>> {
    let Ok(Value::Mapping(mapping)) = serde_yaml::from_str::<Value>(yaml) else {
        return None;
    };

    let mut header = BTreeMap::new();
    for (key, value) in mapping {
        if let Value::String(key) = key {
            header.insert(key, value);
        }
    }
    Some(header)
}

impl BookNote {
    /// Parse a note.
    ///
    /// Three shapes are understood: a note written by this tool (header
    /// closed by `...`, text after the separator), a note with ordinary
    /// `---` frontmatter, and a plain note with no header at all. Parsing
    /// never fails. A generated header that is not a YAML mapping is treated
    /// as empty; `---` frontmatter that is not a mapping is kept as text.
    pub fn parse(content: &str) -> Self {
        let normalized = content.replace("\r\n", "\n");
        let lines: Vec<&str> = normalized.lines().collect();

        if lines.first() != Some(&"---") {
            return Self::plain(&normalized);
        }

        let after_open = &lines[1..];
        let Some(close) = after_open
            .iter()
            .position(|line| *line == HEADER_END || *line == "---")
        else {
            return Self::plain(&normalized);
        };

        let header = parse_header(&after_open[..close].join("\n"));
        let rest = &after_open[close + 1..];

        let (header, text_lines) = if after_open[close] == HEADER_END {
            let text_lines = match rest.iter().position(|line| *line == TEXT_SEPARATOR) {
                Some(sep) => &rest[sep + 1..],
                None => rest,
            };
            (header.unwrap_or_default(), text_lines)
        } else {
            // Two `---` rules around prose are not frontmatter.
            match header {
                Some(header) => (header, rest),
                None => return Self::plain(&normalized),
            }
        };

        Self {
            header,
            text: text_lines.join("\n").trim().to_string(),
        }
    }

    fn plain(content: &str) -> Self {
        Self {
            header: BTreeMap::new(),
            text: content.trim().to_string(),
        }
    }

    /// Merge new header fields over the existing ones.
    ///
    /// New values win; keys only present in the old header are kept.
    pub fn merge_header(&mut self, fields: BTreeMap<String, Value>) {
        self.header.extend(fields);
    }

    /// Render the note with the given marker line.
    pub fn render(&self, markers: &str) -> Result<String> {
        let header_yaml = serde_yaml::to_string(&self.header)
            .map_err(|e| SyncError::Serialization(format!("note header: {}", e)))?;

        let mut output = String::new();
        output.push_str("---\n");
        output.push_str(&header_yaml);
        output.push_str(HEADER_END);
        output.push('\n');
        output.push_str("---\n\n");
        output.push_str(markers);
        output.push_str("\n\n");
        output.push_str(TEXT_SEPARATOR);
        output.push_str("\n\n");
        output.push_str(&self.text);
        output.push('\n');

        Ok(output)
    }
}
