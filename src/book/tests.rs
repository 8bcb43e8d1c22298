//! Tests for book conversion and naming.

use super::*;
use crate::test_support::{book, feed_item};

#[test]
fn test_from_item_maps_fields() {
    let item = feed_item(&[
        ("title", "Dune"),
        ("link", "https://www.goodreads.com/review/show/1"),
        ("book_id", "234225"),
        ("num_pages", "688"),
        ("author_name", "Frank Herbert"),
        ("isbn", " 0441013597 "),
        ("pubDate", "Fri, 30 Nov 2018 07:08:00 -0800"),
        ("average_rating", "4.27"),
        ("book_published", "1965"),
        ("book_description", "Set on the desert planet Arrakis."),
    ]);

    let book = Book::from_item(&item);

    assert_eq!(book.title, "Dune");
    assert_eq!(book.url, "https://www.goodreads.com/review/show/1");
    assert_eq!(book.book_id, "234225");
    assert_eq!(book.pages, Some(688));
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.isbn.as_deref(), Some("0441013597"));
    assert_eq!(book.read_day().as_deref(), Some("2018-11-30"));
    assert_eq!(book.rating, Some(4.27));
    assert_eq!(book.year, Some(1965));
    assert_eq!(book.description, "Set on the desert planet Arrakis.");
}

#[test]
fn test_from_item_blank_values_become_none() {
    let item = feed_item(&[
        ("title", "Untitled"),
        ("book_id", "1"),
        ("num_pages", ""),
        ("isbn", "   "),
        ("average_rating", "n/a"),
        ("book_published", ""),
    ]);

    let book = Book::from_item(&item);

    assert_eq!(book.pages, None);
    assert_eq!(book.isbn, None);
    assert_eq!(book.rating, None);
    assert_eq!(book.year, None);
    assert_eq!(book.read_date, None);
    assert_eq!(book.author, "");
}

#[test]
fn test_read_date_falls_back_to_date_added() {
    let item = feed_item(&[
        ("book_id", "1"),
        ("pubDate", "yesterday"),
        ("user_date_added", "Mon, 01 Jan 2024 10:00:00 +0000"),
        ("user_date_created", "Sun, 31 Dec 2023 10:00:00 +0000"),
    ]);

    let book = Book::from_item(&item);
    assert_eq!(book.read_day().as_deref(), Some("2024-01-01"));
}

#[test]
fn test_read_date_falls_back_to_date_created() {
    let item = feed_item(&[
        ("book_id", "1"),
        ("user_date_created", "Sun, 31 Dec 2023 23:30:00 -0500"),
    ]);

    let book = Book::from_item(&item);
    // The day is taken in the feed's own offset.
    assert_eq!(book.read_day().as_deref(), Some("2023-12-31"));
}

#[test]
fn test_note_name_drops_subtitle_and_series() {
    assert_eq!(book("Dune: Deluxe Edition").note_name(), "Dune");
    assert_eq!(
        book("The Fellowship of the Ring (The Lord of the Rings, #1)").note_name(),
        "The Fellowship of the Ring"
    );
    assert_eq!(book("A (B: C)").note_name(), "A");
}

#[test]
fn test_note_name_sanitizes_path_characters() {
    assert_eq!(book("Either/Or").note_name(), "Either-Or");
    assert_eq!(book("Back\\slash").note_name(), "Backslash");
    assert_eq!(book("  Padded  ").note_name(), "Padded");
}

#[test]
fn test_note_name_empty_when_title_is_all_parenthetical() {
    assert_eq!(book("(Untitled)").note_name(), "");
}

#[test]
fn test_note_fields_formats_author_and_date() {
    let mut b = book("Dune");
    b.author = "Frank Herbert".to_string();
    b.read_date = parse_date("Fri, 30 Nov 2018 07:08:00 -0800");
    b.pages = Some(688);

    let fields = b.note_fields().unwrap();

    assert_eq!(
        fields["author"],
        serde_yaml::Value::String("[[Autores/Frank Herbert|Frank Herbert]]".to_string())
    );
    assert_eq!(
        fields["read_date"],
        serde_yaml::Value::String("2018-11-30".to_string())
    );
    assert_eq!(fields["pages"], serde_yaml::Value::from(688u32));
    assert_eq!(fields["isbn"], serde_yaml::Value::Null);
    let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "author",
            "book_id",
            "description",
            "isbn",
            "pages",
            "rating",
            "read_date",
            "title",
            "url",
            "year"
        ]
    );
}

#[test]
fn test_book_json_roundtrip_keeps_offset() {
    let mut b = book("Dune");
    b.read_date = parse_date("Fri, 30 Nov 2018 07:08:00 -0800");

    let json = serde_json::to_string(&b).unwrap();
    let back: Book = serde_json::from_str(&json).unwrap();

    assert_eq!(back, b);
    assert!(json.contains("2018-11-30T07:08:00-08:00"));
}
