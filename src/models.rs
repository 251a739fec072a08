//! Domain models that mirror the records stored in the library file and get
//! passed throughout the console front-end. These types stay light-weight data
//! holders so other layers can focus on presentation and persistence logic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One catalog entry. The field names double as the JSON keys on disk, so
/// renaming any of them breaks existing library files.
pub struct Book {
    /// Title shown in listings. Also the de facto key for removal, compared
    /// case-insensitively. Nothing enforces uniqueness.
    pub title: String,
    /// Author used both for display and for search.
    pub author: String,
    /// Publication year. Kept signed so ancient works can be catalogued.
    pub year: i64,
    /// Free-form genre text.
    pub genre: String,
    /// Whether the owner has finished the book.
    pub read: bool,
}

impl Book {
    /// Human-readable read-status label used by every listing.
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }
}

/// Raw text collected for a new book before it is validated. The console fills
/// one of these from prompts; other callers can build it directly.
#[derive(Debug, Clone, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: String,
}

impl NewBook {
    /// Validate the draft and produce a typed record. Only the year can fail.
    pub fn into_book(self) -> CatalogResult<Book> {
        let year = parse_year(&self.year)?;
        Ok(Book {
            title: self.title,
            author: self.author,
            year,
            genre: self.genre,
            read: parse_read_status(&self.read),
        })
    }
}

/// Parse a publication year, tolerating surrounding whitespace.
pub fn parse_year(input: &str) -> CatalogResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CatalogError::InvalidYear {
            input: input.to_string(),
        })
}

/// Only an explicit "yes" (any case) counts as read; "no", blanks and typos
/// all mean unread.
pub fn parse_read_status(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}
