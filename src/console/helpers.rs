use std::fmt::Display;

use anyhow::Error;
use crossterm::style::Stylize;

use crate::models::Book;

/// How a status line should look when the output is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    /// Confirmation after a successful change.
    Success,
    /// Lookup misses and other outcomes that are not failures.
    Notice,
    Failure,
    Heading,
}

/// Render `text` in `tone`. Without styling the text passes through untouched
/// so piped or redirected output stays plain.
pub(crate) fn paint(tone: Tone, text: impl Display, styled: bool) -> String {
    let text = text.to_string();
    if !styled {
        return text;
    }
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Notice => text.yellow().to_string(),
        Tone::Failure => text.red().to_string(),
        Tone::Heading => text.bold().to_string(),
    }
}

/// Numbered listing line, counting from 1.
pub(crate) fn book_line(position: usize, book: &Book) -> String {
    format!("{}. {book}", position + 1)
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn book_line_is_one_based() {
        let book = Book {
            title: "Emma".to_string(),
            author: "Austen".to_string(),
            year: 1815,
            genre: "Classic".to_string(),
            read: false,
        };
        assert_eq!(book_line(0, &book), "1. Emma by Austen (1815) - Classic - Unread");
    }

    #[test]
    fn styled_text_keeps_message_intact() {
        let rendered = paint(Tone::Success, "Book added successfully!", true);
        assert!(rendered.contains("Book added successfully!"));
        assert!(rendered.contains('\x1b'));
    }

    #[test]
    fn unstyled_text_is_plain() {
        for tone in [Tone::Success, Tone::Notice, Tone::Failure, Tone::Heading] {
            assert_eq!(paint(tone, "Book not found!", false), "Book not found!");
        }
    }

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = anyhow!("disk full").context("failed to save library");
        assert_eq!(surface_error(&err), "disk full");
    }
}
