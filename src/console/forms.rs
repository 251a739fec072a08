use std::io::{BufRead, Write};

use anyhow::Result;

use crate::models::{parse_year, NewBook};

use super::helpers::Tone;
use super::terminal::Console;

/// Prompt sequence for a new book. The year prompt repeats until it gets a
/// whole number, so a bad year never reaches the record.
pub(crate) struct BookForm;

impl BookForm {
    /// Collect the five fields. `None` means input ended part-way through and
    /// nothing should be added.
    pub(crate) fn collect<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> Result<Option<NewBook>> {
        let Some(title) = console.prompt("Enter the book title: ")? else {
            return Ok(None);
        };
        let Some(author) = console.prompt("Enter the author: ")? else {
            return Ok(None);
        };
        let Some(year) = Self::prompt_year(console)? else {
            return Ok(None);
        };
        let Some(genre) = console.prompt("Enter the genre: ")? else {
            return Ok(None);
        };
        let Some(read) = console.prompt("Have you read this book? (yes/no): ")? else {
            return Ok(None);
        };

        Ok(Some(NewBook {
            title,
            author,
            year,
            genre,
            read,
        }))
    }

    fn prompt_year<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<String>> {
        loop {
            let Some(raw) = console.prompt("Enter the publication year: ")? else {
                return Ok(None);
            };
            match parse_year(&raw) {
                Ok(_) => return Ok(Some(raw)),
                Err(err) => {
                    log::debug!("{err}");
                    console.tell(Tone::Failure, "Invalid input. Please enter a valid year.")?;
                }
            }
        }
    }
}
