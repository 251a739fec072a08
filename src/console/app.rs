use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::catalog::{
    add_book, library_stats, remove_book, search_books, RemoveOutcome, SearchField,
};
use crate::models::Book;
use crate::store::LibraryStore;

use super::forms::BookForm;
use super::helpers::{book_line, surface_error, Tone};
use super::terminal::Console;

/// The six menu entries, in the order they are numbered on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    Display,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::Display,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    pub fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Display),
            "5" => Some(MenuChoice::Statistics),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a book",
            MenuChoice::Remove => "Remove a book",
            MenuChoice::Search => "Search for a book",
            MenuChoice::Display => "Display all books",
            MenuChoice::Statistics => "Display statistics",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Owns the catalog for the lifetime of the session along with the store that
/// persists it and the console used to talk to the user.
pub struct App<R, W> {
    store: LibraryStore,
    books: Vec<Book>,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(store: LibraryStore, books: Vec<Book>, console: Console<R, W>) -> Self {
        Self {
            store,
            books,
            console,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub(crate) fn console(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub(crate) fn show_menu(&mut self) -> Result<()> {
        self.console.say("")?;
        self.console
            .tell(Tone::Heading, "Welcome to your Personal Library Manager!")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            self.console.say(format!("{}. {}", index + 1, choice.label()))?;
        }
        Ok(())
    }

    /// Dispatch one raw menu selection. Returns `true` when the session is
    /// over.
    pub fn handle_selection(&mut self, selection: &str) -> Result<bool> {
        match MenuChoice::parse(selection) {
            Some(choice) => self.handle_choice(choice),
            None => {
                self.console
                    .tell(Tone::Notice, "Invalid choice, please try again.")?;
                Ok(false)
            }
        }
    }

    pub fn handle_choice(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Add => self.add()?,
            MenuChoice::Remove => self.remove()?,
            MenuChoice::Search => self.search()?,
            MenuChoice::Display => self.display()?,
            MenuChoice::Statistics => self.statistics()?,
            MenuChoice::Exit => {
                self.exit()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Final save. Unlike the per-operation saves, a failure here ends the
    /// program with an error since there is no later chance to persist.
    pub(crate) fn exit(&mut self) -> Result<()> {
        self.store
            .save(&self.books)
            .context("failed to save library on exit")?;
        self.console
            .tell(Tone::Success, "Library saved to file. Goodbye!")
    }

    fn add(&mut self) -> Result<()> {
        let Some(draft) = BookForm::collect(&mut self.console)? else {
            return Ok(());
        };
        let book = draft
            .into_book()
            .context("book form produced an invalid year")?;

        match add_book(&self.store, &mut self.books, book) {
            Ok(()) => self.console.tell(Tone::Success, "Book added successfully!"),
            Err(err) => {
                self.report_error(anyhow::Error::from(err).context("failed to save library"))
            }
        }
    }

    fn remove(&mut self) -> Result<()> {
        let Some(title) = self
            .console
            .prompt("Enter the title of the book to remove: ")?
        else {
            return Ok(());
        };

        match remove_book(&self.store, &mut self.books, &title) {
            Ok(RemoveOutcome::Removed(_)) => {
                self.console.tell(Tone::Success, "Book removed successfully!")
            }
            Ok(RemoveOutcome::NotFound) => self.console.tell(Tone::Notice, "Book not found!"),
            Err(err) => {
                self.report_error(anyhow::Error::from(err).context("failed to save library"))
            }
        }
    }

    fn search(&mut self) -> Result<()> {
        self.console.say("Search by: \n1. Title \n2. Author")?;
        let Some(choice) = self.console.prompt("Enter your choice: ")? else {
            return Ok(());
        };
        let Some(term) = self.console.prompt("Enter search term: ")? else {
            return Ok(());
        };

        let results = search_books(&self.books, SearchField::from_choice(&choice), &term);
        if results.is_empty() {
            return self.console.tell(Tone::Notice, "No matching books found.");
        }
        for (position, book) in results.into_iter().enumerate() {
            self.console.say(book_line(position, book))?;
        }
        Ok(())
    }

    fn display(&mut self) -> Result<()> {
        if self.books.is_empty() {
            return self.console.tell(Tone::Notice, "Your library is empty.");
        }

        self.console.tell(Tone::Heading, "Your Library:")?;
        for (position, book) in self.books.iter().enumerate() {
            self.console.say(book_line(position, book))?;
        }
        Ok(())
    }

    fn statistics(&mut self) -> Result<()> {
        let stats = library_stats(&self.books);
        let Some(percentage) = stats.read_percentage() else {
            return self.console.tell(Tone::Notice, "No books in the library.");
        };

        self.console.say(format!("Total books: {}", stats.total))?;
        self.console
            .say(format!("Read: {}, Unread: {}", stats.read, stats.unread()))?;
        self.console
            .say(format!("Percentage read: {percentage:.2}%"))
    }

    /// Tell the user a change could not be saved and keep the session alive.
    /// The in-memory catalog already reflects the change and is written again
    /// by the next successful save.
    fn report_error(&mut self, err: anyhow::Error) -> Result<()> {
        log::error!("{err:#}");
        self.console
            .tell(Tone::Failure, format!("Error: {}", surface_error(&err)))
    }
}
