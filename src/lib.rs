//! Core library surface for the Personal Library Manager.
//!
//! The modules exposed here are small on purpose so the `bin` target and any
//! external tooling reuse the same pieces: the book model, the JSON store with
//! its single backup, the catalog operations, and the console front-end.
pub mod catalog;
pub mod console;
pub mod error;
pub mod models;
pub mod store;

/// Operations over the in-memory catalog.
pub use catalog::{
    add_book, library_stats, remove_book, search_books, LibraryStats, RemoveOutcome, SearchField,
};

/// The interactive application entry point and state container.
pub use console::{run_app, App, Console, MenuChoice};

pub use error::{CatalogError, CatalogResult};
pub use models::{parse_read_status, parse_year, Book, NewBook};
pub use store::{LibraryStore, StorePaths};
