//! Persistence module split across logical submodules.

mod library;
mod paths;

pub use library::LibraryStore;
pub use paths::{StorePaths, DATA_DIR_ENV};
