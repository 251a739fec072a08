//! JSON-file persistence for the catalog.
//!
//! Every load and save works on the whole collection. Before each overwrite the
//! current file is copied verbatim to the backup path, giving exactly one
//! generation of history. The write itself is not atomic; an interrupted save
//! can leave the primary file corrupt, in which case the backup is the way back.
//!
//! Only one process is expected to touch the file pair at a time. Nothing here
//! locks the files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Book;

use super::paths::StorePaths;

/// Reads and writes the library file, keeping a single backup copy.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    paths: StorePaths,
}

impl LibraryStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Load the catalog.
    ///
    /// Never fails: a missing, unreadable or malformed file all produce an
    /// empty catalog so the user can keep working.
    pub fn load(&self) -> Vec<Book> {
        let path = &self.paths.primary;
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No library file at {}, starting empty", path.display());
                return Vec::new();
            }
            Err(err) => {
                log::warn!(
                    "Could not read library file at {}: {err}; starting empty",
                    path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Book>>(&contents) {
            Ok(books) => {
                log::debug!("Loaded {} books from {}", books.len(), path.display());
                books
            }
            Err(err) => {
                log::warn!(
                    "Library file at {} is corrupt: {err}; starting empty",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    /// Back up the current file (if any) and replace it with `books`.
    pub fn save(&self, books: &[Book]) -> CatalogResult<()> {
        let primary = &self.paths.primary;
        if let Some(parent) = primary.parent() {
            ensure_directory_exists(parent)?;
        }

        self.backup_existing()?;

        let json = serde_json::to_string_pretty(books)?;
        fs::write(primary, json).map_err(|source| CatalogError::Write {
            path: primary.clone(),
            source,
        })?;

        log::debug!("Saved {} books to {}", books.len(), primary.display());
        Ok(())
    }

    /// Copy the primary file over the backup. A missing primary is not an
    /// error; there is simply nothing to back up yet.
    fn backup_existing(&self) -> CatalogResult<()> {
        let StorePaths { primary, backup } = &self.paths;
        if let Some(parent) = backup.parent() {
            ensure_directory_exists(parent)?;
        }

        match fs::copy(primary, backup) {
            Ok(_) => {
                log::debug!("Backed up {} to {}", primary.display(), backup.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound && !primary.exists() => {
                log::debug!("No existing library file, skipping backup");
                Ok(())
            }
            Err(source) => Err(CatalogError::Backup {
                path: backup.clone(),
                source,
            }),
        }
    }
}

fn ensure_directory_exists(path: &Path) -> CatalogResult<()> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| CatalogError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Created data directory: {}", path.display());
    Ok(())
}
