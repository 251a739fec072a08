//! Error types shared by the catalog and the persistence store.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures the library surfaces to its callers. Load-time problems never show
/// up here: a missing or corrupt library file simply yields an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Publication year was not a whole number.
    #[error("invalid publication year {input:?}: expected a whole number")]
    InvalidYear { input: String },

    /// Could not write the library file.
    #[error("failed to write library file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Could not copy the previous library file to the backup location.
    #[error("failed to back up library file to {path}: {source}")]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Could not create the directory holding the library files.
    #[error("failed to create data directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the catalog to JSON failed.
    #[error("failed to serialize library: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No home directory and no override, so there is nowhere to keep data.
    #[error("could not locate a data directory: {reason}")]
    DataDir { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_year_message_mentions_input() {
        let err = CatalogError::InvalidYear {
            input: "abc".to_string(),
        };
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn write_error_mentions_path() {
        let err = CatalogError::Write {
            path: PathBuf::from("/tmp/library.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/library.json"));
        assert!(message.contains("denied"));
    }
}
