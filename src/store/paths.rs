use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{CatalogError, CatalogResult};

/// Folder name used beneath the user's home directory for application data.
pub(crate) const DATA_DIR_NAME: &str = ".personal-library-manager";
/// JSON file holding the catalog.
pub(crate) const LIBRARY_FILE_NAME: &str = "library.json";
/// Copy of the catalog as it was before the most recent save.
pub(crate) const BACKUP_FILE_NAME: &str = "library_backup.json";
/// Environment variable that points the data directory somewhere else.
pub const DATA_DIR_ENV: &str = "LIBRARY_MANAGER_DIR";

/// Locations of the primary library file and its single backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub primary: PathBuf,
    pub backup: PathBuf,
}

impl StorePaths {
    /// Pair two explicit paths.
    pub fn new(primary: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            backup: backup.into(),
        }
    }

    /// Use the conventional file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(LIBRARY_FILE_NAME), dir.join(BACKUP_FILE_NAME))
    }

    /// Resolve the data directory: `LIBRARY_MANAGER_DIR` when set and
    /// non-empty, otherwise a dot folder in the user's home.
    pub fn resolve() -> CatalogResult<Self> {
        Ok(Self::in_dir(data_dir(env::var_os(DATA_DIR_ENV))?))
    }
}

fn data_dir(override_dir: Option<std::ffi::OsString>) -> CatalogResult<PathBuf> {
    if let Some(dir) = override_dir.filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base_dirs = BaseDirs::new().ok_or_else(|| CatalogError::DataDir {
        reason: "could not locate home directory".to_string(),
    })?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
