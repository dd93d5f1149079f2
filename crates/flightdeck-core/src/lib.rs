pub mod catalog;
pub mod coordinator;
pub mod favorites;
pub mod flights;
pub mod prefs;
pub mod suggest;

use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

pub const CATALOG_FILE: &str = "airports.csv";
pub const FAVORITES_FILE: &str = "favorites.json";
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Error, Debug)]
pub enum FlightDeckError {
    #[error("Data directory not found")]
    RootNotFound,
    #[error("Invalid data directory: {0}")]
    InvalidRoot(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The on-disk home of one FlightDeck instance: the airport catalog plus the
/// mutable favorites and preferences files, all under a single directory.
pub struct DataRoot {
    pub root: PathBuf,
}

impl DataRoot {
    /// Tries to create a new data root from a given path.
    /// Validates that the directory exists and carries an airport catalog.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, FlightDeckError> {
        let root = path.as_ref().to_path_buf();

        if !root.exists() {
            return Err(FlightDeckError::RootNotFound);
        }

        if !root.join(CATALOG_FILE).exists() {
            return Err(FlightDeckError::InvalidRoot(format!(
                "Missing {} in {}",
                CATALOG_FILE,
                root.display()
            )));
        }

        Ok(Self { root })
    }

    /// Creates the directory (and parents) without requiring a catalog yet.
    /// Used when seeding a fresh data root.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, FlightDeckError> {
        let root = path.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.root.join(FAVORITES_FILE)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    /// Attempts to find the data root automatically.
    /// Checks `FLIGHTDECK_HOME`, then the platform data directory.
    pub fn try_find() -> Option<PathBuf> {
        if let Ok(home) = env::var("FLIGHTDECK_HOME") {
            let path = PathBuf::from(home);
            if path.join(CATALOG_FILE).exists() {
                return Some(path);
            }
        }

        if let Some(dirs) = directories::ProjectDirs::from("org", "startuz", "FlightDeck") {
            let path = dirs.data_dir().to_path_buf();
            if path.join(CATALOG_FILE).exists() {
                return Some(path);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_root_validation() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        // Empty directory is rejected
        assert!(matches!(
            DataRoot::new(root),
            Err(FlightDeckError::InvalidRoot(_))
        ));

        // Missing directory is rejected
        assert!(matches!(
            DataRoot::new(root.join("nope")),
            Err(FlightDeckError::RootNotFound)
        ));

        fs::write(root.join(CATALOG_FILE), "id,iata_code,name,passengers\n").unwrap();

        let data_root = DataRoot::new(root).unwrap();
        assert_eq!(data_root.catalog_path(), root.join("airports.csv"));
        assert_eq!(data_root.favorites_path(), root.join("favorites.json"));
    }
}
