use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Durable home of the last-submitted query string. Read once at startup,
/// written only on explicit submit.
pub trait PreferencesStore {
    fn query_string(&self) -> Result<String>;
    fn save_query_string(&mut self, query: &str) -> Result<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct UserPreferences {
    #[serde(default)]
    query_string: String,
}

#[derive(Debug, Clone)]
pub struct JsonPreferencesStore {
    path: PathBuf,
}

impl JsonPreferencesStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<UserPreferences> {
        if !self.path.exists() {
            return Ok(UserPreferences::default());
        }

        let content = fs::read_to_string(&self.path).context("Failed to read preferences file")?;

        serde_json::from_str(&content).context("Failed to parse preferences file")
    }
}

impl PreferencesStore for JsonPreferencesStore {
    fn query_string(&self) -> Result<String> {
        Ok(self.load()?.query_string)
    }

    fn save_query_string(&mut self, query: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create preferences directory")?;
            }
        }

        let prefs = UserPreferences {
            query_string: query.to_string(),
        };
        let content =
            serde_json::to_string_pretty(&prefs).context("Failed to serialize preferences")?;

        fs::write(&self.path, content).context("Failed to write preferences file")
    }
}
