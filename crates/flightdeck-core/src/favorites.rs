use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRoute {
    pub id: i64,
    pub departure_code: String,
    pub destination_code: String,
}

impl FavoriteRoute {
    /// Route membership is value equality of the code pair, never the id.
    pub fn matches(&self, departure_code: &str, destination_code: &str) -> bool {
        self.departure_code == departure_code && self.destination_code == destination_code
    }
}

/// Mutable set of favorite routes. `(departure, destination)` pairs are NOT
/// unique; duplicate inserts are accepted and `remove` clears every row
/// matching the pair. Mutations are durable before they return.
pub trait FavoritesStore {
    fn list(&self) -> Result<Vec<FavoriteRoute>>;
    fn add(&mut self, departure_code: &str, destination_code: &str) -> Result<FavoriteRoute>;
    fn remove(&mut self, departure_code: &str, destination_code: &str) -> Result<usize>;
}

#[derive(Debug, Clone)]
pub struct JsonFavoritesStore {
    path: PathBuf,
    routes: Vec<FavoriteRoute>,
}

impl JsonFavoritesStore {
    /// Opens the store, loading any existing file. A missing file is an
    /// empty store, not an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let routes = if path.exists() {
            let content = fs::read_to_string(&path).context("Failed to read favorites file")?;
            serde_json::from_str(&content).context("Failed to parse favorites file")?
        } else {
            Vec::new()
        };

        Ok(Self { path, routes })
    }

    fn persist(&self, routes: &[FavoriteRoute]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create favorites directory")?;
            }
        }

        let content = serde_json::to_string_pretty(routes).context("Failed to serialize favorites")?;

        fs::write(&self.path, content).context("Failed to write favorites file")
    }

    fn next_id(&self) -> i64 {
        self.routes.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

impl FavoritesStore for JsonFavoritesStore {
    fn list(&self) -> Result<Vec<FavoriteRoute>> {
        Ok(self.routes.clone())
    }

    fn add(&mut self, departure_code: &str, destination_code: &str) -> Result<FavoriteRoute> {
        let route = FavoriteRoute {
            id: self.next_id(),
            departure_code: departure_code.to_string(),
            destination_code: destination_code.to_string(),
        };

        // Commit in-memory state only once the file write has succeeded
        let mut routes = self.routes.clone();
        routes.push(route.clone());
        self.persist(&routes)?;
        self.routes = routes;

        log::debug!(
            "Favorite added — id={} route={}->{}",
            route.id,
            route.departure_code,
            route.destination_code
        );
        Ok(route)
    }

    fn remove(&mut self, departure_code: &str, destination_code: &str) -> Result<usize> {
        let routes: Vec<FavoriteRoute> = self
            .routes
            .iter()
            .filter(|r| !r.matches(departure_code, destination_code))
            .cloned()
            .collect();
        let removed = self.routes.len() - routes.len();

        if removed > 0 {
            self.persist(&routes)?;
            self.routes = routes;
        }

        log::debug!(
            "Favorite removed — route={}->{} rows={}",
            departure_code,
            destination_code,
            removed
        );
        Ok(removed)
    }
}
