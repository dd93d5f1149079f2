// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::catalog::{lookup_by_code, Airport, CatalogAccessor};
use crate::favorites::{FavoriteRoute, FavoritesStore};
use crate::flights::{build_flights, resolve_favorites, Flight};
use crate::prefs::PreferencesStore;
use crate::suggest::suggest;

/// Idle: no departure selected, the favorites view is what matters.
/// Browsing: a departure is selected and the flight list is live.
/// The tag is derived from the selected departure, so Browsing without a
/// departure cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Idle,
    Browsing,
}

/// Recoverable events surfaced to the presentation layer. Every notice is
/// also logged; none is fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    StoreError {
        operation: &'static str,
        message: String,
    },
    UnresolvedRoute {
        departure_code: String,
        destination_code: String,
    },
}

/// Owns the current query and selected departure, wires the derivation
/// engines to the three injected collaborators, and exposes the derived
/// views to the presentation layer. One logical owner per instance: every
/// entry point takes `&mut self`, so recomputation passes are serialized
/// and each pass works from snapshots taken at its start.
pub struct Coordinator<C, F, P> {
    catalog_accessor: C,
    favorites_store: F,
    preferences: P,

    query: String,
    departure: Option<Airport>,

    // Snapshots for the current pass
    catalog: Vec<Airport>,
    favorites: Vec<FavoriteRoute>,

    // Derived views, swapped wholesale
    suggestions: Vec<Airport>,
    flights: Vec<Flight>,
    favorite_flights: Vec<Flight>,

    revision: u64,
    notices: Vec<Notice>,
}

impl<C, F, P> Coordinator<C, F, P>
where
    C: CatalogAccessor,
    F: FavoritesStore,
    P: PreferencesStore,
{
    /// Starts Idle, with the query seeded from the preference store and the
    /// favorites view computed immediately.
    pub fn new(catalog_accessor: C, favorites_store: F, preferences: P) -> Self {
        let mut coordinator = Self {
            catalog: catalog_accessor.list_all(),
            catalog_accessor,
            favorites_store,
            preferences,
            query: String::new(),
            departure: None,
            favorites: Vec::new(),
            suggestions: Vec::new(),
            flights: Vec::new(),
            favorite_flights: Vec::new(),
            revision: 0,
            notices: Vec::new(),
        };

        match coordinator.preferences.query_string() {
            Ok(query) => coordinator.query = query,
            Err(e) => coordinator.report_store_error("load query preference", e),
        }

        coordinator.refresh_favorites();
        coordinator.recompute_suggestions();
        coordinator.recompute_favorite_flights();
        coordinator
    }

    // --- Mutation entry points ---

    /// Updates the live query and recomputes suggestions. The flight list is
    /// keyed solely by the selected departure and is not touched.
    pub fn update_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.recompute_suggestions();
    }

    /// Selects the departure (transitions to Browsing) and rebuilds the
    /// flight list from a fresh favorites snapshot.
    pub fn select_airport(&mut self, airport: Airport) {
        log::info!(
            "Departure selected — code={} name={}",
            airport.iata_code,
            airport.name
        );
        self.departure = Some(airport);
        self.refresh_favorites();
        self.recompute_flights();
    }

    /// Persists the current query string. State is unchanged either way.
    pub fn submit_query(&mut self) {
        if let Err(e) = self.preferences.save_query_string(&self.query) {
            self.report_store_error("save query preference", e);
        }
    }

    /// Toggles the favorite status of a flight's route. The direction is
    /// re-derived from a fresh store snapshot; the caller-supplied flag may
    /// be stale and is ignored. Exactly one of add/remove is applied.
    pub fn toggle_favorite(&mut self, flight: &Flight) {
        let (dep, dest) = flight.route();

        if !self.refresh_favorites() {
            // Store unreadable: applying either mutation could double-apply
            return;
        }
        let currently_favorite = self.favorites.iter().any(|r| r.matches(dep, dest));

        let outcome = if currently_favorite {
            self.favorites_store.remove(dep, dest).map(|_| ())
        } else {
            self.favorites_store.add(dep, dest).map(|_| ())
        };
        if let Err(e) = outcome {
            self.report_store_error("toggle favorite", e);
        }

        self.refresh_favorites();
        self.recompute_flights();
        self.recompute_favorite_flights();
    }

    /// Re-reads the catalog from the accessor and recomputes every derived
    /// view. The catalog is read-only at runtime but loadable.
    pub fn reload_catalog(&mut self) {
        self.catalog = self.catalog_accessor.list_all();
        self.refresh_favorites();
        self.recompute_suggestions();
        self.recompute_flights();
        self.recompute_favorite_flights();
    }

    // --- Derived views ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> ViewMode {
        if self.departure.is_some() {
            ViewMode::Browsing
        } else {
            ViewMode::Idle
        }
    }

    pub fn selected_departure(&self) -> Option<&Airport> {
        self.departure.as_ref()
    }

    pub fn suggestions(&self) -> &[Airport] {
        &self.suggestions
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn favorite_flights(&self) -> &[Flight] {
        &self.favorite_flights
    }

    /// Bumped on every recomputation pass. A consumer holding view data from
    /// an older revision is holding a superseded snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drains accumulated notices for user-visible reporting.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Point lookup for the presentation layer; the departure handed to
    /// `select_airport` may come from here rather than the suggestion list.
    pub fn find_by_code(&self, code: &str) -> Option<Airport> {
        self.catalog_accessor.find_by_code(code)
    }

    pub fn find_by_id(&self, id: i64) -> Option<Airport> {
        self.catalog_accessor.find_by_id(id)
    }

    // --- Recomputation passes ---

    fn recompute_suggestions(&mut self) {
        self.suggestions = suggest(&self.query, &self.catalog);
        self.revision += 1;
    }

    fn recompute_flights(&mut self) {
        self.flights = match &self.departure {
            Some(departure) => build_flights(departure, &self.catalog, &self.favorites),
            None => Vec::new(),
        };
        self.revision += 1;
    }

    fn recompute_favorite_flights(&mut self) {
        let resolution = resolve_favorites(&self.favorites, |code| {
            lookup_by_code(&self.catalog, code).cloned()
        });

        for route in &resolution.skipped {
            self.notices.push(Notice::UnresolvedRoute {
                departure_code: route.departure_code.clone(),
                destination_code: route.destination_code.clone(),
            });
        }

        self.favorite_flights = resolution.flights;
        self.revision += 1;
    }

    /// Replaces the favorites snapshot from the store. On failure the
    /// last-known-good snapshot stays in place and a notice is raised.
    fn refresh_favorites(&mut self) -> bool {
        match self.favorites_store.list() {
            Ok(favorites) => {
                self.favorites = favorites;
                true
            }
            Err(e) => {
                self.report_store_error("list favorites", e);
                false
            }
        }
    }

    fn report_store_error(&mut self, operation: &'static str, err: anyhow::Error) {
        log::warn!("Store operation failed — operation={} error={:#}", operation, err);
        self.notices.push(Notice::StoreError {
            operation,
            message: format!("{:#}", err),
        });
    }
}
