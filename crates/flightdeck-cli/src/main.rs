// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::Result;
use clap::{Parser, Subcommand};
use flightdeck_core::catalog::AirportCatalog;
use flightdeck_core::coordinator::{Coordinator, Notice};
use flightdeck_core::favorites::JsonFavoritesStore;
use flightdeck_core::prefs::JsonPreferencesStore;
use flightdeck_core::DataRoot;
use std::path::PathBuf;

const STARTER_CATALOG: &str = include_str!("../assets/airports.csv");

type AppCoordinator = Coordinator<AirportCatalog, JsonFavoritesStore, JsonPreferencesStore>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the data directory
    #[arg(short, long, env = "FLIGHTDECK_HOME")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a data directory with the starter catalog
    Init,
    /// List the full catalog, busiest first
    Airports,
    /// Suggest airports for a query
    Search {
        query: String,
        /// Persist the query string for the next session
        #[arg(long)]
        save: bool,
    },
    /// List every flight from a departure airport
    Flights { code: String },
    /// Toggle a favorite route
    Favorite {
        departure: String,
        destination: String,
    },
    /// List favorite routes as full flights
    Favorites,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root_path = match cli.data_dir {
        Some(path) => path,
        None => DataRoot::try_find().ok_or_else(|| {
            anyhow::anyhow!("Could not find a data directory. Please specify with --data-dir.")
        })?,
    };

    if let Commands::Init = cli.command {
        let root = DataRoot::create(&root_path)?;
        if root.catalog_path().exists() {
            println!("Catalog already present in {:?}", root.root);
        } else {
            std::fs::write(root.catalog_path(), STARTER_CATALOG)?;
            println!("Seeded starter catalog into {:?}", root.root);
        }
        return Ok(());
    }

    let root = DataRoot::new(&root_path)?;
    let catalog = AirportCatalog::load(root.catalog_path())?;
    let favorites = JsonFavoritesStore::open(root.favorites_path())?;
    let preferences = JsonPreferencesStore::new(root.preferences_path());
    let mut coordinator = Coordinator::new(catalog, favorites, preferences);

    match &cli.command {
        Commands::Init => {} // handled before the stores were opened
        Commands::Airports => {
            coordinator.update_query("");
            for airport in coordinator.suggestions() {
                println!(
                    "{}  {:>10}  {}",
                    airport.iata_code, airport.passengers, airport.name
                );
            }
        }
        Commands::Search { query, save } => {
            coordinator.update_query(query);
            if coordinator.suggestions().is_empty() {
                println!("No airports match '{}'", query);
            }
            for airport in coordinator.suggestions() {
                println!("{}  {}", airport.iata_code, airport.name);
            }
            if *save {
                coordinator.submit_query();
            }
        }
        Commands::Flights { code } => {
            let departure = coordinator
                .find_by_code(code)
                .ok_or_else(|| anyhow::anyhow!("No airport with code '{}'", code))?;
            println!("Flights from {} ({})", departure.iata_code, departure.name);
            coordinator.select_airport(departure);
            for flight in coordinator.flights() {
                let marker = if flight.is_favorite { "[*]" } else { "[ ]" };
                println!(
                    "{} {} -> {}  {}",
                    marker,
                    flight.departure.iata_code,
                    flight.destination.iata_code,
                    flight.destination.name
                );
            }
        }
        Commands::Favorite {
            departure,
            destination,
        } => {
            let airport = coordinator
                .find_by_code(departure)
                .ok_or_else(|| anyhow::anyhow!("No airport with code '{}'", departure))?;
            coordinator.select_airport(airport);

            let flight = coordinator
                .flights()
                .iter()
                .find(|f| f.destination.iata_code.eq_ignore_ascii_case(destination))
                .cloned()
                .ok_or_else(|| {
                    anyhow::anyhow!("No flight from {} to {}", departure, destination)
                })?;

            coordinator.toggle_favorite(&flight);

            let now_favorite = coordinator
                .flights()
                .iter()
                .find(|f| f.destination.iata_code == flight.destination.iata_code)
                .map(|f| f.is_favorite)
                .unwrap_or(false);
            if now_favorite {
                println!(
                    "Added favorite: {} -> {}",
                    flight.departure.iata_code, flight.destination.iata_code
                );
            } else {
                println!(
                    "Removed favorite: {} -> {}",
                    flight.departure.iata_code, flight.destination.iata_code
                );
            }
        }
        Commands::Favorites => {
            if coordinator.favorite_flights().is_empty() {
                println!("No favorite routes yet.");
            }
            for flight in coordinator.favorite_flights() {
                println!(
                    "[*] {} -> {}  ({} to {})",
                    flight.departure.iata_code,
                    flight.destination.iata_code,
                    flight.departure.name,
                    flight.destination.name
                );
            }
        }
    }

    report_notices(&mut coordinator);
    Ok(())
}

fn report_notices(coordinator: &mut AppCoordinator) {
    for notice in coordinator.take_notices() {
        match notice {
            Notice::StoreError { operation, message } => {
                eprintln!("warning: {} failed: {}", operation, message);
            }
            Notice::UnresolvedRoute {
                departure_code,
                destination_code,
            } => {
                eprintln!(
                    "warning: favorite route {} -> {} references an unknown airport",
                    departure_code, destination_code
                );
            }
        }
    }
}
