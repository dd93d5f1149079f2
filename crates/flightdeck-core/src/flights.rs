use crate::catalog::Airport;
use crate::favorites::FavoriteRoute;
use std::collections::HashSet;

/// A directed route with a favorite flag. Derived and transient: rebuilt from
/// its inputs on every pass, never persisted, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub departure: Airport,
    pub destination: Airport,
    pub is_favorite: bool,
}

impl Flight {
    pub fn route(&self) -> (&str, &str) {
        (&self.departure.iata_code, &self.destination.iata_code)
    }
}

/// Builds the full flight list for a departure: one flight per catalog entry
/// whose code differs from the departure's, in catalog order.
///
/// The departure does not have to be a catalog member (it may come from a
/// point lookup); then every catalog entry becomes a destination.
pub fn build_flights(
    departure: &Airport,
    catalog: &[Airport],
    favorites: &[FavoriteRoute],
) -> Vec<Flight> {
    let favorite_pairs: HashSet<(&str, &str)> = favorites
        .iter()
        .map(|r| (r.departure_code.as_str(), r.destination_code.as_str()))
        .collect();

    catalog
        .iter()
        .filter(|a| a.iata_code != departure.iata_code)
        .map(|destination| {
            let is_favorite = favorite_pairs.contains(&(
                departure.iata_code.as_str(),
                destination.iata_code.as_str(),
            ));
            Flight {
                departure: departure.clone(),
                destination: destination.clone(),
                is_favorite,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct FavoritesResolution {
    pub flights: Vec<Flight>,
    /// Routes whose departure or destination code no longer resolves.
    pub skipped: Vec<FavoriteRoute>,
}

/// Resolves favorite routes into full flights. A route whose codes do not
/// both resolve is skipped and recorded, never fatal. Duplicate routes yield
/// duplicate flights; the output is built from scratch on every call.
pub fn resolve_favorites<F>(favorites: &[FavoriteRoute], lookup: F) -> FavoritesResolution
where
    F: Fn(&str) -> Option<Airport>,
{
    let mut resolution = FavoritesResolution::default();

    for route in favorites {
        match (
            lookup(&route.departure_code),
            lookup(&route.destination_code),
        ) {
            (Some(departure), Some(destination)) => resolution.flights.push(Flight {
                departure,
                destination,
                is_favorite: true,
            }),
            _ => {
                log::warn!(
                    "Favorite route references an unknown airport — route={}->{}",
                    route.departure_code,
                    route.destination_code
                );
                resolution.skipped.push(route.clone());
            }
        }
    }

    resolution
}
