use crate::catalog::Airport;

pub const MAX_SUGGESTIONS: usize = 8;

/// Ranked, size-bounded suggestions for a live query.
///
/// An empty query yields the whole catalog, busiest first. A non-empty query
/// matches airports whose IATA code equals it or whose name contains it,
/// case-insensitively, busiest first, capped at `MAX_SUGGESTIONS`.
///
/// The query is matched literally: whitespace is significant and a
/// whitespace-only query is a non-empty query. Matching is exact-or-substring,
/// not SQL LIKE.
pub fn suggest(query: &str, catalog: &[Airport]) -> Vec<Airport> {
    let mut results: Vec<Airport> = if query.is_empty() {
        catalog.to_vec()
    } else {
        let needle = query.to_lowercase();
        catalog
            .iter()
            .filter(|a| {
                a.iata_code.eq_ignore_ascii_case(query) || a.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    };

    // Stable sort: equal passenger counts keep their catalog order
    results.sort_by(|a, b| b.passengers.cmp(&a.passengers));

    if !query.is_empty() {
        results.truncate(MAX_SUGGESTIONS);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(id: i64, code: &str, name: &str, passengers: i64) -> Airport {
        Airport {
            id,
            iata_code: code.to_string(),
            name: name.to_string(),
            passengers,
        }
    }

    fn sample_catalog() -> Vec<Airport> {
        vec![
            airport(1, "DUB", "Dublin Airport", 700_000),
            airport(2, "FCO", "Leonardo da Vinci International Airport", 1_000_000),
            airport(3, "VIE", "Vienna International Airport", 900_000),
        ]
    }

    #[test]
    fn test_empty_query_returns_catalog_busiest_first() {
        let results = suggest("", &sample_catalog());
        let codes: Vec<&str> = results.iter().map(|a| a.iata_code.as_str()).collect();
        assert_eq!(codes, vec!["FCO", "VIE", "DUB"]);
    }

    #[test]
    fn test_code_match_is_exact_and_case_insensitive() {
        let results = suggest("fco", &sample_catalog());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].iata_code, "FCO");

        // "FC" is not an exact code and no name contains it
        assert!(suggest("FC", &sample_catalog()).is_empty());
    }

    #[test]
    fn test_name_match_is_substring_and_ranked() {
        let results = suggest("international", &sample_catalog());
        let codes: Vec<&str> = results.iter().map(|a| a.iata_code.as_str()).collect();
        assert_eq!(codes, vec!["FCO", "VIE"]);
    }

    #[test]
    fn test_results_are_capped() {
        let catalog: Vec<Airport> = (0..20)
            .map(|i| airport(i, "AAA", &format!("Airfield {}", i), 1000 - i))
            .collect();

        assert_eq!(suggest("airfield", &catalog).len(), MAX_SUGGESTIONS);
        // Empty query is the full-catalog view and is not capped
        assert_eq!(suggest("", &catalog).len(), 20);
    }

    #[test]
    fn test_whitespace_query_matches_literally() {
        let catalog = vec![
            airport(1, "DUB", "Dublin Airport", 700_000),
            airport(2, "AAA", "Shortfield", 100),
        ];

        // A lone space is a non-empty query; it substring-matches names
        // containing a space and nothing else.
        let results = suggest(" ", &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].iata_code, "DUB");
    }
}
