use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: i64,
    pub iata_code: String,
    pub name: String,
    pub passengers: i64,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read-only view over the airport catalog.
///
/// `list_all` is the canonical display order: busiest first.
pub trait CatalogAccessor {
    fn list_all(&self) -> Vec<Airport>;
    fn find_by_code(&self, code: &str) -> Option<Airport>;
    fn find_by_id(&self, id: i64) -> Option<Airport>;
}

/// Case-insensitive IATA code lookup over a catalog slice.
pub fn lookup_by_code<'a>(airports: &'a [Airport], code: &str) -> Option<&'a Airport> {
    airports.iter().find(|a| a.iata_code.eq_ignore_ascii_case(code))
}

pub struct CatalogParser;

impl CatalogParser {
    /// Parses an airports.csv file and returns the raw airport list.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Airport>, CatalogError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Self::parse(reader)
    }

    /// Expected columns: id, iata_code, name, passengers (header required).
    /// Malformed rows are skipped, not fatal.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Airport>, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h == name);
        let (idx_id, idx_code, idx_name, idx_pax) = match (
            position("id"),
            position("iata_code"),
            position("name"),
            position("passengers"),
        ) {
            (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
            _ => {
                return Err(CatalogError::Parse(
                    "missing one of id, iata_code, name, passengers columns".to_string(),
                ))
            }
        };

        let mut airports = Vec::new();
        let mut skipped = 0usize;

        for result in rdr.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    log::error!("CSV parsing error: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            let id = record.get(idx_id).and_then(|s| s.parse::<i64>().ok());
            let code = record.get(idx_code).filter(|s| !s.is_empty());
            let name = record.get(idx_name).filter(|s| !s.is_empty());
            let passengers = record
                .get(idx_pax)
                .and_then(|s| s.parse::<i64>().ok())
                .filter(|p| *p >= 0);

            match (id, code, name, passengers) {
                (Some(id), Some(code), Some(name), Some(passengers)) => airports.push(Airport {
                    id,
                    iata_code: code.to_string(),
                    name: name.to_string(),
                    passengers,
                }),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("Skipped malformed catalog rows — skipped={}", skipped);
        }

        Ok(airports)
    }
}

/// In-memory catalog, sorted once at load time.
pub struct AirportCatalog {
    airports: Vec<Airport>,
}

impl AirportCatalog {
    pub fn new(mut airports: Vec<Airport>) -> Self {
        // Stable sort keeps file order for equal passenger counts
        airports.sort_by(|a, b| b.passengers.cmp(&a.passengers));
        Self { airports }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Ok(Self::new(CatalogParser::parse_file(path)?))
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl CatalogAccessor for AirportCatalog {
    fn list_all(&self) -> Vec<Airport> {
        self.airports.clone()
    }

    fn find_by_code(&self, code: &str) -> Option<Airport> {
        lookup_by_code(&self.airports, code).cloned()
    }

    fn find_by_id(&self, id: i64) -> Option<Airport> {
        self.airports.iter().find(|a| a.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_catalog() {
        let data = "\
id,iata_code,name,passengers
1,FCO,Leonardo da Vinci International Airport,11662842
2,DUB,Dublin Airport,7556222
3,,Nameless Field,100
4,XYZ,Bad Count,-5
5,VIE,Vienna International Airport,bogus
6,ARN,Stockholm Arlanda Airport,6004431
";
        let cursor = Cursor::new(data);
        let airports = CatalogParser::parse(cursor).unwrap();

        assert_eq!(airports.len(), 3);
        assert_eq!(airports[0].iata_code, "FCO");
        assert_eq!(airports[1].iata_code, "DUB");
        assert_eq!(airports[2].iata_code, "ARN");
        assert_eq!(airports[2].passengers, 6_004_431);
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        let data = "id,code,name\n1,FCO,Rome\n";
        let err = CatalogParser::parse(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_catalog_order_and_lookup() {
        let catalog = AirportCatalog::new(vec![
            Airport {
                id: 1,
                iata_code: "DUB".to_string(),
                name: "Dublin Airport".to_string(),
                passengers: 700_000,
            },
            Airport {
                id: 2,
                iata_code: "FCO".to_string(),
                name: "Leonardo da Vinci International Airport".to_string(),
                passengers: 1_000_000,
            },
        ]);

        let all = catalog.list_all();
        assert_eq!(all[0].iata_code, "FCO");
        assert_eq!(all[1].iata_code, "DUB");

        assert_eq!(catalog.find_by_code("fco").unwrap().id, 2);
        assert_eq!(catalog.find_by_code("LHR"), None);
        assert_eq!(catalog.find_by_id(1).unwrap().iata_code, "DUB");
    }
}
