use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Embedded CSV data for all retail store locations shown on the map.
pub static STORES_CSV: &str = include_str!("../../fixtures/stores.csv");

/// A physical retail location shown on the map and in the sidebar list.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub address: String,
    pub contact: String,
    /// Latitude in decimal degrees, within [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, within [-180, 180]
    pub longitude: f64,
}

impl Store {
    /// Get the store vector from the embedded CSV.
    pub fn get_store_vector() -> Vec<Store> {
        match Store::parse_store_csv(STORES_CSV) {
            Ok(stores) => stores,
            Err(e) => panic!("failed to parse embedded stores csv: {e}"),
        }
    }

    /// Parse a CSV string of store data into a vector of Stores.
    ///
    /// Expected CSV columns (with headers): name, address, contact,
    /// latitude, longitude. Coordinates outside the legal WGS84 ranges
    /// are rejected.
    pub fn parse_store_csv(csv_object: &str) -> Result<Vec<Store>> {
        let mut store_list: Vec<Store> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let name = record
                .get(0)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DataError::MissingField("name"))?
                .to_string();
            let address = record
                .get(1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DataError::MissingField("address"))?
                .to_string();
            let contact = record
                .get(2)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DataError::MissingField("contact"))?
                .to_string();
            let latitude = parse_coordinate(record.get(3), "latitude", 90.0)?;
            let longitude = parse_coordinate(record.get(4), "longitude", 180.0)?;
            store_list.push(Store {
                name,
                address,
                contact,
                latitude,
                longitude,
            });
        }
        Ok(store_list)
    }
}

fn parse_coordinate(raw: Option<&str>, field: &'static str, bound: f64) -> Result<f64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DataError::MissingField(field))?;
    let value: f64 = raw.parse().map_err(|_| DataError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value.abs() > bound {
        return Err(DataError::CoordinateOutOfRange { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::Store;

    #[test]
    fn test_embedded_store_vector() {
        let stores = Store::get_store_vector();
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].name, "Store A");
        assert_eq!(stores[0].address, "123 Main St, City, State");
        assert_eq!(stores[0].contact, "+91 123 456 7890");
        assert!((stores[0].latitude - 20.5937).abs() < f64::EPSILON);
        assert!((stores[0].longitude - 78.9629).abs() < f64::EPSILON);
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        let csv_data = "\
name,address,contact,latitude,longitude
Store X,Somewhere,+91 000,91.0,78.0
";
        assert!(Store::parse_store_csv(csv_data).is_err());
    }

    #[test]
    fn test_longitude_out_of_range_rejected() {
        let csv_data = "\
name,address,contact,latitude,longitude
Store X,Somewhere,+91 000,20.0,-181.0
";
        assert!(Store::parse_store_csv(csv_data).is_err());
    }

    #[test]
    fn test_non_numeric_coordinate_rejected() {
        let csv_data = "\
name,address,contact,latitude,longitude
Store X,Somewhere,+91 000,north,78.0
";
        assert!(Store::parse_store_csv(csv_data).is_err());
    }
}
