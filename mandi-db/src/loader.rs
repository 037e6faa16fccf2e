//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader method parses CSV data from a string slice and inserts rows
//! into the corresponding table. The CSV formats match the fixture files
//! under `fixtures/` that the dashboard embeds at compile time.
//!
//! # CSV Formats
//!
//! - **States** (has headers): `state,city` -- one row per city, states
//!   repeated, file order preserved
//! - **Stores** (has headers): `name,address,contact,latitude,longitude`
//! - **Price series** (has headers): `period,value`

use crate::models::SeriesKind;
use crate::Database;
use mandi_data::{ChartSeries, StateCityMap, Store};
use rusqlite::params;

impl Database {
    /// Load the state/city reference data from a CSV string.
    ///
    /// Expected format (with headers): `state,city`. Parsing goes through
    /// [`mandi_data::StateCityMap`], so malformed rows are rejected before
    /// any insert; the position of each city within its state follows file
    /// order.
    pub fn load_states(&self, csv_data: &str) -> anyhow::Result<()> {
        let map = StateCityMap::parse_csv(csv_data)?;
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for (state, cities) in map.iter() {
            for (position, city) in cities.iter().enumerate() {
                conn.execute(
                    "INSERT OR REPLACE INTO states (state, city, position)
                     VALUES (?1, ?2, ?3)",
                    params![state, city, position as i64],
                )?;
                count += 1;
            }
        }
        log::info!("loader: Loaded {} state/city rows", count);
        Ok(())
    }

    /// Load store locations from a CSV string.
    ///
    /// Goes through [`mandi_data::Store::parse_store_csv`] so the
    /// coordinate range invariants are enforced before any row is
    /// inserted.
    pub fn load_stores(&self, csv_data: &str) -> anyhow::Result<()> {
        let stores = Store::parse_store_csv(csv_data)?;
        let conn = self.conn.borrow();
        for store in &stores {
            conn.execute(
                "INSERT OR REPLACE INTO stores (name, address, contact, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    store.name,
                    store.address,
                    store.contact,
                    store.latitude,
                    store.longitude
                ],
            )?;
        }
        log::info!("loader: Loaded {} stores", stores.len());
        Ok(())
    }

    /// Load one of the fixed price series from a CSV string.
    ///
    /// Expected format (with headers): `period,value`. Parsing goes
    /// through [`mandi_data::ChartSeries`] so the label/value length
    /// invariant holds before insertion.
    pub fn load_price_series(&self, kind: SeriesKind, csv_data: &str) -> anyhow::Result<()> {
        let series = ChartSeries::parse_series_csv(csv_data)?;
        let conn = self.conn.borrow();
        for (position, (period, value)) in series.points().enumerate() {
            conn.execute(
                "INSERT OR REPLACE INTO price_points (series, position, period, value)
                 VALUES (?1, ?2, ?3, ?4)",
                params![kind.as_str(), position as i64, period, value],
            )?;
        }
        log::info!(
            "loader: Loaded {} '{}' price points",
            series.len(),
            kind.as_str()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::SeriesKind;
    use crate::Database;

    #[test]
    fn load_states_preserves_file_order() {
        let db = Database::new().unwrap();
        db.load_states("state,city\nKerala,Kochi\nGoa,Panaji\nKerala,Kozhikode\n")
            .unwrap();
        let states = db.query_states().unwrap();
        assert_eq!(states, ["Kerala", "Goa"]);
        assert_eq!(db.query_cities("Kerala").unwrap(), ["Kochi", "Kozhikode"]);
    }

    #[test]
    fn load_states_rejects_blank_city() {
        let db = Database::new().unwrap();
        let result = db.load_states("state,city\nKerala,\n");
        assert!(result.is_err(), "blank city must be rejected");
    }

    #[test]
    fn load_stores_rejects_bad_coordinates() {
        let db = Database::new().unwrap();
        let result = db.load_stores(
            "name,address,contact,latitude,longitude\nStore X,Somewhere,+91 000,95.0,78.0\n",
        );
        assert!(result.is_err(), "out-of-range latitude must be rejected");
        // Nothing should have been inserted.
        assert!(db.query_stores().unwrap().is_empty());
    }

    #[test]
    fn load_price_series_is_idempotent() {
        let db = Database::new().unwrap();
        let csv = "period,value\nJan,10\nFeb,20\n";
        db.load_price_series(SeriesKind::History, csv).unwrap();
        db.load_price_series(SeriesKind::History, csv).unwrap();
        let points = db.query_series(SeriesKind::History).unwrap();
        assert_eq!(points.len(), 2, "INSERT OR REPLACE must not duplicate");
    }
}
