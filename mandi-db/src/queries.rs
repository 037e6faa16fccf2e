//! Typed query methods for retrieving dashboard reference data.
//!
//! All queries return typed structs from [`crate::models`] (or plain
//! strings) that can be serialized to JSON for the chart and map bridges.

use crate::models::{PeriodValue, SeriesKind, StoreInfo};
use crate::Database;
use mandi_data::ChartSeries;
use rusqlite::params;

impl Database {
    /// Get all state names in reference-file order (for the state dropdown).
    pub fn query_states(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT state FROM states
             GROUP BY state
             ORDER BY MIN(rowid)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("query: query_states returned {} states", rows.len());
        Ok(rows)
    }

    /// Get the cities of one state, ordered as in the reference file.
    ///
    /// Returns an empty vector for an unknown state name.
    pub fn query_cities(&self, state: &str) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT city FROM states
             WHERE state = ?1
             ORDER BY position",
        )?;
        let rows = stmt
            .query_map(params![state], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "query: query_cities('{}') returned {} cities",
            state,
            rows.len()
        );
        Ok(rows)
    }

    /// Get all store locations in reference-file order.
    pub fn query_stores(&self) -> anyhow::Result<Vec<StoreInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, address, contact, latitude, longitude
             FROM stores
             ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoreInfo {
                    name: row.get(0)?,
                    address: row.get(1)?,
                    contact: row.get(2)?,
                    latitude: row.get(3)?,
                    longitude: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_stores returned {} stores", rows.len());
        Ok(rows)
    }

    /// Get the points of one fixed price series, in period order.
    pub fn query_series(&self, kind: SeriesKind) -> anyhow::Result<Vec<PeriodValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT period, value FROM price_points
             WHERE series = ?1
             ORDER BY position",
        )?;
        let rows = stmt
            .query_map(params![kind.as_str()], |row| {
                Ok(PeriodValue {
                    period: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_series('{}') returned {} points",
            kind.as_str(),
            rows.len()
        );
        Ok(rows)
    }

    /// Get one fixed price series as a validated [`ChartSeries`].
    pub fn query_chart_series(&self, kind: SeriesKind) -> anyhow::Result<ChartSeries> {
        let points = self.query_series(kind)?;
        let (labels, values) = points
            .into_iter()
            .map(|p| (p.period, p.value))
            .unzip();
        Ok(ChartSeries::new(labels, values)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::SeriesKind;
    use crate::Database;

    fn loaded_db() -> Database {
        let db = Database::new().unwrap();
        db.load_states(mandi_data::region::STATES_CSV).unwrap();
        db.load_stores(mandi_data::store::STORES_CSV).unwrap();
        db.load_price_series(SeriesKind::History, mandi_data::series::PRICE_HISTORY_CSV)
            .unwrap();
        db.load_price_series(SeriesKind::Forecast, mandi_data::series::PRICE_FORECAST_CSV)
            .unwrap();
        db
    }

    #[test]
    fn query_states_returns_all_in_file_order() {
        let db = loaded_db();
        let states = db.query_states().unwrap();
        assert_eq!(states.len(), 28);
        assert_eq!(states.first().map(String::as_str), Some("Andhra Pradesh"));
        assert_eq!(states.last().map(String::as_str), Some("West Bengal"));
    }

    #[test]
    fn query_cities_preserves_order() {
        let db = loaded_db();
        let cities = db.query_cities("Maharashtra").unwrap();
        assert_eq!(cities, ["Mumbai", "Pune", "Nagpur"]);
    }

    #[test]
    fn query_cities_unknown_state_is_empty() {
        let db = loaded_db();
        assert!(db.query_cities("Atlantis").unwrap().is_empty());
    }

    #[test]
    fn query_stores_returns_full_records() {
        let db = loaded_db();
        let stores = db.query_stores().unwrap();
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].name, "Store A");
        assert_eq!(stores[0].address, "123 Main St, City, State");
        assert_eq!(stores[0].contact, "+91 123 456 7890");
    }

    #[test]
    fn query_series_returns_six_points_each() {
        let db = loaded_db();
        for kind in [SeriesKind::History, SeriesKind::Forecast] {
            let points = db.query_series(kind).unwrap();
            assert_eq!(points.len(), 6, "series '{}'", kind.as_str());
        }
    }

    #[test]
    fn query_chart_series_round_trips_fixture() {
        let db = loaded_db();
        let series = db.query_chart_series(SeriesKind::History).unwrap();
        assert_eq!(series, mandi_data::ChartSeries::price_history());
    }
}
