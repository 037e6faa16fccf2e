//! In-memory SQLite database layer for the mandi price dashboard.
//!
//! This crate loads the embedded reference CSVs (states/cities, store
//! locations, fixed price series) into an in-memory SQLite database and
//! exposes typed query methods for consumption by the Dioxus WASM
//! dashboard.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via
//!   `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the consuming
//!   crate
//! - Typed query methods returning serializable structs for JSON export
//!   to the D3.js/Leaflet bridge
//!
//! # Usage
//!
//! ```rust
//! use mandi_db::Database;
//!
//! let db = Database::new().unwrap();
//!
//! // Load CSV data (typically via include_str! in the consuming crate)
//! db.load_states("state,city\nKerala,Kochi\nKerala,Kozhikode\n").unwrap();
//!
//! // Query typed results
//! let states = db.query_states().unwrap();
//! assert_eq!(states, ["Kerala"]);
//! let cities = db.query_cities("Kerala").unwrap();
//! assert_eq!(cities, ["Kochi", "Kozhikode"]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `states` - One row per (state, city) pair, ordered within each state
//! - `stores` - Retail store locations with coordinates and contact info
//! - `price_points` - Fixed historical and forecast price series

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the dashboard reference data.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_states("state,city\nKerala,Kochi\n").unwrap();
        let states = db2.query_states().unwrap();
        assert_eq!(states.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let states = db.query_states().unwrap();
        assert!(states.is_empty(), "New database should have no states");
    }
}
