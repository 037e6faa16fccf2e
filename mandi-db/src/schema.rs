//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the dashboard reference tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `states` - One row per (state, city) pair; `position` orders the
///   cities within each state, rowid preserves overall file order
/// - `stores` - Retail store locations (name, address, contact, lat/lon)
/// - `price_points` - Fixed price series points; `series` is either
///   `history` or `forecast`, `position` orders the periods
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS states (
        state TEXT NOT NULL,
        city TEXT NOT NULL,
        position INTEGER NOT NULL,
        PRIMARY KEY (state, position)
    );
    CREATE INDEX IF NOT EXISTS idx_states_state ON states(state);

    CREATE TABLE IF NOT EXISTS stores (
        name TEXT PRIMARY KEY,
        address TEXT NOT NULL,
        contact TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS price_points (
        series TEXT NOT NULL,
        position INTEGER NOT NULL,
        period TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (series, position)
    );
    CREATE INDEX IF NOT EXISTS idx_price_series ON price_points(series);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = ["states", "stores", "price_points"];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        // Applying schema a second time should not fail due to IF NOT EXISTS.
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
