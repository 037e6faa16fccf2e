//! Query result model structs for the dashboard reference data.
//!
//! All structs derive `Serialize` so they can be passed to the D3.js and
//! Leaflet bridges as JSON from the Dioxus WASM frontend.

use serde::Serialize;

/// Which of the two fixed price series a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Observed prices, January through June.
    History,
    /// Forecast prices, July through December.
    Forecast,
}

impl SeriesKind {
    /// The value stored in the `price_points.series` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKind::History => "history",
            SeriesKind::Forecast => "forecast",
        }
    }
}

/// A single (period, value) pair used for line chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodValue {
    pub period: String,
    pub value: f64,
}

/// Store metadata for the map markers and the sidebar list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoreInfo {
    /// Store display name.
    pub name: String,
    /// Street address shown in the marker popup.
    pub address: String,
    /// Contact phone number shown in the marker popup.
    pub contact: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}
