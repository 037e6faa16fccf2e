//! JSON payload builders for data crossing the JS bridge.
//!
//! Everything the D3 chart and the Leaflet map receive is assembled here,
//! so the payload shapes can be tested natively without a browser.

use mandi_data::ChartSeries;
use mandi_db::models::StoreInfo;

/// Fixed map center over India.
pub const MAP_CENTER: (f64, f64) = (20.5937, 78.9629);

/// Fixed map zoom level.
pub const MAP_ZOOM: u32 = 5;

/// OpenStreetMap slippy tile URL template.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the tile provider's terms.
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Serialize a series into the `[{label, value}, ...]` points the chart
/// bridge expects.
pub fn series_points_json(series: &ChartSeries) -> String {
    let points: Vec<serde_json::Value> = series
        .points()
        .map(|(label, value)| {
            serde_json::json!({
                "label": label,
                "value": value,
            })
        })
        .collect();
    serde_json::to_string(&points).unwrap_or_default()
}

/// Chart styling config: legend label, tooltip label prefix and line color.
pub fn series_config_json(legend_label: &str, value_label: &str, color: &str) -> String {
    serde_json::json!({
        "legendLabel": legend_label,
        "valueLabel": value_label,
        "color": color,
    })
    .to_string()
}

/// Serialize the store records for the map bridge. Popup text is built
/// from these fields verbatim on the JS side.
pub fn store_markers_json(stores: &[StoreInfo]) -> String {
    serde_json::to_string(stores).unwrap_or_default()
}

/// Map config: fixed center/zoom plus the tile interface contract.
pub fn map_config_json() -> String {
    serde_json::json!({
        "center": [MAP_CENTER.0, MAP_CENTER.1],
        "zoom": MAP_ZOOM,
        "tileUrl": TILE_URL,
        "attribution": TILE_ATTRIBUTION,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandi_data::ChartSeries;
    use mandi_db::models::StoreInfo;

    #[test]
    fn series_points_pair_each_label_with_its_value() {
        let series = ChartSeries::price_history();
        let json = series_points_json(&series);
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 6);
        assert_eq!(parsed[0]["label"], "Jan");
        assert_eq!(parsed[0]["value"], 10.0);
        assert_eq!(parsed[5]["label"], "Jun");
        assert_eq!(parsed[5]["value"], 30.0);
    }

    #[test]
    fn store_markers_carry_popup_fields_verbatim() {
        let stores = vec![StoreInfo {
            name: "Store A".to_string(),
            address: "123 Main St, City, State".to_string(),
            contact: "+91 123 456 7890".to_string(),
            latitude: 20.5937,
            longitude: 78.9629,
        }];
        let json = store_markers_json(&stores);
        for field in ["Store A", "123 Main St, City, State", "+91 123 456 7890"] {
            assert!(json.contains(field), "marker payload missing '{}'", field);
        }
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["latitude"], 20.5937);
        assert_eq!(parsed[0]["longitude"], 78.9629);
    }

    #[test]
    fn map_config_pins_center_and_tile_contract() {
        let config: serde_json::Value = serde_json::from_str(&map_config_json()).unwrap();
        assert_eq!(config["center"][0], 20.5937);
        assert_eq!(config["center"][1], 78.9629);
        assert_eq!(config["zoom"], 5);
        assert!(config["tileUrl"]
            .as_str()
            .unwrap()
            .contains("tile.openstreetmap.org"));
        assert!(config["attribution"]
            .as_str()
            .unwrap()
            .contains("OpenStreetMap"));
    }
}
