//! Commodity Price Dashboard
//!
//! Single-page dashboard: pick an Indian state and a commodity, view the
//! fixed historical and forecast price charts, see store markers on a
//! Leaflet map, and optionally ask the remote model for a prediction,
//! rendered as plain text under the Recommendation System panel.
//!
//! Data flow:
//! 1. `mandi-data` embeds the reference CSVs (states/cities, stores,
//!    price series) into the WASM binary via `include_str!`.
//! 2. On mount, the CSVs are loaded into an in-memory SQLite database.
//! 3. The two fixed price series and the store markers are queried once
//!    and rendered through the D3.js/Leaflet bridge; they do not react to
//!    the dropdown selection.
//! 4. "Get Prediction" POSTs a feature vector to the configured endpoint
//!    and stores the parsed result; a failed request keeps the previous
//!    result on screen.

use dioxus::prelude::*;
use mandi_chart_ui::components::{
    ChartContainer, CommoditySelector, CountrySelector, ErrorDisplay, LoadingSpinner,
    MapContainer, MarketList, PanelHeader, RecommendationPanel, StateSelector, StoreList,
};
use mandi_chart_ui::js_bridge;
use mandi_chart_ui::payload;
use mandi_chart_ui::state::AppState;
use mandi_data::series::{PRICE_FORECAST_CSV, PRICE_HISTORY_CSV};
use mandi_data::ChartSeries;
use mandi_db::models::SeriesKind;
use mandi_db::Database;

/// Chart container DOM element ids used by the D3 bridge to render into.
const HISTORY_CHART_ID: &str = "price-history-chart";
const FORECAST_CHART_ID: &str = "forecast-price-chart";

/// Map container DOM element id used by the Leaflet bridge.
const STORE_MAP_ID: &str = "store-map";

/// Line colors carried over from the original chart styling.
const HISTORY_COLOR: &str = "rgba(75, 192, 192, 1)";
const FORECAST_COLOR: &str = "rgba(153, 102, 255, 1)";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("price-dashboard-root"))
        .launch(App);
}

/// Render one fixed price series into its container.
fn render_series(container_id: &str, series: &ChartSeries, legend: &str, value_label: &str, color: &str) {
    let data_json = payload::series_points_json(series);
    let config_json = payload::series_config_json(legend, value_label, color);
    js_bridge::render_series_chart(container_id, &data_json, &config_json);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the embedded reference data into SQLite on mount.
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_states(mandi_data::region::STATES_CSV) {
                    log::error!("Failed to load states: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load state data: {}", e)));
                    state.loading.set(false);
                    return;
                }
                if let Err(e) = db.load_stores(mandi_data::store::STORES_CSV) {
                    log::error!("Failed to load stores: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load store data: {}", e)));
                    state.loading.set(false);
                    return;
                }
                if let Err(e) = db.load_price_series(SeriesKind::History, PRICE_HISTORY_CSV) {
                    log::error!("Failed to load price history: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load price history: {}", e)));
                    state.loading.set(false);
                    return;
                }
                if let Err(e) = db.load_price_series(SeriesKind::Forecast, PRICE_FORECAST_CSV) {
                    log::error!("Failed to load price forecast: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load price forecast: {}", e)));
                    state.loading.set(false);
                    return;
                }

                // Populate the state dropdown and the store sidebar/map.
                if let Ok(states) = db.query_states() {
                    state.states.set(states);
                }
                if let Ok(stores) = db.query_stores() {
                    state.stores.set(stores);
                }

                state.db.set(Some(db));
                state.loading.set(false);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }

        js_bridge::init_bridge();
    });

    // Render the two fixed charts once the data is in. The series are
    // constant, so this effect re-runs only on load/error transitions.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let history = match db.query_chart_series(SeriesKind::History) {
            Ok(series) => series,
            Err(e) => {
                log::error!("price history query failed: {}", e);
                return;
            }
        };
        let forecast = match db.query_chart_series(SeriesKind::Forecast) {
            Ok(series) => series,
            Err(e) => {
                log::error!("price forecast query failed: {}", e);
                return;
            }
        };

        render_series(
            HISTORY_CHART_ID,
            &history,
            "Price History",
            "Price",
            HISTORY_COLOR,
        );
        render_series(
            FORECAST_CHART_ID,
            &forecast,
            "Forecast Price",
            "Forecast Price",
            FORECAST_COLOR,
        );
    });

    // Render the store map whenever the store list lands.
    use_effect(move || {
        let stores = state.stores.read().clone();
        if stores.is_empty() {
            return;
        }
        let stores_json = payload::store_markers_json(&stores);
        let config_json = payload::map_config_json();
        js_bridge::render_store_map(STORE_MAP_ID, &stores_json, &config_json);
    });

    rsx! {
        div {
            style: "min-height: 100vh; background: #f3f4f6; display: flex; flex-direction: column; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            nav {
                style: "background: #3b82f6; padding: 16px; color: #ffffff;",
                h1 {
                    style: "margin: 0; font-size: 24px; font-weight: 700;",
                    "Commodity Price Dashboard"
                }
            }

            main {
                style: "flex: 1; max-width: 1200px; width: 100%; margin: 0 auto; padding: 16px; display: grid; grid-template-columns: 2fr 1fr; gap: 24px; align-items: start; box-sizing: border-box;",

                div {
                    style: "background: #ffffff; padding: 24px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

                    if let Some(err) = (state.error_msg)() {
                        ErrorDisplay { message: err }
                    } else if (state.loading)() {
                        LoadingSpinner {}
                    } else {
                        div {
                            style: "margin-bottom: 24px;",
                            PanelHeader { title: "Select Country, State, and Commodity".to_string() }
                            div {
                                style: "display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 4px;",
                                CountrySelector {}
                                StateSelector {}
                                CommoditySelector {}
                            }
                            MarketList {}
                        }

                        div {
                            style: "margin-bottom: 24px;",
                            PanelHeader { title: "Price History".to_string() }
                            ChartContainer {
                                id: HISTORY_CHART_ID.to_string(),
                                loading: false,
                                min_height: 300,
                            }
                        }

                        div {
                            style: "margin-bottom: 24px;",
                            PanelHeader { title: "Forecast Price".to_string() }
                            ChartContainer {
                                id: FORECAST_CHART_ID.to_string(),
                                loading: false,
                                min_height: 300,
                            }
                        }

                        RecommendationPanel {
                            on_predict: move |_| {
                                // One request per press; nothing de-duplicates
                                // overlapping requests, the last response to
                                // resolve wins.
                                spawn(async move {
                                    match mandi_predict::predict(&[]).await {
                                        Ok(value) => state.prediction.set(Some(value.to_string())),
                                        Err(e) => {
                                            log::error!("prediction request failed: {}", e);
                                        }
                                    }
                                });
                            },
                        }
                    }
                }

                div {
                    style: "background: #ffffff; padding: 24px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
                    PanelHeader { title: "Store Locations".to_string() }
                    MapContainer {
                        id: STORE_MAP_ID.to_string(),
                        height: 320,
                    }
                    div {
                        style: "margin-top: 24px;",
                        PanelHeader { title: "Store Information".to_string() }
                        StoreList {}
                    }
                }
            }

            footer {
                style: "background: #3b82f6; padding: 16px; color: #ffffff; text-align: center;",
                p {
                    style: "margin: 0;",
                    "© 2024 Commodity Price Dashboard"
                }
            }
        }
    }
}
