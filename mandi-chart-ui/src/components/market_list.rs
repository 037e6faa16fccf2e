//! Major-market line for the selected state.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the market cities of the currently selected state, straight from
/// the reference data. Renders nothing until a state is chosen.
#[component]
pub fn MarketList() -> Element {
    let state = use_context::<AppState>();
    let selected = state.selection.read().state.clone();

    if selected.is_empty() {
        return rsx! {};
    }

    let cities = match &*state.db.read() {
        Some(db) => match db.query_cities(&selected) {
            Ok(cities) => cities,
            Err(e) => {
                log::error!("city lookup failed for '{}': {}", selected, e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    if cities.is_empty() {
        return rsx! {};
    }

    let markets = cities.join(", ");
    rsx! {
        p {
            style: "margin: 4px 0 0 0; font-size: 13px; color: #6b7280;",
            "Major markets in {selected}: {markets}"
        }
    }
}
