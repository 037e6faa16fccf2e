//! Dropdown selector for choosing a commodity.

use crate::state::AppState;
use dioxus::prelude::*;
use mandi_data::Commodity;

/// Commodity dropdown selector over the fixed commodity set.
#[component]
pub fn CommoditySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.selection.read().commodity.clone();

    let on_change = move |evt: Event<FormData>| {
        state.select_commodity(&evt.value());
    };

    rsx! {
        select {
            id: "commodity-select",
            onchange: on_change,
            style: "border: 1px solid #d1d5db; padding: 10px; border-radius: 6px;",
            option {
                value: "",
                selected: selected.is_empty(),
                "Select Commodity"
            }
            for commodity in Commodity::ALL {
                option {
                    value: "{commodity}",
                    selected: commodity.as_str() == selected,
                    "{commodity}"
                }
            }
        }
    }
}
