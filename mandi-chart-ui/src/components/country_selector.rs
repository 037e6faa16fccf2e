//! Dropdown selector for the country.
//!
//! Only one country is offered, so the control renders disabled; the
//! change handler is still wired because selecting a country must clear
//! the state selection.

use crate::state::AppState;
use dioxus::prelude::*;
use mandi_data::selection::DEFAULT_COUNTRY;

/// Country dropdown selector (single fixed option).
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.selection.read().country.clone();

    let on_change = move |evt: Event<FormData>| {
        state.select_country(&evt.value());
    };

    rsx! {
        select {
            onchange: on_change,
            disabled: true,
            style: "border: 1px solid #d1d5db; padding: 10px; border-radius: 6px; background: #f9fafb;",
            option {
                value: "{DEFAULT_COUNTRY}",
                selected: selected == DEFAULT_COUNTRY,
                "{DEFAULT_COUNTRY}"
            }
        }
    }
}
