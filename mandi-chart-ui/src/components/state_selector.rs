//! Dropdown selector for choosing an Indian state.

use crate::state::AppState;
use dioxus::prelude::*;

/// State dropdown selector.
/// Reads available state names from AppState and updates the selection
/// on change.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let states = state.states.read().clone();
    let selected = state.selection.read().state.clone();

    let on_change = move |evt: Event<FormData>| {
        state.select_state(&evt.value());
    };

    rsx! {
        select {
            id: "state-select",
            onchange: on_change,
            style: "border: 1px solid #d1d5db; padding: 10px; border-radius: 6px;",
            option {
                value: "",
                selected: selected.is_empty(),
                "Select State"
            }
            for name in states.iter() {
                option {
                    value: "{name}",
                    selected: *name == selected,
                    "{name}"
                }
            }
        }
    }
}
