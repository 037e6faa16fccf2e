//! Store information sidebar list.

use crate::state::AppState;
use dioxus::prelude::*;

/// Lists the same store records shown on the map: name, address, contact.
#[component]
pub fn StoreList() -> Element {
    let state = use_context::<AppState>();
    let stores = state.stores.read().clone();

    rsx! {
        ul {
            style: "list-style: disc; padding-left: 20px; margin: 0;",
            for store in stores.iter() {
                li {
                    style: "margin-bottom: 10px; font-size: 14px; color: #374151;",
                    strong { "{store.name}" }
                    br {}
                    "{store.address}"
                    br {}
                    "Contact: {store.contact}"
                }
            }
        }
    }
}
