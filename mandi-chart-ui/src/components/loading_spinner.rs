//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while the reference data loads.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #6b7280;",
            "Loading dashboard data..."
        }
    }
}
