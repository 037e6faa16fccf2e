//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #fef2f2; color: #b91c1c; border-radius: 6px; border: 1px solid #fca5a5;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
