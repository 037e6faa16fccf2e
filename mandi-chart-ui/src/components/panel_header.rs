//! Panel header component with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    /// Panel title
    pub title: String,
    /// Optional subtitle line under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for dashboard panels showing title and optional subtitle.
#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px; font-weight: 600; color: #111827;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #6b7280;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
