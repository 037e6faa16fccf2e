//! Map container component.
//!
//! Leaflet needs a fixed-height div to render into; the bridge polls for
//! this element by id before creating the map.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet renders into
    pub id: String,
    /// Map height in pixels
    #[props(default = 320)]
    pub height: u32,
}

/// A fixed-height container div for the Leaflet store map.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; border-radius: 8px; overflow: hidden;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
