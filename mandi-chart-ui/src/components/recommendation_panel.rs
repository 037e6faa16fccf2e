//! Recommendation panel with the prediction trigger and result text.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RecommendationPanelProps {
    /// Invoked when the user presses "Get Prediction". The prediction
    /// request itself lives in the app, which owns the async runtime.
    pub on_predict: EventHandler<MouseEvent>,
}

/// Panel showing the "Get Prediction" button and, once a request has
/// succeeded, the prediction rendered as plain text. A failed request
/// leaves the previously shown value in place.
#[component]
pub fn RecommendationPanel(props: RecommendationPanelProps) -> Element {
    let state = use_context::<AppState>();
    let prediction = (state.prediction)();

    rsx! {
        div {
            style: "margin-bottom: 24px; padding: 16px; background: #ffffff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
            h2 {
                style: "margin: 0 0 12px 0; font-size: 18px; font-weight: 600; color: #111827;",
                "Recommendation System"
            }
            button {
                onclick: move |evt| props.on_predict.call(evt),
                style: "background: #3b82f6; color: #ffffff; border: none; padding: 10px 16px; border-radius: 6px; cursor: pointer; font-size: 14px;",
                "Get Prediction"
            }
            if let Some(value) = prediction {
                p {
                    style: "margin: 12px 0 0 0; font-size: 15px; color: #111827;",
                    "{value}"
                }
            }
        }
    }
}
