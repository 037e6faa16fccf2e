//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The dropdown selection itself lives in one
//! owned [`Selection`] value that is replaced wholesale on every committed
//! transition; views subscribe to the signal and re-render on each commit.

use dioxus::prelude::*;
use mandi_data::Selection;
use mandi_db::models::StoreInfo;
use mandi_db::Database;

/// Shared application state for the price dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until the embedded fixtures are loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if startup went wrong
    pub error_msg: Signal<Option<String>>,
    /// The current country/state/commodity selection
    pub selection: Signal<Selection>,
    /// Most recent successful prediction, rendered as plain text.
    /// Kept unchanged when a request fails.
    pub prediction: Signal<Option<String>>,
    /// State names for the state dropdown
    pub states: Signal<Vec<String>>,
    /// Store records for the map and the sidebar list
    pub stores: Signal<Vec<StoreInfo>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(Selection::default()),
            prediction: Signal::new(None),
            states: Signal::new(Vec::new()),
            stores: Signal::new(Vec::new()),
        }
    }

    /// Country dropdown transition. Clears the state selection.
    pub fn select_country(&mut self, country: &str) {
        let next = self.selection.peek().clone().with_country(country);
        self.selection.set(next);
    }

    /// State dropdown transition.
    pub fn select_state(&mut self, state: &str) {
        let next = self.selection.peek().clone().with_state(state);
        self.selection.set(next);
    }

    /// Commodity dropdown transition.
    pub fn select_commodity(&mut self, commodity: &str) {
        let next = self.selection.peek().clone().with_commodity(commodity);
        self.selection.set(next);
    }
}
