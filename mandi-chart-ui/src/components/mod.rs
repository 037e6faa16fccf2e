//! Reusable Dioxus RSX components for the price dashboard.

mod chart_container;
mod commodity_selector;
mod country_selector;
mod error_display;
mod loading_spinner;
mod map_container;
mod market_list;
mod panel_header;
mod recommendation_panel;
mod state_selector;
mod store_list;

pub use chart_container::ChartContainer;
pub use commodity_selector::CommoditySelector;
pub use country_selector::CountrySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use market_list::MarketList;
pub use panel_header::PanelHeader;
pub use recommendation_panel::RecommendationPanel;
pub use state_selector::StateSelector;
pub use store_list::StoreList;
