//! Shared Dioxus components and JS interop for the mandi price dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart and Leaflet map
//!   functions via `js_sys::eval()`
//! - `payload`: JSON payload builders for the data crossing the bridge
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, panels, containers)

pub mod components;
pub mod js_bridge;
pub mod payload;
pub mod state;
