//! Shared Dioxus components and Leaflet bridge for the landslide dashboard.
//!
//! This crate provides:
//! - `js_bridge`: browser fetch of the record set and Rust wrappers for the
//!   Leaflet map functions via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: filter controls, summary cards, record cards, pagination
//!   and the map panel

pub mod components;
pub mod js_bridge;
pub mod state;
