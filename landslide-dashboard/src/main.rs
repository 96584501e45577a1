//! Landslide Monitoring Dashboard
//!
//! Fetches every monitoring record once on mount, then filters, pages and
//! maps them entirely in the browser. Leaflet (`L`) is expected to be loaded
//! by the host page; the map script waits for it.
//!
//! Data flow:
//! 1. On mount: `GET` the records endpoint, decode, sort newest first.
//! 2. Any failure collapses into a single error message; the cause is logged.
//! 3. Filter, page and selection changes go through `AppState::update`, which
//!    recomputes the dashboard and re-renders the cards and the map.

use dioxus::prelude::*;
use lrm_dashboard_ui::components::{
    ErrorDisplay, FilterBar, LoadingSpinner, MapPanel, RecordList, SummaryCards,
};
use lrm_dashboard_ui::js_bridge;
use lrm_dashboard_ui::state::AppState;
use lrm_engine::LoadState;

const TITLE: &str = "Landslide Monitoring Dashboard";

/// Records endpoint, overridable at build time through `LRM_API_URL`.
const API_URL: &str = match option_env!("LRM_API_URL") {
    Some(url) => url,
    None => lrm_core::DEFAULT_API_URL,
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("landslide-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One fetch on mount; no retry, no refresh
    use_effect(move || {
        js_bridge::init_map();
        spawn(async move {
            log::info!("Fetching landslide records from {}", API_URL);
            let outcome = js_bridge::fetch_records(API_URL).await;
            state.finish_load(LoadState::from_fetch(outcome));
        });
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { style: "font-size: 22px; margin: 4px 0 8px 0;", "{TITLE}" }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else {
                SummaryCards {}
                FilterBar {}
                div {
                    class: "dashboard-body",
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start;",
                    div {
                        style: "flex: 1; min-width: 320px;",
                        RecordList {}
                    }
                    MapPanel {}
                }
            }
        }
    }
}
