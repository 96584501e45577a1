//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! All filtering, paging and selection goes through the `Dashboard` held in
//! `dashboard`, which recomputes its derived view on every change; writing
//! through the signal then re-renders every reader.

use dioxus::prelude::*;
use lrm_engine::{Dashboard, LoadState};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard over the fetched records (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the startup fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the fetch failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState in the loading state.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Record the outcome of the startup fetch.
    pub fn finish_load(&mut self, state: LoadState) {
        self.error_msg
            .set(state.error_message().map(str::to_string));
        if let Some(dashboard) = state.into_dashboard() {
            self.dashboard.set(Some(dashboard));
        }
        self.loading.set(false);
    }

    /// Apply a change to the dashboard, if it has loaded.
    pub fn update(&mut self, change: impl FnOnce(&mut Dashboard)) {
        if let Some(dashboard) = self.dashboard.write().as_mut() {
            change(dashboard);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
