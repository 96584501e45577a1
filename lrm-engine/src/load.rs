use crate::dashboard::Dashboard;
use log::error;
use lrm_core::Record;
use std::fmt::Display;

/// The only message shown for a failed load, whatever the cause.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Please ensure the backend is running.";

/// Lifecycle of the one-shot startup fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    /// Network error, bad status or bad payload; the cause is only logged.
    Failed,
    Ready(Dashboard),
}

impl LoadState {
    /// Resolve the fetch result. Every error collapses into `Failed`.
    pub fn from_fetch<E: Display>(result: Result<Vec<Record>, E>) -> Self {
        match result {
            Ok(records) => LoadState::Ready(Dashboard::new(records)),
            Err(e) => {
                error!("Error fetching data: {}", e);
                LoadState::Failed
            }
        }
    }

    /// User-facing error text, if the load failed.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            LoadState::Failed => Some(FETCH_ERROR_MESSAGE),
            _ => None,
        }
    }

    /// The loaded dashboard, if the fetch succeeded.
    pub fn into_dashboard(self) -> Option<Dashboard> {
        match self {
            LoadState::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }
}
