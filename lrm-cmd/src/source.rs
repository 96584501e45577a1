//! One-shot fetch of the record set.

use anyhow::bail;
use lrm_engine::{Dashboard, LoadState};

/// Fetch every record from `api_url` and build a dashboard over them.
///
/// All failures surface as the dashboard's single generic error message;
/// the underlying cause is logged.
pub async fn load_dashboard(api_url: &str) -> anyhow::Result<Dashboard> {
    let client = reqwest::Client::new();
    let result = lrm_core::api::fetch_records(&client, api_url).await;
    match LoadState::from_fetch(result) {
        LoadState::Ready(dashboard) => Ok(dashboard),
        state => bail!("{}", state.error_message().unwrap_or_default()),
    }
}
