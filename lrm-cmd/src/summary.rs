//! `summary`: risk counts for the filtered records.

use crate::{render, source, FilterArgs};

pub async fn run_summary(api_url: &str, filters: &FilterArgs) -> anyhow::Result<()> {
    let mut dashboard = source::load_dashboard(api_url).await?;
    filters.apply(&mut dashboard);

    let counts = dashboard.risk_counts();
    println!("{}", render::summary(&counts));
    let unrated = dashboard.filtered_len() - counts.total();
    if unrated > 0 {
        println!("Unrated: {}", unrated);
    }
    println!(
        "Matching records: {} of {}",
        dashboard.filtered_len(),
        dashboard.records().len()
    );
    Ok(())
}
