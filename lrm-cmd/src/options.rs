//! `options`: the values each filter control offers.

use crate::{render, source, FilterArgs};

pub async fn run_options(api_url: &str, filters: &FilterArgs) -> anyhow::Result<()> {
    let mut dashboard = source::load_dashboard(api_url).await?;
    filters.apply(&mut dashboard);
    println!("{}", render::options(dashboard.options()));
    Ok(())
}
