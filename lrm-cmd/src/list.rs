//! `list`: the summary counts plus one page of cards.

use crate::{render, source, FilterArgs, OutputFormat};
use lrm_core::Record;
use lrm_engine::Dashboard;
use log::{info, warn};
use std::io::Write;

/// Fetch, filter, page and print.
pub async fn run_list(
    api_url: &str,
    filters: &FilterArgs,
    page: usize,
    select: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut dashboard = source::load_dashboard(api_url).await?;
    prepare(&mut dashboard, filters, page, select);

    info!(
        "{} of {} records match, showing page {} of {}",
        dashboard.filtered_len(),
        dashboard.records().len(),
        dashboard.page().number,
        dashboard.page().total_pages
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_page(&mut out, &dashboard, format)?;
    out.flush()?;
    Ok(())
}

/// Apply filters, move to `page` and activate the `select`-th card.
pub fn prepare(dashboard: &mut Dashboard, filters: &FilterArgs, page: usize, select: Option<usize>) {
    filters.apply(dashboard);
    dashboard.go_to_page(page);

    if let Some(n) = select {
        let id = n
            .checked_sub(1)
            .and_then(|i| dashboard.page().items.get(i).map(|(id, _)| *id));
        match id {
            Some(id) => {
                dashboard.toggle_selection(id);
            }
            None => warn!("No card {} on page {}", n, dashboard.page().number),
        }
    }
}

pub fn write_page<W: Write>(
    out: &mut W,
    dashboard: &Dashboard,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let page = dashboard.page();
    let records: Vec<&Record> = page.items.iter().map(|(_, r)| *r).collect();
    match format {
        OutputFormat::Text => writeln!(out, "{}", render::dashboard(dashboard))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(out, &records)?,
    }
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_csv<W: Write>(out: &mut W, records: &[&Record]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record([
        "region",
        "timestamp",
        "rainfall_mm",
        "soil_saturation_pct",
        "slope_angle_deg",
        "risk_level",
        "lat",
        "lng",
    ])?;
    for record in records {
        wtr.write_record([
            record.region_name.clone(),
            record.timestamp.clone(),
            record.rainfall_level.to_string(),
            record.soil_saturation.to_string(),
            record.slope_angle.to_string(),
            record.calculated_risk_level.to_string(),
            optional(record.lat),
            optional(record.lng),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
