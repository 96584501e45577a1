//! Plain-text rendering of the dashboard.

use lrm_core::Record;
use lrm_engine::options::{month_label, month_options, risk_level_options};
use lrm_engine::{Dashboard, FilterOptions, MapView, Page, RiskCounts, NO_DATA_MESSAGE};
use std::fmt::Write;

pub const TITLE: &str = "Landslide Monitoring Dashboard";

pub fn summary(counts: &RiskCounts) -> String {
    format!(
        "High Risk: {} | Moderate Risk: {} | Low Risk: {}",
        counts.high, counts.moderate, counts.low
    )
}

/// One monitoring card. `selected` marks the card with an asterisk.
pub fn card(record: &Record, selected: bool) -> String {
    format!(
        "{}[{}] {}\n    Rainfall: {} mm | Soil Saturation: {}% | Slope Angle: {}°\n    {}",
        if selected { "* " } else { "  " },
        record.calculated_risk_level,
        record.region_name,
        record.rainfall_level,
        record.soil_saturation,
        record.slope_angle,
        record.timestamp
    )
}

/// Header and measurement lines of the selected-record panel.
pub fn selected_details(record: &Record) -> String {
    format!(
        "{} - {} Risk\nRainfall: {} mm | Soil: {}% | Slope: {}°",
        record.region_name,
        record.calculated_risk_level,
        record.rainfall_level,
        record.soil_saturation,
        record.slope_angle
    )
}

pub fn page_label(page: &Page<'_>) -> String {
    format!("Page {} of {}", page.number, page.total_pages)
}

pub fn map_view(view: &MapView) -> String {
    format!("Map: {:.5}, {:.5} @ zoom {}", view.lat, view.lng, view.zoom)
}

/// The whole dashboard as text: title, counts, current page, map focus.
pub fn dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", summary(&dashboard.risk_counts()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Recent Monitoring Data");

    let page = dashboard.page();
    if page.items.is_empty() {
        let _ = writeln!(out, "{}", NO_DATA_MESSAGE);
    }
    for (id, record) in &page.items {
        let _ = writeln!(out, "{}", card(record, dashboard.is_selected(*id)));
    }
    if page.shows_controls() {
        let _ = writeln!(out, "{}", page_label(&page));
    }

    let _ = writeln!(out);
    if let Some((_, record)) = dashboard.selected() {
        let _ = writeln!(out, "{}", selected_details(record));
    }
    let _ = write!(out, "{}", map_view(&dashboard.map_view()));
    out
}

/// Every filter control and the values it offers.
pub fn options(options: &FilterOptions) -> String {
    fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
        values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    let mut out = String::new();
    let _ = writeln!(out, "Region: {}", join(&options.regions));
    let _ = writeln!(out, "Risk Level: {}", join(risk_level_options()));
    let _ = writeln!(out, "Year: {}", join(&options.years));
    let _ = writeln!(
        out,
        "Month: {}",
        join(month_options().iter().map(month_label))
    );
    let _ = write!(out, "Day: {}", join(&options.days));
    out
}
