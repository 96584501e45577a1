//! Overview map plus details of the selected record.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use lrm_core::Record;

/// DOM id of the Leaflet container.
pub const MAP_CONTAINER_ID: &str = "overview-map";

/// Heading and measurement line shown for the selected record.
pub fn selected_lines(record: &Record) -> (String, String) {
    (
        format!("{} - {} Risk", record.region_name, record.calculated_risk_level),
        format!(
            "Rainfall: {} mm | Soil: {}% | Slope: {}°",
            record.rainfall_level, record.soil_saturation, record.slope_angle
        ),
    )
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectedDetailsProps {
    pub record: Record,
}

#[component]
pub fn SelectedDetails(props: SelectedDetailsProps) -> Element {
    let (heading, measurements) = selected_lines(&props.record);
    let color = props.record.calculated_risk_level.color();

    rsx! {
        div {
            class: "selected-card-details",
            p {
                strong { style: "color: {color};", "{heading}" }
            }
            p { "{measurements}" }
        }
    }
}

/// Map of the current page's records, following the selection.
///
/// Re-renders markers and re-centres the map whenever the dashboard changes.
#[component]
pub fn MapPanel() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        if let Some(dashboard) = state.dashboard.read().as_ref() {
            js_bridge::render_map(MAP_CONTAINER_ID, &dashboard.map_view(), &dashboard.markers());
        }
    });

    use_drop(|| js_bridge::destroy_map(MAP_CONTAINER_ID));

    let selected = state
        .dashboard
        .read()
        .as_ref()
        .and_then(|d| d.selected().map(|(_, record)| record.clone()));

    rsx! {
        div {
            class: "map-container",
            style: "flex: 1; min-width: 320px;",
            div {
                class: "map-info",
                h3 { style: "margin: 0 0 4px 0;", "Overview Map" }
                if let Some(record) = selected {
                    SelectedDetails { record }
                }
            }
            div {
                id: MAP_CONTAINER_ID,
                class: "main-map",
                style: "height: 480px; width: 100%;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrm_core::RiskLevel;

    #[test]
    fn selected_lines_format() {
        let record = Record {
            region_name: "Genting Highlands".into(),
            timestamp: "2025-08-04".into(),
            rainfall_level: 150.0,
            soil_saturation: 92.5,
            slope_angle: 38.0,
            calculated_risk_level: RiskLevel::High,
            lat: Some(3.42),
            lng: Some(101.79),
        };
        let (heading, measurements) = selected_lines(&record);
        assert_eq!(heading, "Genting Highlands - High Risk");
        assert_eq!(measurements, "Rainfall: 150 mm | Soil: 92.5% | Slope: 38°");
    }
}
