//! Map view state mirrored from the current selection.

use lrm_core::{Record, RiskLevel};
use serde::Serialize;

pub const DEFAULT_MAP_ZOOM: u8 = 9;
pub const SELECTED_CARD_ZOOM: u8 = 18;
pub const DEFAULT_MAP_CENTER: (f64, f64) = (3.116, 101.637);

/// Fill opacity of the selected record's highlight circle.
pub const HIGHLIGHT_FILL_OPACITY: f64 = 0.5;

/// Where the map should be looking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        MapView {
            lat: DEFAULT_MAP_CENTER.0,
            lng: DEFAULT_MAP_CENTER.1,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl MapView {
    /// Focus on `record` if it has coordinates, otherwise the default view.
    pub fn focused_on(record: Option<&Record>) -> Self {
        match record.and_then(Record::coordinates) {
            Some((lat, lng)) => MapView {
                lat,
                lng,
                zoom: SELECTED_CARD_ZOOM,
            },
            None => MapView::default(),
        }
    }
}

/// Circle drawn around the selected record's marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub radius_m: f64,
    pub color: &'static str,
    pub fill_opacity: f64,
}

impl Highlight {
    pub fn for_level(level: &RiskLevel) -> Self {
        Highlight {
            radius_m: level.highlight_radius_m(),
            color: level.color(),
            fill_opacity: HIGHLIGHT_FILL_OPACITY,
        }
    }
}

/// One map marker, serialised as-is for the browser map bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: usize,
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: Option<f64>, lng: Option<f64>) -> Record {
        Record {
            region_name: "Genting Highlands".into(),
            timestamp: "2025-08-04".into(),
            rainfall_level: 150.0,
            soil_saturation: 95.0,
            slope_angle: 40.0,
            calculated_risk_level: RiskLevel::High,
            lat,
            lng,
        }
    }

    #[test]
    fn default_view_without_selection() {
        assert_eq!(MapView::focused_on(None), MapView::default());
        assert_eq!(MapView::default().zoom, 9);
    }

    #[test]
    fn selection_with_coordinates_zooms_in() {
        let r = record(Some(3.42), Some(101.79));
        let view = MapView::focused_on(Some(&r));
        assert_eq!(view, MapView { lat: 3.42, lng: 101.79, zoom: 18 });
    }

    #[test]
    fn selection_without_coordinates_keeps_default() {
        let r = record(Some(3.42), None);
        assert_eq!(MapView::focused_on(Some(&r)), MapView::default());
    }

    #[test]
    fn highlight_uses_risk_palette() {
        let h = Highlight::for_level(&RiskLevel::Moderate);
        assert_eq!(h.radius_m, 2400.0);
        assert_eq!(h.color, "#F7B500");
        assert_eq!(h.fill_opacity, 0.5);
    }
}
