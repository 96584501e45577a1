//! One monitoring record as a clickable card.

use dioxus::prelude::*;
use lrm_core::Record;

#[derive(Props, Clone, PartialEq)]
pub struct RecordCardProps {
    /// Stable record id, passed back through `on_select`
    pub id: usize,
    pub record: Record,
    #[props(default = false)]
    pub selected: bool,
    pub on_select: EventHandler<usize>,
}

/// Card with a risk-coloured stripe and badge, the three measurements and
/// the timestamp. Clicking toggles map focus on this record.
#[component]
pub fn RecordCard(props: RecordCardProps) -> Element {
    let id = props.id;
    let on_select = props.on_select;
    let record = &props.record;
    let color = record.calculated_risk_level.color();
    let border = if props.selected {
        format!("2px solid {}", color)
    } else {
        "1px solid #e0e0e0".to_string()
    };

    rsx! {
        div {
            class: if props.selected { "card selected" } else { "card" },
            style: "position: relative; padding: 12px 12px 8px 20px; border: {border}; border-radius: 6px; cursor: pointer; background: #fff;",
            onclick: move |_| on_select.call(id),
            div {
                class: "card-risk-stripe",
                style: "position: absolute; left: 0; top: 0; bottom: 0; width: 6px; border-radius: 6px 0 0 6px; background-color: {color};",
            }
            div {
                class: "card-header",
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 {
                    class: "card-title",
                    style: "margin: 0; font-size: 16px;",
                    "{record.region_name}"
                }
                span {
                    class: "risk-level",
                    style: "padding: 2px 8px; border-radius: 10px; color: #fff; font-size: 12px; background-color: {color};",
                    "{record.calculated_risk_level}"
                }
            }
            div {
                class: "card-body",
                style: "margin: 8px 0; font-size: 13px;",
                div { class: "card-item", "Rainfall: {record.rainfall_level} mm" }
                div { class: "card-item", "Soil Saturation: {record.soil_saturation}%" }
                div { class: "card-item", "Slope Angle: {record.slope_angle}°" }
            }
            div {
                class: "card-footer",
                style: "font-size: 11px; color: #888;",
                span { class: "timestamp", "{record.timestamp}" }
            }
        }
    }
}
