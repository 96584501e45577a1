//! Per-risk totals for the filtered records.

use crate::state::AppState;
use dioxus::prelude::*;
use lrm_core::RiskLevel;

/// High / Moderate / Low counts, each in its risk colour.
#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let counts = match state.dashboard.read().as_ref() {
        Some(dashboard) => dashboard.risk_counts(),
        None => return rsx! {},
    };

    let cards = [RiskLevel::High, RiskLevel::Moderate, RiskLevel::Low]
        .map(|level| (format!("{} Risk", level), level.color(), counts.get(&level)));

    rsx! {
        div {
            class: "summary-cards",
            style: "display: flex; gap: 12px; margin: 8px 0;",
            for (title, color, count) in cards {
                div {
                    key: "{title}",
                    class: "summary-card",
                    style: "flex: 1; padding: 8px 12px; border-radius: 4px; border-top: 4px solid {color}; background: #fafafa;",
                    h3 {
                        style: "margin: 0 0 4px 0; font-size: 14px;",
                        "{title}"
                    }
                    p {
                        style: "margin: 0; font-size: 24px; font-weight: bold; color: {color};",
                        "{count}"
                    }
                }
            }
        }
    }
}
