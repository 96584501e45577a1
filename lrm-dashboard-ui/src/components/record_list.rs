//! The current page of record cards.

use super::{PaginationControls, RecordCard};
use crate::state::AppState;
use dioxus::prelude::*;
use lrm_engine::{RecordId, NO_DATA_MESSAGE};

#[component]
pub fn RecordList() -> Element {
    let mut state = use_context::<AppState>();
    let items = match state.dashboard.read().as_ref() {
        Some(dashboard) => dashboard
            .page()
            .items
            .into_iter()
            .map(|(id, record)| (id.0, record.clone(), dashboard.is_selected(id)))
            .collect::<Vec<_>>(),
        None => return rsx! {},
    };

    rsx! {
        div {
            class: "dashboard-content",
            div {
                class: "dashboard-header",
                h2 { style: "font-size: 18px;", "Recent Monitoring Data" }
            }
            if items.is_empty() {
                p { class: "no-data-message", "{NO_DATA_MESSAGE}" }
            } else {
                div {
                    class: "dashboard-grid",
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px;",
                    for (id, record, selected) in items {
                        RecordCard {
                            key: "{id}",
                            id,
                            record,
                            selected,
                            on_select: move |id: usize| state.update(|d| {
                                d.toggle_selection(RecordId(id));
                            }),
                        }
                    }
                }
            }
            PaginationControls {}
        }
    }
}
