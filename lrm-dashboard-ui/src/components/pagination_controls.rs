//! Previous / next page buttons.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shown only when the filtered records span more than one page.
#[component]
pub fn PaginationControls() -> Element {
    let mut state = use_context::<AppState>();
    let (number, total_pages) = match state.dashboard.read().as_ref() {
        Some(dashboard) => {
            let page = dashboard.page();
            if !page.shows_controls() {
                return rsx! {};
            }
            (page.number, page.total_pages)
        }
        None => return rsx! {},
    };

    rsx! {
        div {
            class: "pagination-controls",
            style: "display: flex; justify-content: space-between; align-items: center; margin-top: 12px;",
            span { "Page {number} of {total_pages}" }
            div {
                class: "pagination-buttons",
                style: "display: flex; gap: 8px;",
                button {
                    disabled: number == 1,
                    onclick: move |_| state.update(|d| {
                        d.previous_page();
                    }),
                    "Previous"
                }
                button {
                    disabled: number == total_pages,
                    onclick: move |_| state.update(|d| {
                        d.next_page();
                    }),
                    "Next"
                }
            }
        }
    }
}
