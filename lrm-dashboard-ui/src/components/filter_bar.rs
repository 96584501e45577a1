//! Filter controls: region, risk level, year, month, day and clear.

use crate::state::AppState;
use dioxus::prelude::*;
use lrm_engine::filter::{self, Choice, FilterParseError};
use lrm_engine::options::{month_label, month_options, risk_level_options};
use std::fmt::Display;

/// (value, label) pairs for a select whose labels are the values themselves.
pub fn choice_options<T: Display>(choices: &[Choice<T>]) -> Vec<(String, String)> {
    choices
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    /// DOM id of the select, also used by its label
    pub id: String,
    pub label: String,
    /// (value, label) pairs in display order
    pub options: Vec<(String, String)>,
    /// Currently selected value
    pub value: String,
    pub on_change: EventHandler<String>,
}

/// A labelled dropdown for one filter.
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            class: "filter-group",
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}:"
            }
            select {
                id: "{props.id}",
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                for (value, text) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.value,
                        "{text}"
                    }
                }
            }
        }
    }
}

/// Resets every filter, the selection and the page.
#[component]
pub fn ClearFiltersButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "filter-group",
            style: "margin: 8px 0;",
            button {
                class: "clear-button",
                onclick: move |_| state.update(|dashboard| dashboard.clear_filters()),
                "Clear Filters"
            }
        }
    }
}

fn log_rejected(result: Result<(), FilterParseError>) {
    if let Err(e) = result {
        log::warn!("Ignoring filter change: {}", e);
    }
}

/// All five filter dropdowns plus the clear button.
///
/// Region and year options come from the full record set; the day list is
/// bounded by the selected (or current) year and month.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<AppState>();
    let (filters, options) = match state.dashboard.read().as_ref() {
        Some(dashboard) => (dashboard.filters().clone(), dashboard.options().clone()),
        None => return rsx! {},
    };

    let months: Vec<(String, String)> = month_options()
        .iter()
        .map(|c| (c.to_string(), month_label(c)))
        .collect();

    rsx! {
        div {
            class: "filters",
            style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            FilterSelect {
                id: "region-select",
                label: "Region",
                options: choice_options(&options.regions),
                value: filters.region.to_string(),
                on_change: move |value: String| {
                    log_rejected(filter::parse_region(&value).map(|choice| {
                        state.update(|d| d.set_region(choice));
                    }));
                },
            }
            FilterSelect {
                id: "risk-select",
                label: "Risk Level",
                options: choice_options(&risk_level_options()),
                value: filters.risk_level.to_string(),
                on_change: move |value: String| {
                    log_rejected(filter::parse_risk_level(&value).map(|choice| {
                        state.update(|d| d.set_risk_level(choice));
                    }));
                },
            }
            FilterSelect {
                id: "year-select",
                label: "Year",
                options: choice_options(&options.years),
                value: filters.year.to_string(),
                on_change: move |value: String| {
                    log_rejected(filter::parse_year(&value).map(|choice| {
                        state.update(|d| d.set_year(choice));
                    }));
                },
            }
            FilterSelect {
                id: "month-select",
                label: "Month",
                options: months,
                value: filters.month.to_string(),
                on_change: move |value: String| {
                    log_rejected(filter::parse_month(&value).map(|choice| {
                        state.update(|d| d.set_month(choice));
                    }));
                },
            }
            FilterSelect {
                id: "day-select",
                label: "Day",
                options: choice_options(&options.days),
                value: filters.day.to_string(),
                on_change: move |value: String| {
                    log_rejected(filter::parse_day(&value).map(|choice| {
                        state.update(|d| d.set_day(choice));
                    }));
                },
            }
            ClearFiltersButton {}
        }
    }
}
