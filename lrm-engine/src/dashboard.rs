//! Dashboard state: the full record set, the filter selection, the current
//! page and the selected record, plus everything derived from them.
//!
//! Every mutating method recomputes the derived view before returning, so
//! reads never observe a stale filtered list, stale counts or stale options.

use crate::aggregate::RiskCounts;
use crate::filter::{Choice, FilterSelection};
use crate::map::{Highlight, MapView, Marker};
use crate::options::{day_bound, FilterOptions};
use crate::pagination::{Pagination, ITEMS_PER_PAGE};
use chrono::{Local, NaiveDate};
use log::debug;
use lrm_core::{Record, RiskLevel};
use std::cmp::Reverse;

/// Shown in place of the cards when no record passes the filters.
pub const NO_DATA_MESSAGE: &str =
    "No data found for the selected filters. Try adjusting your filters.";

/// Stable identifier of a record: its position in the newest-first order
/// established at load time.
///
/// Timestamps are not assumed to be unique, so selection is keyed by this
/// rather than by the record's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

/// Sort newest first. Records with unparseable timestamps go last; ties keep
/// their delivery order.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by_cached_key(|r| Reverse(r.parsed_timestamp()));
}

/// The page of records currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
    pub items: Vec<(RecordId, &'a Record)>,
}

impl Page<'_> {
    /// Pagination controls are only shown when there is somewhere to go.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Derived {
    filtered: Vec<RecordId>,
    counts: RiskCounts,
    options: FilterOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    records: Vec<Record>,
    dates: Vec<Option<NaiveDate>>,
    filters: FilterSelection,
    pagination: Pagination,
    selected: Option<RecordId>,
    today: NaiveDate,
    derived: Derived,
}

impl Dashboard {
    /// Build a dashboard over freshly fetched records, using the local date
    /// for the day list fallback.
    pub fn new(records: Vec<Record>) -> Self {
        Self::new_at(records, Local::now().date_naive())
    }

    /// Build a dashboard with an explicit "today".
    pub fn new_at(mut records: Vec<Record>, today: NaiveDate) -> Self {
        sort_newest_first(&mut records);
        let dates = records
            .iter()
            .map(|r| r.parsed_timestamp().map(|dt| dt.date()))
            .collect();
        let mut dashboard = Dashboard {
            pagination: Pagination::new(records.len(), ITEMS_PER_PAGE),
            records,
            dates,
            filters: FilterSelection::default(),
            selected: None,
            today,
            derived: Derived::default(),
        };
        dashboard.recompute();
        dashboard
    }

    fn recompute(&mut self) {
        let filtered: Vec<RecordId> = self
            .records
            .iter()
            .zip(&self.dates)
            .enumerate()
            .filter(|(_, (record, date))| self.filters.matches(record, **date))
            .map(|(i, _)| RecordId(i))
            .collect();
        let counts = RiskCounts::from_records(filtered.iter().map(|id| &self.records[id.0]));
        let options = FilterOptions::derive(&self.records, &self.dates, &self.filters, self.today);
        debug!(
            "Recomputed view: {} of {} records match",
            filtered.len(),
            self.records.len()
        );
        self.derived = Derived {
            filtered,
            counts,
            options,
        };
    }

    // --- reads ---

    /// Every record, newest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.0)
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// Records passing the active filters, in load order.
    pub fn filtered(&self) -> impl Iterator<Item = (RecordId, &Record)> + '_ {
        self.derived
            .filtered
            .iter()
            .map(move |id| (*id, &self.records[id.0]))
    }

    pub fn filtered_len(&self) -> usize {
        self.derived.filtered.len()
    }

    pub fn risk_counts(&self) -> RiskCounts {
        self.derived.counts
    }

    pub fn options(&self) -> &FilterOptions {
        &self.derived.options
    }

    pub fn page(&self) -> Page<'_> {
        let items = self.derived.filtered[self.pagination.range()]
            .iter()
            .map(|id| (*id, &self.records[id.0]))
            .collect();
        Page {
            number: self.pagination.current(),
            total_pages: self.pagination.total(),
            items,
        }
    }

    pub fn selected(&self) -> Option<(RecordId, &Record)> {
        self.selected
            .and_then(|id| self.record(id).map(|record| (id, record)))
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected == Some(id)
    }

    pub fn map_view(&self) -> MapView {
        MapView::focused_on(self.selected().map(|(_, record)| record))
    }

    /// Markers for the current page's records that have coordinates.
    pub fn markers(&self) -> Vec<Marker> {
        self.page()
            .items
            .into_iter()
            .filter_map(|(id, record)| {
                let (lat, lng) = record.coordinates()?;
                let level = &record.calculated_risk_level;
                Some(Marker {
                    id: id.0,
                    lat,
                    lng,
                    color: level.color(),
                    label: record.region_name.clone(),
                    highlight: self.is_selected(id).then(|| Highlight::for_level(level)),
                })
            })
            .collect()
    }

    // --- filter changes ---

    /// Replace the whole filter selection.
    ///
    /// A real change resets to page 1 and drops a selection that is no
    /// longer visible. Setting the same selection again is a no-op.
    pub fn set_filters(&mut self, filters: FilterSelection) {
        if filters == self.filters {
            return;
        }
        self.filters = filters;
        self.recompute();
        if self.pagination.reset(self.derived.filtered.len()) {
            self.selected = None;
        }
        if let Some(id) = self.selected {
            if !self.derived.filtered.contains(&id) {
                debug!("Selected record {} no longer matches filters", id.0);
                self.selected = None;
            }
        }
    }

    pub fn set_region(&mut self, region: Choice<String>) {
        let filters = FilterSelection {
            region,
            ..self.filters.clone()
        };
        self.set_filters(filters);
    }

    pub fn set_risk_level(&mut self, risk_level: Choice<RiskLevel>) {
        let filters = FilterSelection {
            risk_level,
            ..self.filters.clone()
        };
        self.set_filters(filters);
    }

    /// A day the new year's month does not have (29 February after leaving a
    /// leap year) falls back to `All`, so the day control never hides an
    /// active constraint.
    pub fn set_year(&mut self, year: Choice<i32>) {
        let mut filters = FilterSelection {
            year,
            ..self.filters.clone()
        };
        if filters
            .day
            .as_only()
            .is_some_and(|&day| day > day_bound(&filters, self.today))
        {
            debug!("Day {} does not exist in the new year; resetting", filters.day);
            filters.day = Choice::All;
        }
        self.set_filters(filters);
    }

    /// Selecting a month always resets the day to `All`.
    pub fn set_month(&mut self, month: Choice<u32>) {
        let filters = FilterSelection {
            month,
            day: Choice::All,
            ..self.filters.clone()
        };
        self.set_filters(filters);
    }

    pub fn set_day(&mut self, day: Choice<u32>) {
        let filters = FilterSelection {
            day,
            ..self.filters.clone()
        };
        self.set_filters(filters);
    }

    /// All filters back to `All`, no selection, page 1.
    pub fn clear_filters(&mut self) {
        self.selected = None;
        self.set_filters(FilterSelection::default());
        self.pagination.reset(self.derived.filtered.len());
    }

    // --- pagination ---

    pub fn next_page(&mut self) -> bool {
        let moved = self.pagination.next();
        if moved {
            self.selected = None;
        }
        moved
    }

    pub fn previous_page(&mut self) -> bool {
        let moved = self.pagination.previous();
        if moved {
            self.selected = None;
        }
        moved
    }

    /// Jump to a page, clamped to the valid range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.pagination.go_to(page);
        if moved {
            self.selected = None;
        }
        moved
    }

    // --- selection ---

    /// Card activation: select `id`, or unselect it if it already is.
    ///
    /// Only records on the current page can be selected; anything else is
    /// ignored. Returns the selection afterwards.
    pub fn toggle_selection(&mut self, id: RecordId) -> Option<RecordId> {
        if self.selected == Some(id) {
            self.selected = None;
        } else if self.derived.filtered[self.pagination.range()].contains(&id) {
            self.selected = Some(id);
        }
        self.selected
    }
}
