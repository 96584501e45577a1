//! Option lists for the filter controls.
//!
//! Regions and years always come from the full, unfiltered record set so the
//! lists never shrink as other filters are applied. Days depend only on the
//! selected (or current) year and month.

use crate::filter::{Choice, FilterSelection};
use chrono::{Datelike, NaiveDate};
use lrm_core::{Record, RiskLevel};
use lrm_utils::dates::{days_in_month, month_name};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    /// `All`, then unique region names in lexicographic order.
    pub regions: Vec<Choice<String>>,
    /// `All`, then unique years, newest first.
    pub years: Vec<Choice<i32>>,
    /// `All`, then 1 through the number of days in the selected month.
    pub days: Vec<Choice<u32>>,
}

impl FilterOptions {
    /// Derive the option lists.
    ///
    /// `records` must be the full set and `dates` their decoded calendar dates
    /// in the same order. `today` supplies the year and month used for the
    /// day list when those filters are `All`.
    pub fn derive(
        records: &[Record],
        dates: &[Option<NaiveDate>],
        filters: &FilterSelection,
        today: NaiveDate,
    ) -> Self {
        let regions: BTreeSet<&str> = records.iter().map(|r| r.region_name.as_str()).collect();
        let years: BTreeSet<i32> = dates.iter().flatten().map(|d| d.year()).collect();

        FilterOptions {
            regions: std::iter::once(Choice::All)
                .chain(regions.into_iter().map(|r| Choice::Only(r.to_string())))
                .collect(),
            years: std::iter::once(Choice::All)
                .chain(years.into_iter().rev().map(Choice::Only))
                .collect(),
            days: std::iter::once(Choice::All)
                .chain((1..=day_bound(filters, today)).map(Choice::Only))
                .collect(),
        }
    }
}

/// Number of selectable days for the selected year/month, falling back to
/// today's year and month for whichever is `All`.
pub fn day_bound(filters: &FilterSelection, today: NaiveDate) -> u32 {
    let year = filters.year.as_only().copied().unwrap_or_else(|| today.year());
    let month = filters.month.as_only().copied().unwrap_or_else(|| today.month());
    days_in_month(year, month)
        .or_else(|| days_in_month(year, today.month()))
        .unwrap_or(31)
}

/// `All`, then months 1-12.
pub fn month_options() -> Vec<Choice<u32>> {
    std::iter::once(Choice::All).chain((1..=12).map(Choice::Only)).collect()
}

/// Display label for a month choice (`All`, `January`, ...).
pub fn month_label(choice: &Choice<u32>) -> String {
    match choice {
        Choice::All => crate::filter::ALL.to_string(),
        Choice::Only(m) => month_name(*m).map(str::to_string).unwrap_or_else(|| m.to_string()),
    }
}

/// `All`, then `Low`, `Moderate`, `High`.
pub fn risk_level_options() -> Vec<Choice<RiskLevel>> {
    std::iter::once(Choice::All)
        .chain(RiskLevel::KNOWN.into_iter().map(Choice::Only))
        .collect()
}
