//! Filter selections and the predicates they induce.

use chrono::{Datelike, NaiveDate};
use lrm_core::{Record, RiskLevel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel shown in every filter control for "no constraint".
pub const ALL: &str = "All";

/// A single filter control's value: no constraint, or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether `value` passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn as_only(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

/// A filter value that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid {field} filter {value:?}: {reason}")]
pub struct FilterParseError {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

impl<T> FromStr for Choice<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL {
            return Ok(Choice::All);
        }
        s.parse::<T>().map(Choice::Only).map_err(|e| FilterParseError {
            field: "value",
            value: s.to_string(),
            reason: e.to_string(),
        })
    }
}

fn parse_bounded(field: &'static str, s: &str, max: u32) -> Result<Choice<u32>, FilterParseError> {
    let choice = s.parse::<Choice<u32>>().map_err(|e| FilterParseError { field, ..e })?;
    match choice {
        Choice::Only(n) if n == 0 || n > max => Err(FilterParseError {
            field,
            value: s.to_string(),
            reason: format!("expected {} or 1-{}", ALL, max),
        }),
        other => Ok(other),
    }
}

/// Parse a month filter: `All` or 1-12.
pub fn parse_month(s: &str) -> Result<Choice<u32>, FilterParseError> {
    parse_bounded("month", s, 12)
}

/// Parse a day filter: `All` or 1-31.
pub fn parse_day(s: &str) -> Result<Choice<u32>, FilterParseError> {
    parse_bounded("day", s, 31)
}

/// Parse a year filter: `All` or a calendar year.
pub fn parse_year(s: &str) -> Result<Choice<i32>, FilterParseError> {
    s.parse().map_err(|e: FilterParseError| FilterParseError { field: "year", ..e })
}

/// Parse a region filter: `All` or any region name.
pub fn parse_region(s: &str) -> Result<Choice<String>, FilterParseError> {
    s.parse().map_err(|e: FilterParseError| FilterParseError { field: "region", ..e })
}

/// Parse a risk level filter: `All` or a risk category name.
pub fn parse_risk_level(s: &str) -> Result<Choice<RiskLevel>, FilterParseError> {
    s.parse().map_err(|e: FilterParseError| FilterParseError { field: "risk", ..e })
}

/// The five independent filter controls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub region: Choice<String>,
    pub risk_level: Choice<RiskLevel>,
    pub year: Choice<i32>,
    pub month: Choice<u32>,
    pub day: Choice<u32>,
}

impl FilterSelection {
    /// True when every control is `All`.
    pub fn is_unconstrained(&self) -> bool {
        self.region.is_all()
            && self.risk_level.is_all()
            && self.year.is_all()
            && self.month.is_all()
            && self.day.is_all()
    }

    fn has_date_constraint(&self) -> bool {
        !(self.year.is_all() && self.month.is_all() && self.day.is_all())
    }

    /// Whether `record` passes every active filter.
    ///
    /// `date` is the record's calendar date, decoded once by the caller; a
    /// record without one fails any active year/month/day filter.
    pub fn matches(&self, record: &Record, date: Option<NaiveDate>) -> bool {
        if !self.region.admits(&record.region_name) {
            return false;
        }
        if !self.risk_level.admits(&record.calculated_risk_level) {
            return false;
        }
        if !self.has_date_constraint() {
            return true;
        }
        match date {
            Some(date) => {
                self.year.admits(&date.year())
                    && self.month.admits(&date.month())
                    && self.day.admits(&date.day())
            }
            None => false,
        }
    }

    /// Convenience form of [`FilterSelection::matches`] that decodes the timestamp itself.
    pub fn matches_record(&self, record: &Record) -> bool {
        self.matches(record, record.parsed_timestamp().map(|dt| dt.date()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, risk: &str, timestamp: &str) -> Record {
        Record {
            region_name: region.to_string(),
            timestamp: timestamp.to_string(),
            rainfall_level: 100.0,
            soil_saturation: 60.0,
            slope_angle: 25.0,
            calculated_risk_level: RiskLevel::from(risk.to_string()),
            lat: None,
            lng: None,
        }
    }

    #[test]
    fn unconstrained_selection_admits_everything() {
        let filters = FilterSelection::default();
        assert!(filters.is_unconstrained());
        assert!(filters.matches_record(&record("Penang", "Low", "2024-03-01")));
        assert!(filters.matches_record(&record("Ipoh", "Weird", "garbage")));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let filters = FilterSelection {
            region: Choice::Only("Penang".into()),
            risk_level: Choice::Only(RiskLevel::High),
            ..Default::default()
        };
        assert!(filters.matches_record(&record("Penang", "High", "2024-03-01")));
        assert!(!filters.matches_record(&record("Penang", "Low", "2024-03-01")));
        assert!(!filters.matches_record(&record("Ipoh", "High", "2024-03-01")));
    }

    #[test]
    fn date_components_filter_independently() {
        let filters = FilterSelection {
            month: Choice::Only(3),
            day: Choice::Only(15),
            ..Default::default()
        };
        assert!(filters.matches_record(&record("A", "Low", "2023-03-15")));
        assert!(filters.matches_record(&record("A", "Low", "2024-03-15T22:00:00")));
        assert!(!filters.matches_record(&record("A", "Low", "2024-03-16")));
        assert!(!filters.matches_record(&record("A", "Low", "2024-04-15")));
    }

    #[test]
    fn unparseable_timestamp_fails_date_filters_only() {
        let r = record("A", "Low", "sometime");
        let by_region = FilterSelection {
            region: Choice::Only("A".into()),
            ..Default::default()
        };
        assert!(by_region.matches_record(&r));
        let by_year = FilterSelection {
            year: Choice::Only(2024),
            ..Default::default()
        };
        assert!(!by_year.matches_record(&r));
    }

    #[test]
    fn choice_parses_all_sentinel_and_values() {
        assert_eq!(parse_region("All").unwrap(), Choice::All);
        assert_eq!(parse_region("Penang").unwrap(), Choice::Only("Penang".to_string()));
        assert_eq!(parse_year("2024").unwrap(), Choice::Only(2024));
        assert_eq!(parse_risk_level("High").unwrap(), Choice::Only(RiskLevel::High));
        assert_eq!(parse_month(" All ").unwrap(), Choice::All);
    }

    #[test]
    fn month_and_day_are_range_checked() {
        assert_eq!(parse_month("12").unwrap(), Choice::Only(12));
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
        assert_eq!(parse_day("31").unwrap(), Choice::Only(31));
        let err = parse_day("32").unwrap_err();
        assert_eq!(err.field, "day");
        assert!(parse_year("twenty").is_err());
    }

    #[test]
    fn choice_displays_sentinel() {
        assert_eq!(Choice::<u32>::All.to_string(), "All");
        assert_eq!(Choice::Only(7u32).to_string(), "7");
    }

    #[test]
    fn numeric_choices_copy_out_of_a_shared_selection() {
        let filters = FilterSelection {
            year: Choice::Only(2024),
            month: Choice::Only(3),
            day: Choice::Only(15),
            ..FilterSelection::default()
        };
        let shared = &filters;
        let (year, month, day) = (shared.year, shared.month, shared.day);
        assert_eq!(year, Choice::Only(2024));
        assert_eq!((month, day), (Choice::Only(3), Choice::Only(15)));
        assert_eq!(shared.day, day);
    }
}
