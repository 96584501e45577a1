//! Shared utility functions for landslide risk monitor crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Month names, January first. Index with `month - 1`.
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Naive datetime layouts accepted for record timestamps, tried in order.
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    /// Parse a record timestamp.
    ///
    /// Accepts RFC 3339 (`2024-03-05T10:00:00+08:00`), RFC 2822 / HTTP dates
    /// (`Tue, 05 Mar 2024 10:00:00 GMT`), naive datetimes with a `T` or space
    /// separator, and bare dates (`2024-03-05`, read as midnight).
    /// Offsets are not converted: the calendar fields are the ones written in
    /// the string, so a record stamped on the 5th stays on the 5th.
    pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, DateError> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.naive_local());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Ok(dt.naive_local());
        }
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(dt);
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| DateError(format!("unrecognised timestamp {:?}", s)))
    }

    /// Number of calendar days in `month` (1-12) of `year`.
    ///
    /// Returns `None` for a month outside 1-12.
    pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(next_first.signed_duration_since(first).num_days() as u32)
    }

    /// English name for a month number (1-12).
    pub fn month_name(month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        MONTH_NAMES.get(index).copied()
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
