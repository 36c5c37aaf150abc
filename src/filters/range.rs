use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{LedgerError, Result};

/// Date-only formats accepted in a record's Date field
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time formats accepted in a record's Date field (no offset)
const DATETIME_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Inclusive day range selected by the user.
///
/// A timestamp matches when it is at or after midnight of `from` and strictly before
/// midnight of the day after `to`, so every moment of the `to` day is included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Build a range from optional user input; both ends are required
    pub fn from_inputs(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self::new(from, to)),
            _ => Err(LedgerError::user_input(
                "Please select both a \"From Date\" and a \"To Date\".",
            )),
        }
    }

    /// Midnight at the start of `from`
    pub fn start(&self) -> NaiveDateTime {
        self.from.and_time(NaiveTime::MIN)
    }

    /// Midnight at the start of the day after `to` (exclusive); `None` past the calendar end
    pub fn end_exclusive(&self) -> Option<NaiveDateTime> {
        self.to.checked_add_days(Days::new(1)).map(|d| d.and_time(NaiveTime::MIN))
    }

    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        moment >= self.start() && self.end_exclusive().is_none_or(|end| moment < end)
    }
}

/// Parse a `YYYY-MM-DD` date typed by the user
pub fn parse_date_input(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::user_input(format!("Invalid date '{}' (expected YYYY-MM-DD)", value))
    })
}

/// Parse a record's Date field.
///
/// Accepts plain dates (midnight), local date-times, and RFC3339 timestamps (converted to
/// UTC). Returns `None` for anything else; callers treat that as "does not match".
pub fn parse_record_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        })
}
