//! Free-text date and time parsing and the display formats.

use std::sync::LazyLock;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use regex::Regex;

use crate::error::ParseError;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("time regex"));

/// Date-only layouts, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Date-time layouts whose date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses user-typed date text.
///
/// Accepts ISO dates (`2025-06-01`), ISO date-times (the date part is kept),
/// US numeric dates (`06/01/2025`) and month-name forms such as
/// `June 01, 2025`, `Jun 1, 2025` or `1 June 2025`. Out-of-range components
/// like `2024-13-45` are rejected.
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| ParseError::InvalidDate(text.to_string()))
}

/// Parses `H:MM` or `HH:MM`, hour 0-23 and minute 0-59.
pub fn parse_time(text: &str) -> Result<NaiveTime, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let invalid = || ParseError::InvalidTime(text.to_string());

    let caps = TIME_RE.captures(text).ok_or_else(invalid)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// `June 01, 2025`
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// `Jun 01, 2025`
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `Jun 01, 2025 14:30`
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%b %d, %Y %H:%M").to_string()
}

/// `14:30`
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Hidden form value, `YYYY-MM-DD`.
pub fn form_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
