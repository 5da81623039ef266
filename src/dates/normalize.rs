//! Conversion between canonical ISO dates and display formats.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use super::DateFormat;
use crate::error_handling::DateError;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("static ISO date regex"));

static SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})$").expect("static slash date regex")
});

/// Returns true if the year of `date` fits the four-digit ISO form.
pub fn is_iso_year(date: NaiveDate) -> bool {
    (0..=9999).contains(&date.year())
}

/// Formats a calendar date as zero-padded `yyyy-mm-dd`.
pub fn format_iso(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Parses a canonical ISO date, returning `None` unless it is a real calendar date.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    let caps = ISO_DATE.captures(value)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    validate_ymd(year, month, day).ok()
}

/// Returns true if `value` is a canonical ISO date denoting a real calendar date.
pub fn is_iso_date(value: &str) -> bool {
    parse_iso(value).is_some()
}

/// Converts a user-supplied date into canonical `yyyy-mm-dd`.
///
/// Input already in ISO form is returned unchanged once it is confirmed to be a
/// real calendar date. Otherwise the value is decomposed according to `format`:
/// month-first formats read `m/d/y`, [`DateFormat::DayMonthYear`] reads `d/m/y`.
/// Years may have two or four digits; two-digit years become `2000 + yy`.
///
/// # Errors
///
/// Returns a [`DateError`] describing why the value is not a usable date. The
/// input is never echoed back as if it were valid.
///
/// # Examples
///
/// ```
/// use site_tracker::dates::{to_iso, DateFormat};
///
/// assert_eq!(to_iso("6/12/25", DateFormat::MonthDayShortYear).unwrap(), "2025-06-12");
/// assert_eq!(to_iso("12/06/2025", DateFormat::DayMonthYear).unwrap(), "2025-06-12");
/// assert!(to_iso("02/30/2024", DateFormat::MonthDayYear).is_err());
/// ```
pub fn to_iso(display: &str, format: DateFormat) -> Result<String, DateError> {
    parse_date(display, format).map(format_iso)
}

/// Parses a user-supplied date into a calendar date.
///
/// Accepts the same inputs as [`to_iso`].
pub fn parse_date(display: &str, format: DateFormat) -> Result<NaiveDate, DateError> {
    let value = display.trim();
    if value.is_empty() {
        return Err(DateError::Empty);
    }

    if let Some(caps) = ISO_DATE.captures(value) {
        let year = parse_component(&caps[1], value, format)?;
        let month = parse_component(&caps[2], value, format)?;
        let day = parse_component(&caps[3], value, format)?;
        return validate_ymd(year as i32, month, day);
    }

    let caps = SLASH_DATE
        .captures(value)
        .ok_or_else(|| malformed(value, format))?;

    let first = parse_component(&caps[1], value, format)?;
    let second = parse_component(&caps[2], value, format)?;
    let year_str = &caps[3];
    let mut year = parse_component(year_str, value, format)? as i32;
    if year_str.len() == 2 {
        year += 2000;
    }

    let (month, day) = if format.day_first() {
        (second, first)
    } else {
        (first, second)
    };

    validate_ymd(year, month, day)
}

/// Renders a canonical ISO date in the display `format`.
///
/// Anything that is not shaped like `yyyy-mm-dd` (including the empty string)
/// is returned unchanged. [`DateFormat::MonthDayShortYear`] only shortens years
/// in 2000..=2099; other years keep all four digits so they read back intact.
pub fn to_display(iso: &str, format: DateFormat) -> String {
    let Some(caps) = ISO_DATE.captures(iso) else {
        return iso.to_string();
    };
    let (year, month, day) = (&caps[1], &caps[2], &caps[3]);
    match format {
        DateFormat::MonthDayShortYear if year.starts_with("20") => {
            format!("{}/{}/{}", month, day, &year[2..])
        }
        DateFormat::MonthDayShortYear | DateFormat::MonthDayYear => {
            format!("{}/{}/{}", month, day, year)
        }
        DateFormat::DayMonthYear => format!("{}/{}/{}", day, month, year),
    }
}

/// Today's date in the display `format`, the default for new report forms.
pub fn today_for_display(today: NaiveDate, format: DateFormat) -> String {
    to_display(&format_iso(today), format)
}

fn validate_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::MonthOutOfRange(month));
    }
    if !(1..=31).contains(&day) {
        return Err(DateError::DayOutOfRange(day));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateError::NotACalendarDate { year, month, day })
}

fn parse_component(component: &str, value: &str, format: DateFormat) -> Result<u32, DateError> {
    component.parse().map_err(|_| malformed(value, format))
}

fn malformed(value: &str, format: DateFormat) -> DateError {
    DateError::Malformed {
        value: value.to_string(),
        expected: format.pattern(),
    }
}
