//! Spreadsheet serial date conversion.
//!
//! Workbooks store dates as fractional day counts from 1899-12-30. A serial is
//! shifted onto the Unix epoch, rounded to the millisecond and read as a UTC
//! instant so the calendar date never depends on the local timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::normalize::is_iso_year;
use crate::config::{MILLIS_PER_DAY, SPREADSHEET_EPOCH_OFFSET_DAYS};

/// Largest instant magnitude accepted, in milliseconds (±100,000,000 days).
const MAX_TIMESTAMP_MILLIS: f64 = 8.64e15;

/// Converts a spreadsheet serial number into a UTC date-time.
///
/// Returns `None` for non-finite serials and for instants whose year cannot be
/// written as four ISO digits.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let millis = ((serial - SPREADSHEET_EPOCH_OFFSET_DAYS) * MILLIS_PER_DAY).round();
    if millis.abs() > MAX_TIMESTAMP_MILLIS {
        return None;
    }
    // Bounded above, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let millis = millis as i64;
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .filter(|dt| is_iso_year(dt.date()))
}

/// Converts a spreadsheet serial number into its UTC calendar date.
///
/// ```
/// use site_tracker::dates::serial_to_date;
///
/// let date = serial_to_date(45678.0).unwrap();
/// assert_eq!(date.to_string(), "2025-01-21");
/// ```
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    serial_to_datetime(serial).map(|dt| dt.date())
}
