//! Date normalization.
//!
//! Dates are persisted in one canonical form, ISO `yyyy-mm-dd`, and shown to
//! users in a configurable display format. This module provides:
//! - [`DateFormat`], the supported display conventions
//! - [`to_iso`] / [`to_display`] for converting between the two forms
//! - Spreadsheet serial number conversion (days since 1899-12-30)
//!
//! Two-digit years always resolve to 20yy; there is no century windowing.

mod normalize;
mod serial;


use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use normalize::{
    format_iso, is_iso_date, is_iso_year, parse_date, parse_iso, to_display, to_iso, today_for_display,
};
pub use serial::{serial_to_date, serial_to_datetime};

/// Display convention for user-facing dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum DateFormat {
    /// `mm/dd/yy` (input also accepts `m/d/yyyy`)
    #[default]
    #[value(name = "mm/dd/yy")]
    MonthDayShortYear,
    /// `mm/dd/yyyy` (input also accepts `m/d/yy`)
    #[value(name = "mm/dd/yyyy")]
    MonthDayYear,
    /// `dd/mm/yyyy` (input also accepts `d/m/yy`)
    #[value(name = "dd/mm/yyyy")]
    DayMonthYear,
}

impl DateFormat {
    /// Human-readable pattern, used in validation messages.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayShortYear => "mm/dd/yy",
            DateFormat::MonthDayYear => "mm/dd/yyyy",
            DateFormat::DayMonthYear => "dd/mm/yyyy",
        }
    }

    fn day_first(&self) -> bool {
        matches!(self, DateFormat::DayMonthYear)
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pattern())
    }
}
