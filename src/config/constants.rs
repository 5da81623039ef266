//! Configuration constants.
//!
//! This module defines the constants shared across the application: storage
//! keys, the import/export column schema and spreadsheet date arithmetic.

/// Default directory holding the persisted key/value files.
pub const DEFAULT_DATA_DIR: &str = "./site_tracker_data";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "SITE_TRACKER_DATA_DIR";

// Storage keys
/// Key of the persisted problem report collection (JSON array).
pub const REPORTS_KEY: &str = "dailyReports";
/// Key of the persisted site collection (JSON array).
pub const SITES_KEY: &str = "sites";
/// Key of the persisted theme preference (`light` or `dark`).
pub const THEME_KEY: &str = "theme";

/// Column headers of the problem report table, in export order.
///
/// Imports match these case-insensitively and in any order.
pub const REPORT_HEADERS: [&str; 7] = [
    "Site Name",
    "Ticket ID",
    "Status",
    "Reason",
    "Last Update",
    "Issue Date",
    "Last Follow Up",
];

/// Column headers of the flattened site export.
pub const SITE_HEADERS: [&str; 12] = [
    "Site Location",
    "Device Name",
    "SDWAN Site ID",
    "LAN IP",
    "EL Info",
    "EL Capacity",
    "EL L2 IP",
    "Ilevant Info",
    "Ilevant Capacity",
    "Horizon Info",
    "Horizon Capacity",
    "Horizon L2 IP",
];

/// Worksheet name used for the site workbook export.
pub const SITES_SHEET_NAME: &str = "Sites";

// Spreadsheet date arithmetic
/// Days between the spreadsheet epoch (1899-12-30) and the Unix epoch.
pub const SPREADSHEET_EPOCH_OFFSET_DAYS: f64 = 25569.0;
/// Milliseconds in one day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Prefix of ids assigned to imported reports: `imported-<batch>-<row>`.
pub const IMPORTED_ID_PREFIX: &str = "imported";

/// UTF-8 byte-order mark prepended to CSV exports for spreadsheet compatibility.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
