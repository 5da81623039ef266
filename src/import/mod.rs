//! Spreadsheet and CSV import of problem reports.
//!
//! An import moves through:
//! 1. **Parsed** - [`read_table`] turns file bytes into a [`Table`]
//! 2. **Header validated** - the first row must name every expected column
//! 3. **Rows coerced** - status, required fields and dates are checked per row
//! 4. **Staged** - surviving reports wait in an [`ImportSession`]
//! 5. **Applied** or **Cancelled** - only confirmation touches the live collection
//!
//! Steps 2-3 are pure ([`reconcile`]); bad rows become [`RowIssue`]s instead of
//! errors.

mod headers;
mod reader;
mod reconcile;
mod session;
mod table;
mod types;


// Re-export public API
pub use headers::{validate_headers, HeaderIndex};
pub use reader::{parse_csv, parse_table, parse_workbook, read_table, TableFileKind};
pub use reconcile::{imported_id, reconcile};
pub use session::ImportSession;
pub use table::{CellValue, Table};
pub use types::{
    AppliedImport, ImportOptions, ImportPolicy, MissingDatePolicy, RowIssue, StagedImport,
};
