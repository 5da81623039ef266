//! Header row validation and keyed cell lookup.

use std::collections::HashMap;

use super::table::CellValue;
use crate::config::REPORT_HEADERS;
use crate::error_handling::ImportError;

static EMPTY_CELL: CellValue = CellValue::Empty;

fn normalize_header(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Column positions of the expected headers, keyed case-insensitively.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Returns the cell under `header` in `row`, or an empty cell when the
    /// row is shorter than the header.
    pub fn cell<'a>(&self, row: &'a [CellValue], header: &str) -> &'a CellValue {
        self.columns
            .get(&normalize_header(header))
            .and_then(|&i| row.get(i))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// Checks that the header row names every expected column.
///
/// Matching ignores case and surrounding whitespace; extra columns are
/// ignored and column order is free. When a header appears twice the first
/// occurrence wins.
///
/// # Errors
///
/// Returns [`ImportError::MissingHeaders`] listing every absent column.
pub fn validate_headers(header: &[CellValue]) -> Result<HeaderIndex, ImportError> {
    let mut columns = HashMap::new();
    for (i, cell) in header.iter().enumerate() {
        columns.entry(normalize_header(&cell.to_text())).or_insert(i);
    }

    let missing: Vec<String> = REPORT_HEADERS
        .iter()
        .filter(|h| !columns.contains_key(&normalize_header(h)))
        .map(|h| h.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ImportError::MissingHeaders { missing });
    }
    Ok(HeaderIndex { columns })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_row(names: &[&str]) -> Vec<CellValue> {
        names.iter().map(|n| CellValue::from(*n)).collect()
    }

    #[test]
    fn test_accepts_exact_headers() {
        assert!(validate_headers(&header_row(&REPORT_HEADERS)).is_ok());
    }

    #[test]
    fn test_accepts_any_case_order_and_extra_columns() {
        let row = header_row(&[
            "  last follow up",
            "ISSUE DATE",
            "Notes",
            "last update",
            "reason",
            "STATUS ",
            "ticket id",
            "site name",
        ]);
        let index = validate_headers(&row).unwrap();
        let data = header_row(&["f", "e", "x", "d", "c", "b", "a", "s"]);
        assert_eq!(index.cell(&data, "Site Name").to_text(), "s");
        assert_eq!(index.cell(&data, "Status").to_text(), "b");
    }

    #[test]
    fn test_reports_missing_status() {
        let row = header_row(&[
            "Site Name",
            "Ticket ID",
            "Reason",
            "Last Update",
            "Issue Date",
            "Last Follow Up",
        ]);
        match validate_headers(&row) {
            Err(ImportError::MissingHeaders { missing }) => assert_eq!(missing, vec!["Status"]),
            other => panic!("expected missing headers, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_reads_as_empty() {
        let index = validate_headers(&header_row(&REPORT_HEADERS)).unwrap();
        let data = header_row(&["Site"]);
        assert_eq!(index.cell(&data, "Last Follow Up"), &CellValue::Empty);
    }
}
