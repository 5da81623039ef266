//! Parser-independent view of an imported sheet.

use chrono::{NaiveDateTime, Timelike};

/// One cell as delivered by a table parser.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Native date value (workbook date cells), in UTC.
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Renders the cell as free text.
    ///
    /// Integral numbers are written without a decimal part.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(b) => String::from(if *b { "TRUE" } else { "FALSE" }),
            CellValue::DateTime(dt) => {
                if dt.num_seconds_from_midnight() == 0 {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Rows of cells; the first row is the header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Builds a table of text cells, mostly useful for tests and CSV input.
    pub fn from_text_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| CellValue::from(cell.as_ref()))
                        .collect()
                })
                .collect(),
        )
    }

    /// True if the table has no rows at all (not even a header).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Non-blank rows after the header.
    ///
    /// Blank rows are dropped before indexing, so a row's position in the
    /// result is its data-row index.
    pub fn data_rows(&self) -> Vec<&[CellValue]> {
        self.rows
            .iter()
            .skip(1)
            .filter(|row| !row.iter().all(CellValue::is_blank))
            .map(Vec::as_slice)
            .collect()
    }
}
