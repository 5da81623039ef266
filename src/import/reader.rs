//! Table parsing for CSV and workbook files.
//!
//! The file is read asynchronously, then handed to the parser matching its
//! extension: the csv crate for `.csv`, calamine for spreadsheet workbooks
//! (only the first sheet is read).

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

use super::table::{CellValue, Table};
use crate::config::UTF8_BOM;
use crate::dates::serial_to_datetime;
use crate::error_handling::ImportError;

/// Supported table file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFileKind {
    Csv,
    Workbook,
}

impl TableFileKind {
    /// Picks the parser from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(TableFileKind::Csv),
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Ok(TableFileKind::Workbook),
            _ => Err(ImportError::UnsupportedFileType(
                path.display().to_string(),
            )),
        }
    }
}

/// Reads and parses a table file.
///
/// # Errors
///
/// Returns an [`ImportError`] if the extension is unsupported, the file cannot
/// be read, or the parser rejects its contents.
pub async fn read_table(path: &Path) -> Result<Table, ImportError> {
    let kind = TableFileKind::from_path(path)?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    parse_table(bytes, kind)
}

/// Parses raw file bytes of a known kind.
pub fn parse_table(bytes: Vec<u8>, kind: TableFileKind) -> Result<Table, ImportError> {
    match kind {
        TableFileKind::Csv => parse_csv(&bytes),
        TableFileKind::Workbook => parse_workbook(bytes),
    }
}

/// Parses CSV text; every cell becomes text. A leading UTF-8 BOM is ignored.
pub fn parse_csv(bytes: &[u8]) -> Result<Table, ImportError> {
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from).collect());
    }
    Ok(Table::new(rows))
}

/// Parses the first sheet of a workbook.
pub fn parse_workbook(bytes: Vec<u8>) -> Result<Table, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoSheets)?;
    debug!("Reading worksheet {:?}", sheet_name);

    let range = workbook.worksheet_range(&sheet_name)?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();
    Ok(Table::new(rows))
}

fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            serial_to_datetime(serial)
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Number(serial))
        }
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::from(s.as_str())),
        Data::DurationIso(s) => CellValue::from(s.as_str()),
    }
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
