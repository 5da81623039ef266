//! Export format options.

use clap::ValueEnum;

/// Output format for problem reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportExportFormat {
    /// CSV with display-format dates (UTF-8 BOM, CRLF rows)
    #[default]
    Csv,
    /// One JSON object per line with ISO dates
    Jsonl,
}

/// Output format for sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum SiteExportFormat {
    /// Excel workbook with a single `Sites` sheet
    #[default]
    Xlsx,
    /// CSV with the same flattened columns
    Csv,
}
