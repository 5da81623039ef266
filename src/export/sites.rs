//! Site export as an Excel workbook or CSV.
//!
//! Nested ISP details are flattened into the twelve site columns; absent L2
//! IPs become empty cells.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use log::info;
use rust_xlsxwriter::{Format, Workbook};

use super::output::write_bytes;
use super::types::SiteExportFormat;
use crate::config::{SITES_SHEET_NAME, SITE_HEADERS, UTF8_BOM};
use crate::models::Site;

/// Flattens a site into export columns, in [`SITE_HEADERS`] order.
pub fn site_row(site: &Site) -> [String; 12] {
    let l2 = |ip: &Option<String>| ip.clone().unwrap_or_default();
    [
        site.site_location_name.clone(),
        site.device_name.clone(),
        site.sdwan_site_id.clone(),
        site.lan_ip.clone(),
        site.el_info.info.clone(),
        site.el_info.capacity.clone(),
        l2(&site.el_info.l2_ip),
        site.ilevant_info.info.clone(),
        site.ilevant_info.capacity.clone(),
        site.horizon_info.info.clone(),
        site.horizon_info.capacity.clone(),
        l2(&site.horizon_info.l2_ip),
    ]
}

/// Builds an `.xlsx` workbook with a bold header row on the `Sites` sheet.
pub fn sites_to_xlsx(sites: &[Site]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook
        .add_worksheet()
        .set_name(SITES_SHEET_NAME)
        .context("Failed to create Sites sheet")?;

    for (col, header) in SITE_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .with_context(|| format!("Failed to write header {}", header))?;
    }
    for (i, site) in sites.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in site_row(site).iter().enumerate() {
            worksheet
                .write_string(row, col as u16, value)
                .with_context(|| format!("Failed to write cell ({}, {})", row, col))?;
        }
    }

    workbook
        .save_to_buffer()
        .context("Failed to save XLSX workbook")
}

/// Serializes sites to CSV bytes (UTF-8 BOM, CRLF rows).
pub fn sites_to_csv(sites: &[Site]) -> Result<Vec<u8>> {
    let mut buf = UTF8_BOM.to_vec();
    {
        let mut csv = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(&mut buf);
        csv.write_record(SITE_HEADERS)?;
        for site in sites {
            csv.write_record(site_row(site))?;
        }
        csv.flush()?;
    }
    Ok(buf)
}

/// Exports sites in `format` to `output` (stdout if `None`).
pub fn export_sites(
    sites: &[Site],
    format: SiteExportFormat,
    output: Option<&Path>,
) -> Result<usize> {
    let bytes = match format {
        SiteExportFormat::Xlsx => sites_to_xlsx(sites)?,
        SiteExportFormat::Csv => sites_to_csv(sites)?,
    };
    write_bytes(&bytes, output)?;
    if let Some(path) = output {
        info!("Exported {} sites to {}", sites.len(), path.display());
    }
    Ok(sites.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IspInfo;
    use calamine::{open_workbook_auto_from_rs, Reader};
    use std::io::Cursor;

    fn site() -> Site {
        Site {
            id: "1".to_string(),
            site_location_name: "Tanta".to_string(),
            device_name: "FG-40F".to_string(),
            sdwan_site_id: "310".to_string(),
            lan_ip: "10.31.0.1".to_string(),
            el_info: IspInfo {
                info: "WE".to_string(),
                capacity: "30M".to_string(),
                l2_ip: Some("172.31.0.2".to_string()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_site_row_flattens_isp_links() {
        let row = site_row(&site());
        assert_eq!(row[0], "Tanta");
        assert_eq!(row[6], "172.31.0.2");
        assert_eq!(row[11], "");
    }

    #[test]
    fn test_sites_csv_has_twelve_columns() {
        let bytes = sites_to_csv(&[site()]).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first.split(',').count(), 12);
        assert!(text.contains("\r\nTanta,FG-40F,310,"));
    }

    #[test]
    fn test_xlsx_reads_back_with_sites_sheet() {
        let bytes = sites_to_xlsx(&[site()]).unwrap();
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Sites".to_string()]);
        let range = workbook.worksheet_range("Sites").unwrap();
        let rows: Vec<_> = range.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].to_string(), "Site Location");
        assert_eq!(rows[1][3].to_string(), "10.31.0.1");
    }
}
