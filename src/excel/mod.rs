//! Section sources read from disk.
//!
//! Submodules:
//! - `io`: cell normalization and header/column mapping shared by all sources
//! - `workbook`: `.xlsx` / `.xls` through calamine
//! - `csv`: `.csv` through polars

/// Helpers shared by the readers
pub mod io;

/// Spreadsheet reader: `read_workbook_rows`
mod workbook;

/// CSV reader: `read_csv_rows`
mod csv;

use std::path::Path;

use tracing::info;

use crate::error::SourceError;
use crate::models::RawRecord;

/// Columns a sheet must carry, in record field order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Subject", "Number", "Days", "Start", "Duration"];

/// Sheet looked up in the working directory when no path is given.
pub const DEFAULT_SHEET: &str = "sections.xlsx";

/// Reads every row of `path` into raw records, choosing the reader by
/// file extension. Rows are not validated here.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, SourceError> {
    if !path.is_file() {
        return Err(SourceError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let rows = match ext.as_str() {
        "xlsx" | "xls" => workbook::read_workbook_rows(path)?,
        "csv" => csv::read_csv_rows(path)?,
        _ => return Err(SourceError::UnsupportedExtension(path.to_path_buf())),
    };

    let records = io::rows_to_records(&rows)?;
    info!(path = %path.display(), rows = records.len(), "records loaded");
    Ok(records)
}
