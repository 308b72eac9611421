use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use crate::error::SourceError;
use crate::excel::io::cell_to_string;

/// Reads the first worksheet of an `.xlsx`/`.xls` file as rows of text.
pub fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>, SourceError> {
    let wrap = |source: calamine::Error| SourceError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(wrap)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SourceError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(wrap)?;

    Ok(range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect())
}
