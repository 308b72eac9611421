use std::path::Path;

use polars::prelude::*;

use crate::error::SourceError;
use crate::excel::io::text_to_string;

/// Reads a CSV file as rows of text; the first row holds the column names.
/// Every column is read as a string so codes like `005` survive intact.
pub fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, SourceError> {
    let wrap = |source: PolarsError| SourceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(wrap)?
        .finish()
        .map_err(wrap)?;

    let header: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(header.len());
    for name in &header {
        let values = df
            .column(name)
            .and_then(|c| c.as_materialized_series().cast(&DataType::String))
            .map_err(wrap)?;
        let values = values
            .str()
            .map_err(wrap)?
            .into_iter()
            .map(|v| v.map(text_to_string).unwrap_or_default())
            .collect();
        columns.push(values);
    }

    let mut rows = Vec::with_capacity(df.height() + 1);
    rows.push(header);
    for i in 0..df.height() {
        rows.push(columns.iter().map(|col| col[i].clone()).collect());
    }
    Ok(rows)
}
