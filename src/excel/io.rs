use calamine::Data;

use crate::error::SourceError;
use crate::excel::REQUIRED_COLUMNS;
use crate::models::{to_hhmm, RawRecord};

/// Renders a numeric cell without a trailing `.0` when it is integral.
pub fn number_to_string(f: f64) -> String {
    if (f.floor() - f).abs() < f64::EPSILON {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

/// Converts a calamine cell to the text the validator expects.
/// Spreadsheet time cells (fraction of a day) become `HH:MM`.
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => number_to_string(*f),
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::DateTime(dt) => {
            let minutes = (dt.as_f64().fract() * 1440.0).round() as u32;
            to_hhmm(minutes % 1440)
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Normalizes a text cell coming from a CSV: trims and collapses integral
/// decimals (`100.0` → `100`).
pub fn text_to_string(s: &str) -> String {
    let t = s.trim();
    if t.contains('.') {
        if let Ok(f) = t.parse::<f64>() {
            if f.fract() == 0.0 {
                return number_to_string(f);
            }
        }
    }
    t.to_string()
}

/// Positions of the required columns in `header`, matched exactly after
/// trimming. Every missing name is reported at once.
pub fn column_indices(header: &[String]) -> Result<[usize; 5], SourceError> {
    let mut idx = [0usize; 5];
    let mut missing = Vec::new();
    for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        match header.iter().position(|h| h.trim() == name) {
            Some(i) => *slot = i,
            None => missing.push(name.to_string()),
        }
    }
    if missing.is_empty() {
        Ok(idx)
    } else {
        Err(SourceError::MissingColumns(missing))
    }
}

/// Maps a header row plus data rows onto records. Subject and days are
/// upper-cased; blank rows are skipped.
pub fn rows_to_records(rows: &[Vec<String>]) -> Result<Vec<RawRecord>, SourceError> {
    let Some((header, body)) = rows.split_first() else {
        return Err(SourceError::MissingColumns(
            REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        ));
    };
    let [subject, number, days, start, duration] = column_indices(header)?;

    let field = |row: &Vec<String>, i: usize| row.get(i).map(|s| s.trim().to_string()).unwrap_or_default();

    let records = body
        .iter()
        .filter(|row| row.iter().any(|c| !c.trim().is_empty()))
        .map(|row| RawRecord {
            subject: field(row, subject).to_uppercase(),
            number: field(row, number),
            days: field(row, days).to_uppercase(),
            start: field(row, start),
            duration: field(row, duration),
        })
        .collect();
    Ok(records)
}
