//! Error types for record validation, record sources and the planning run.

use std::path::PathBuf;

use thiserror::Error;

/// A single record broke one of the input rules. The record is skipped;
/// the rest of the input is still processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("course code malformed: '{0}' (e.g. MEEN 221 or MEEN 221L)")]
    CourseCode(String),

    #[error("days must be a combination of MTWRF, got '{0}'")]
    Days(String),

    #[error("start must be HH:MM 24-hour, got '{0}'")]
    StartTime(String),

    #[error("duration must be a positive integer, got '{0}'")]
    Duration(String),

    #[error("expected exactly 5 fields (SUBJ NUM DAYS HH:MM DURATION), got {0}")]
    FieldCount(usize),
}

/// The record source as a whole could not be read. Fatal for the run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file must be .xlsx, .xls, or .csv: '{0}'")]
    UnsupportedExtension(PathBuf),

    #[error("missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("workbook '{0}' has no worksheets")]
    EmptyWorkbook(PathBuf),

    #[error("cannot read workbook '{path}': {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("cannot read csv '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("no valid sections; nothing to compute")]
    NoSections,

    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}
