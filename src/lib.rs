// Library root of `zlp_scheduler`.
// Collects sections from a sheet or the prompt, greedily picks one section
// per multi-section course, and reports the free 100-minute study windows.
pub mod algorithm;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod prompt;
pub mod report;
pub mod repository;

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

pub use config::{Config, OutputFormat};
pub use error::{SchedulerError, SourceError, ValidationError};
pub use report::Report;
pub use repository::SectionRepository;

use crate::algorithm::select_sections;
use crate::models::RawRecord;

/// Validates each record into `repo`. Bad records are logged and skipped.
/// Returns how many were accepted.
pub fn ingest_records(repo: &mut SectionRepository, records: &[RawRecord]) -> usize {
    let mut accepted = 0;
    for (i, record) in records.iter().enumerate() {
        match repo.ingest(record) {
            Ok(_) => accepted += 1,
            // header is row 1
            Err(e) => warn!(row = i + 2, "record skipped: {}", e),
        }
    }
    accepted
}

/// Loads a sheet and ingests its rows.
pub fn load_file(repo: &mut SectionRepository, path: &Path) -> Result<usize, SourceError> {
    let records = excel::load_records(path)?;
    let accepted = ingest_records(repo, &records);
    info!(accepted, rejected = records.len() - accepted, "sheet ingested");
    Ok(accepted)
}

/// Gathers sections the way the command line does: the configured sheet
/// first, otherwise an optional path prompt, then line entry if nothing
/// was loaded.
pub fn collect_sections<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<SectionRepository, SchedulerError> {
    let mut repo = SectionRepository::new();

    if let Some(path) = config.source_path() {
        load_file(&mut repo, &path)?;
        loaded_notice(config, out)?;
    } else if config.interactive() {
        if let Some(path) = prompt::ask_path(input, out)? {
            load_file(&mut repo, Path::new(&path))?;
            loaded_notice(config, out)?;
        }
    }

    if repo.is_empty() && config.interactive() {
        prompt::read_sections(input, out, &mut repo)?;
    }
    Ok(repo)
}

fn loaded_notice<W: Write>(config: &Config, out: &mut W) -> std::io::Result<()> {
    // keeps JSON output parseable
    if config.format == OutputFormat::Text {
        writeln!(out, "[spreadsheet] sections loaded successfully")?;
    }
    Ok(())
}

/// Runs the scheduling core over an already filled repository.
pub fn plan(repo: &SectionRepository) -> Result<Report, SchedulerError> {
    if repo.is_empty() {
        return Err(SchedulerError::NoSections);
    }
    info!(
        courses = repo.course_count(),
        sections = repo.section_count(),
        "planning"
    );
    let selection = select_sections(repo.partition());
    Ok(Report::build(&selection))
}
