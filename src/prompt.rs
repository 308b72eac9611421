//! Line-based interactive entry of sections.

use std::io::{self, BufRead, Write};

use crate::error::ValidationError;
use crate::models::RawRecord;
use crate::repository::SectionRepository;

/// Asks for a spreadsheet path. `None` when the user just presses Enter
/// or input is closed.
pub fn ask_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "Spreadsheet path (Enter to skip): ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let path = line.trim();
    Ok((!path.is_empty()).then(|| path.to_string()))
}

/// Reads `SUBJ NUM DAYS HH:MM DURATION` lines into `repo` until `done` or
/// end of input. Returns the number of accepted sections.
pub fn read_sections<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    repo: &mut SectionRepository,
) -> io::Result<usize> {
    writeln!(out, "\nEnter each section:")?;
    writeln!(out, "  <SUBJ> <NUM|NUML> <DAYS> <HH:MM> <DURATION>")?;
    writeln!(out, "Type 'done' when finished.\n")?;

    let mut accepted = 0;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("done") {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let result = RawRecord::from_line(trimmed)
            .map_err(ValidationError::FieldCount)
            .and_then(|record| repo.ingest(&record).map(|_| ()));
        match result {
            Ok(()) => {
                accepted += 1;
                writeln!(out, "Success!")?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }
    Ok(accepted)
}
