//! Command-line and environment configuration.
//!
//! `.env` is loaded before parsing, so every `env = ...` key below may also
//! come from there.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::excel::DEFAULT_SHEET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "zlp-scheduler")]
#[command(about = "List every 100-minute study window (starts 08:00-16:10) for a weekly class schedule")]
pub struct Config {
    /// Spreadsheet or CSV with columns Subject, Number, Days, Start, Duration
    pub file: Option<PathBuf>,

    /// Sheet used when no FILE is given and it exists in the working directory
    #[arg(long, env = "ZLP_SECTIONS", default_value = DEFAULT_SHEET)]
    pub sheet: PathBuf,

    /// Report format
    #[arg(long, value_enum, env = "ZLP_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Never prompt; only read sections from files
    #[arg(long)]
    pub no_prompt: bool,

    /// Log selection details to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Config {
    /// File to load before any prompting: the explicit FILE, or the default
    /// sheet when present.
    pub fn source_path(&self) -> Option<PathBuf> {
        match &self.file {
            Some(p) => Some(p.clone()),
            None if self.sheet.is_file() => Some(self.sheet.clone()),
            None => None,
        }
    }

    pub fn interactive(&self) -> bool {
        !self.no_prompt
    }
}
