// --- zlp-scheduler: study window finder ---

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zlp_scheduler::{collect_sections, plan, Config, OutputFormat, SchedulerError};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    let config = Config::parse();
    init_logging(config.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let repo = match collect_sections(&config, &mut input, &mut out) {
        Ok(r) => r,
        Err(SchedulerError::Source(e)) => {
            eprintln!("[file-load error] {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let report = match plan(&repo) {
        Ok(r) => r,
        Err(SchedulerError::NoSections) => {
            println!("\nNo data entered; nothing to compute.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match config.format {
        OutputFormat::Text => println!("\n{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
