//! Schedule summary CLI.
//!
//! Render the schedule summary fragment (grid or legacy table) from a
//! conference schedule CSV export.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use confprog::{ConverterBuilder, CsvToHtmlError, DocumentKind};

#[derive(Parser)]
#[command(name = "schedule-summary")]
#[command(about = "Render the schedule summary fragment from a schedule CSV")]
struct Cli {
    /// Schedule CSV file
    csv: PathBuf,

    /// Output file (writes to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input encoding label (WHATWG), e.g. utf-8, windows-1252
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Summary style: grid (column-major divs) or table (legacy)
    #[arg(long, default_value = "grid")]
    style: String,
}

fn parse_style(s: &str) -> Result<DocumentKind, CsvToHtmlError> {
    match s.to_lowercase().as_str() {
        "grid" => Ok(DocumentKind::ScheduleGrid),
        "table" => Ok(DocumentKind::ScheduleTable),
        other => Err(CsvToHtmlError::Config(format!(
            "Unknown summary style: '{}' (expected 'grid' or 'table')",
            other
        ))),
    }
}

fn run(cli: Cli) -> Result<(), CsvToHtmlError> {
    let converter = ConverterBuilder::new()
        .with_document(parse_style(&cli.style)?)
        .with_encoding(&cli.encoding)
        .build()?;

    let input = File::open(&cli.csv)?;
    match &cli.output {
        Some(path) => converter.convert(input, File::create(path)?)?,
        None => converter.convert(input, io::stdout())?,
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
