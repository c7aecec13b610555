//! Full program CLI.
//!
//! Render the full program fragment from a conference schedule CSV. Poster
//! CSVs passed with `--poster-csv DAY=PATH` are rendered to side files
//! (`poster_sessions_a.txt`, ...) next to the output, and the matching
//! day's poster session slot links to the externalized page.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use chrono::Weekday;
use clap::Parser;

use confprog::{ConverterBuilder, CsvToHtmlError, DocumentKind};

#[derive(Parser)]
#[command(name = "full-schedule")]
#[command(about = "Render the full program fragment from a schedule CSV")]
struct Cli {
    /// Schedule CSV file
    csv: PathBuf,

    /// Output file (writes to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input encoding label (WHATWG), e.g. utf-8, windows-1252
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Poster CSV for one day, as DAY=PATH (repeatable; pages are
    /// lettered A, B, ... in argument order)
    #[arg(long = "poster-csv", value_name = "DAY=PATH")]
    poster_csv: Vec<String>,
}

/// Splits a `DAY=PATH` spec. The day tolerates spelling variants
/// (`wednesday`, `Wed`, `WEDNESDAY:`) by keeping only ASCII letters.
fn parse_poster_spec(spec: &str) -> Result<(Weekday, PathBuf), CsvToHtmlError> {
    let (day_raw, path) = spec.split_once('=').ok_or_else(|| {
        CsvToHtmlError::Config(format!(
            "Invalid --poster-csv value: '{}' (expected DAY=PATH)",
            spec
        ))
    })?;

    let day_key: String = day_raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    let day: Weekday = day_key.parse().map_err(|_| {
        CsvToHtmlError::Config(format!(
            "Unknown weekday in --poster-csv: '{}'",
            day_raw
        ))
    })?;

    Ok((day, PathBuf::from(path)))
}

fn run(cli: Cli) -> Result<(), CsvToHtmlError> {
    // Page letters follow argument order: A, B, ...
    let mut poster_pages = Vec::new();
    for (idx, spec) in cli.poster_csv.iter().enumerate() {
        let (day, path) = parse_poster_spec(spec)?;
        let letter = (b'A' + idx as u8) as char;
        poster_pages.push((day, letter, path));
    }

    let mut builder = ConverterBuilder::new()
        .with_document(DocumentKind::FullSchedule)
        .with_encoding(&cli.encoding);
    for &(day, letter, _) in &poster_pages {
        builder = builder.with_poster_page(day, letter);
    }
    let converter = builder.build()?;

    let input = File::open(&cli.csv)?;
    match &cli.output {
        Some(path) => converter.convert(input, File::create(path)?)?,
        None => converter.convert(input, io::stdout())?,
    }

    // Poster fragments land in the same directory as the output
    let side_dir = cli
        .output
        .as_ref()
        .and_then(|p| p.parent())
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    for (_, letter, path) in &poster_pages {
        let poster_converter = ConverterBuilder::new()
            .with_document(DocumentKind::PosterSession)
            .with_encoding(&cli.encoding)
            .with_poster_letter(*letter)
            .build()?;

        let fragment = poster_converter.convert_to_string(File::open(path)?)?;
        let side_path = side_dir.join(format!(
            "poster_sessions_{}.txt",
            letter.to_ascii_lowercase()
        ));
        fs::write(&side_path, fragment)?;
        log::info!("wrote poster fragment {}", side_path.display());
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
