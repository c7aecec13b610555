//! Author count CLI.
//!
//! Report how often each author string appears across the accepted
//! papers CSV, most frequent first. Useful for spotting inconsistent
//! author spellings before publishing the site.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use confprog::{ConverterBuilder, CsvToHtmlError, DocumentKind};

#[derive(Parser)]
#[command(name = "count-authors")]
#[command(about = "Report author occurrence counts from a papers CSV")]
struct Cli {
    /// Papers CSV file (Type, Title, Authors columns)
    csv: PathBuf,

    /// Output file (writes to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input encoding label (WHATWG), e.g. utf-8, windows-1252
    #[arg(long, default_value = "utf-8")]
    encoding: String,
}

fn run(cli: Cli) -> Result<(), CsvToHtmlError> {
    let converter = ConverterBuilder::new()
        .with_document(DocumentKind::AuthorCounts)
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
