//! Accepted papers CLI.
//!
//! Render the accepted papers list fragment from a papers CSV with
//! Type, Title and Authors columns.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use confprog::{ConverterBuilder, CsvToHtmlError, DocumentKind};

#[derive(Parser)]
#[command(name = "accepted-papers")]
#[command(about = "Render the accepted papers fragment from a papers CSV")]
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
        .with_document(DocumentKind::AcceptedPapers)
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
