//! confprog - CSV to HTML fragment converters for conference program pages
//!
//! This crate converts the spreadsheet exports used to maintain an academic
//! conference website (schedule, accepted papers, program committee, posters)
//! into the HTML fragments embedded in the site's pages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use confprog::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings (schedule summary grid)
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Open the schedule CSV export
//!     let input = File::open("schedule.csv")?;
//!
//!     // Create the output fragment file
//!     let output = File::create("schedule_summary.html")?;
//!
//!     // Convert CSV to the summary grid fragment
//!     converter.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory conversion, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use confprog::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().build()?;
//! let csv_data: Vec<u8> = vec![]; // Your CSV bytes
//! let mut html_output = Vec::new();
//! converter.convert(Cursor::new(csv_data), &mut html_output)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::fs::File;
//! use chrono::Weekday;
//! use confprog::{ConverterBuilder, DocumentKind};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Render the full program, linking Wednesday's poster session
//!     // to the externalized poster page
//!     let converter = ConverterBuilder::new()
//!         .with_document(DocumentKind::FullSchedule)
//!         .with_poster_page(Weekday::Wed, 'A')
//!         .with_encoding("windows-1252")
//!         .build()?;
//!
//!     let input = File::open("schedule.csv")?;
//!     let output = File::create("full_schedule.html")?;
//!     converter.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Convert to String
//!
//! ```rust,no_run
//! use std::fs::File;
//! use confprog::{ConverterBuilder, DocumentKind};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_document(DocumentKind::PcMembers)
//!         .build()?;
//!     let input = File::open("committee.csv")?;
//!
//!     // Convert to String instead of writing to a file
//!     let html = converter.convert_to_string(input)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```

mod anchor;
mod api;
mod builder;
mod columns;
mod datetime;
mod error;
mod grid;
mod output;
mod parser;
mod types;

// 公開API
pub use api::DocumentKind;
pub use builder::{Converter, ConverterBuilder};
pub use error::CsvToHtmlError;
