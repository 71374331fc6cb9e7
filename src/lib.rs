//! CHIRP Convert - repeater spreadsheet to CHIRP CSV
//!
//! Reads a frequency list workbook (location, frequency, tone, name, comment
//! per row) and produces the CSV layout CHIRP imports as memory channels.
//!
//! # Example
//!
//! ```no_run
//! use chirp_convert::core::RowAssembler;
//! use chirp_convert::excel::WorkbookImporter;
//! use chirp_convert::types::NameFormatPolicy;
//! use chirp_convert::writer;
//! use std::path::Path;
//!
//! let rows = WorkbookImporter::new("frequencies.xlsx").import()?;
//! let assembler = RowAssembler::new(NameFormatPolicy::Default)?;
//! let conversion = assembler.assemble_all(rows);
//!
//! for warning in &conversion.diagnostics {
//!     eprintln!("{}", warning);
//! }
//! writer::write_csv_file(Path::new("output.csv"), &conversion.records)?;
//! # Ok::<(), chirp_convert::error::ChirpError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ChirpError, ChirpResult};
pub use types::{CellValue, NameFormatPolicy, NormalizedRecord, RawRow};
