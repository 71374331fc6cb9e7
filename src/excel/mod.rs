//! Spreadsheet import
//!
//! Reads the leading five columns of a worksheet (location, frequency, tone,
//! name, comment) into `RawRow`s. Any format calamine understands will do.

mod importer;

pub use importer::{convert_cell, RowSource, WorkbookImporter, ROW_WIDTH};
