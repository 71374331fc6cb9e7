//! CLI command handlers

pub mod commands;

pub use commands::{convert, convert_rows, ConvertConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
