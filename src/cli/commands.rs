use crate::core::{Conversion, RowAssembler};
use crate::error::{ChirpError, ChirpResult};
use crate::excel::{RowSource, WorkbookImporter};
use crate::types::NameFormatPolicy;
use crate::writer;
use colored::Colorize;
use std::path::PathBuf;

/// Default input workbook when none is given on the command line
pub const DEFAULT_INPUT: &str = "frequencies.xlsx";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub policy: NameFormatPolicy,
    /// Worksheet to read; the first sheet when `None`
    pub sheet: Option<String>,
    pub verbose: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            policy: NameFormatPolicy::Default,
            sheet: None,
            verbose: false,
        }
    }
}

/// Execute the convert command
///
/// Every row is assembled before the output file is created, so a failed run
/// leaves nothing behind.
pub fn convert(config: &ConvertConfig) -> ChirpResult<Conversion> {
    if !config.input.is_file() {
        return Err(ChirpError::InputNotFound(config.input.clone()));
    }

    let mut importer = WorkbookImporter::new(&config.input);
    if let Some(sheet) = &config.sheet {
        importer = importer.with_sheet(sheet.clone());
    }
    convert_rows(&mut importer, config)
}

/// Convert rows from any source and write them to `config.output`
pub fn convert_rows<S: RowSource>(
    source: &mut S,
    config: &ConvertConfig,
) -> ChirpResult<Conversion> {
    if config.verbose {
        println!("{}", "📻 CHIRP Convert".bold().green());
        println!("   Input:  {}", config.input.display());
        println!("   Output: {}", config.output.display());
        println!("   Names:  {} policy\n", config.policy.to_string().cyan());
        println!("{}", "📖 Reading rows...".cyan());
    }

    let rows = source.rows()?;
    tracing::info!(rows = rows.len(), input = %config.input.display(), "rows loaded");

    let assembler = RowAssembler::new(config.policy)?;
    let conversion = assembler.assemble_all(rows);

    if config.verbose {
        println!(
            "   Found {} channels, skipped {} other rows\n",
            conversion.records.len(),
            conversion.skipped_rows
        );
        println!("{}", "💾 Writing CSV file...".cyan());
    }

    for warning in &conversion.diagnostics {
        eprintln!("{}", warning.to_string().yellow());
    }

    writer::write_csv_file(&config.output, &conversion.records)?;
    tracing::info!(
        records = conversion.records.len(),
        output = %config.output.display(),
        "csv written"
    );

    println!(
        "{} {} ({} channels)",
        "✅ Created".bold().green(),
        config.output.display(),
        conversion.records.len()
    );

    Ok(conversion)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
