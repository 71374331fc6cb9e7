use chirp_convert::cli::{self, ConvertConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use chirp_convert::error::ChirpResult;
use chirp_convert::types::NameFormatPolicy;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "chirp-convert")]
#[command(version)]
#[command(about = "Convert a repeater frequency spreadsheet to a CHIRP import CSV")]
#[command(long_about = "Convert a repeater frequency spreadsheet to a CHIRP import CSV.

Reads the first worksheet (or --sheet) of the workbook. Every row whose first
cell is a whole number becomes one memory channel; header and divider rows are
skipped. Columns: location, frequency, tone, name, comment.

FREQUENCY:  146.94-  444.9+  146.52     (offset chosen by band)
TONE:       100Hz  127.3 hz  88.5       (blank for no tone)

NAME POLICIES:
  default   7 characters, upper case
  --loose   8 characters, case preserved
  --strict  6 characters, upper case

EXIT CODES:
  2  invalid arguments
  3  input is not a file
  4  workbook could not be read
  5  output could not be written
  6  --loose and --strict given together

EXAMPLES:
  chirp-convert SARES.xlsx
  chirp-convert SARES.xlsx --strict -o uv5r.csv")]
struct Cli {
    /// Path to the frequency list workbook (.xlsx, .xls, .ods)
    #[arg(default_value = DEFAULT_INPUT, env = "CHIRP_INPUT")]
    input: PathBuf,

    /// Allow 8 character names and keep their case
    #[arg(short, long)]
    loose: bool,

    /// Limit names to 6 characters
    #[arg(short, long)]
    strict: bool,

    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT, env = "CHIRP_OUTPUT")]
    output: PathBuf,

    /// Worksheet to read instead of the first one
    #[arg(long)]
    sheet: Option<String>,

    /// Show progress while converting
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> ChirpResult<ConvertConfig> {
        Ok(ConvertConfig {
            policy: NameFormatPolicy::from_flags(self.loose, self.strict)?,
            input: self.input,
            output: self.output,
            sheet: self.sheet,
            verbose: self.verbose,
        })
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "chirp_convert=info"
    } else {
        "chirp_convert=error"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let result = args
        .into_config()
        .and_then(|config| cli::convert(&config).map(|_| ()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌ Error:".bold().red(), e);
            ExitCode::from(e.exit_code())
        }
    }
}
