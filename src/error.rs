use std::path::PathBuf;
use thiserror::Error;

pub type ChirpResult<T> = Result<T, ChirpError>;

#[derive(Error, Debug)]
pub enum ChirpError {
    #[error("--loose and --strict cannot be used together")]
    ConflictingPolicies,

    #[error("{} is not a file", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl ChirpError {
    /// Process exit status for this error.
    ///
    /// Usage errors get their own codes so scripts can tell a bad invocation
    /// from a bad workbook. 2 stays reserved for argument parsing errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            ChirpError::ConflictingPolicies => 6,
            ChirpError::InputNotFound(_) => 3,
            ChirpError::Workbook(_) | ChirpError::SheetNotFound(_) => 4,
            ChirpError::Csv(_) | ChirpError::Io(_) => 5,
            ChirpError::Pattern(_) => 1,
        }
    }
}
