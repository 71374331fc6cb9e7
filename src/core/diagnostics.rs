//! Non-fatal warnings raised while normalizing a row
//!
//! Normalizers never fail. When they have to correct or tolerate odd input
//! they record a [`Diagnostic`] instead, and the caller decides how to report it.

use std::fmt;

/// A row-level data anomaly
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Name still exceeds the policy's display width after hyphens and spaces were removed
    NameTooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// A `-` offset on a band that only repeats up; duplex was switched to `+`
    NegativeHighBandOffset { frequency: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NameTooLong {
                name,
                length,
                max_length,
            } => write!(
                f,
                "name '{}' is {} characters, longer than {}",
                name, length, max_length
            ),
            Diagnostic::NegativeHighBandOffset { frequency } => write!(
                f,
                "negative offset on {} MHz is not valid, using +",
                frequency
            ),
        }
    }
}

/// A diagnostic tied to the channel it came from
#[derive(Debug, Clone, PartialEq)]
pub struct RowDiagnostic {
    pub location: i64,
    pub diagnostic: Diagnostic,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "⚠️  Warning: channel {} - {}", self.location, self.diagnostic)
    }
}
