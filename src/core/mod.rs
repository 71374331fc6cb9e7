//! Per-row field normalization

pub mod assembler;
pub mod comment;
pub mod diagnostics;
pub mod frequency;
pub mod name;
pub mod tone;

pub use assembler::{AssembledRow, Conversion, RowAssembler};
pub use comment::normalize_comment;
pub use diagnostics::{Diagnostic, RowDiagnostic};
pub use frequency::{band_offset, Duplex, FrequencyNormalizer, FrequencyReading};
pub use name::normalize_name;
pub use tone::{ToneNormalizer, ToneSetting, DEFAULT_TONE_FREQ};
