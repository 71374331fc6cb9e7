//! Row assembly: one spreadsheet row in, one CHIRP record out

use crate::core::comment::normalize_comment;
use crate::core::diagnostics::{Diagnostic, RowDiagnostic};
use crate::core::frequency::FrequencyNormalizer;
use crate::core::name::normalize_name;
use crate::core::tone::ToneNormalizer;
use crate::error::ChirpResult;
use crate::types::{format_decimal, NameFormatPolicy, NormalizedRecord, RawRow};

/// A record plus whatever the normalizers had to say about its row
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRow {
    pub record: NormalizedRecord,
    pub diagnostics: Vec<Diagnostic>,
}

/// Output of a whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    pub records: Vec<NormalizedRecord>,
    pub diagnostics: Vec<RowDiagnostic>,
    /// Header, divider and blank rows that were passed over
    pub skipped_rows: usize,
}

/// Builds records under one naming policy. Construct once per run.
pub struct RowAssembler {
    policy: NameFormatPolicy,
    frequency: FrequencyNormalizer,
    tone: ToneNormalizer,
}

impl RowAssembler {
    pub fn new(policy: NameFormatPolicy) -> ChirpResult<Self> {
        Ok(Self {
            policy,
            frequency: FrequencyNormalizer::new()?,
            tone: ToneNormalizer::new()?,
        })
    }

    /// Assemble a data row. Rows without an integer location return `None`.
    pub fn assemble(&self, row: &RawRow) -> Option<AssembledRow> {
        let location = row.data_location()?;
        let mut diagnostics = Vec::new();

        let frequency = self
            .frequency
            .normalize(&row.frequency.to_text(), &mut diagnostics);
        let tone = self.tone.normalize(&row.tone);
        let name = normalize_name(&row.name.to_text(), self.policy, &mut diagnostics);

        let record = NormalizedRecord {
            location,
            name,
            frequency: format_decimal(frequency.frequency),
            duplex: frequency.duplex.as_str().to_string(),
            offset: format_decimal(frequency.offset),
            tone: tone.mode().to_string(),
            r_tone_freq: format_decimal(tone.r_tone_freq),
            c_tone_freq: format_decimal(tone.c_tone_freq),
            dtcs_code: NormalizedRecord::DTCS_CODE.to_string(),
            dtcs_polarity: NormalizedRecord::DTCS_POLARITY.to_string(),
            mode: NormalizedRecord::MODE.to_string(),
            t_step: NormalizedRecord::TUNING_STEP.to_string(),
            skip: String::new(),
            comment: normalize_comment(&row.comment),
            urcall: String::new(),
            rpt1call: String::new(),
            rpt2call: String::new(),
            dvcode: String::new(),
        };

        Some(AssembledRow {
            record,
            diagnostics,
        })
    }

    /// Assemble every data row in source order
    pub fn assemble_all<I>(&self, rows: I) -> Conversion
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut conversion = Conversion::default();
        for row in rows {
            let Some(assembled) = self.assemble(&row) else {
                conversion.skipped_rows += 1;
                continue;
            };
            let location = assembled.record.location;
            tracing::debug!(location, name = %assembled.record.name, "assembled channel");
            conversion
                .diagnostics
                .extend(assembled.diagnostics.into_iter().map(|diagnostic| RowDiagnostic {
                    location,
                    diagnostic,
                }));
            conversion.records.push(assembled.record);
        }
        conversion
    }
}
