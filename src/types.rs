use serde::Serialize;
use std::fmt;

//==============================================================================
// Cells and Rows
//==============================================================================

/// A single spreadsheet cell, reduced to the scalar kinds the converter cares about
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    /// Integer value of the cell, if it holds a whole number
    ///
    /// Spreadsheet engines store whole numbers as floats, so `Float(3.0)` counts.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Whether the cell carries a value at all (empty text, zero and false do not)
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Int(i) => *i != 0,
            CellValue::Float(f) => *f != 0.0,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Bool(b) => *b,
        }
    }

    /// Text rendering of the cell as a spreadsheet would display it
    ///
    /// `Empty` becomes the empty string and whole floats lose their fraction (`12.0` -> `"12"`).
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

/// One input row: location, frequency, tone, name, comment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    pub location: CellValue,
    pub frequency: CellValue,
    pub tone: CellValue,
    pub name: CellValue,
    pub comment: CellValue,
}

impl RawRow {
    pub fn new(
        location: impl Into<CellValue>,
        frequency: impl Into<CellValue>,
        tone: impl Into<CellValue>,
        name: impl Into<CellValue>,
        comment: impl Into<CellValue>,
    ) -> Self {
        Self {
            location: location.into(),
            frequency: frequency.into(),
            tone: tone.into(),
            name: name.into(),
            comment: comment.into(),
        }
    }

    /// Build a row from the leading cells of a spreadsheet row; missing cells are empty
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = CellValue>,
    {
        let mut cells = cells.into_iter();
        let mut next = || cells.next().unwrap_or_default();
        Self {
            location: next(),
            frequency: next(),
            tone: next(),
            name: next(),
            comment: next(),
        }
    }

    /// Location number when this is a data row; headers and dividers yield `None`
    pub fn data_location(&self) -> Option<i64> {
        self.location.as_integer()
    }
}

//==============================================================================
// Naming Policy
//==============================================================================

/// How channel names are shortened and cased for the radio's display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFormatPolicy {
    /// 7 characters, upper case
    #[default]
    Default,
    /// 8 characters, case preserved
    Loose,
    /// 6 characters, upper case
    Strict,
}

impl NameFormatPolicy {
    /// Select the policy from the `--loose` / `--strict` flags
    pub fn from_flags(loose: bool, strict: bool) -> crate::ChirpResult<Self> {
        match (loose, strict) {
            (true, true) => Err(crate::ChirpError::ConflictingPolicies),
            (true, false) => Ok(NameFormatPolicy::Loose),
            (false, true) => Ok(NameFormatPolicy::Strict),
            (false, false) => Ok(NameFormatPolicy::Default),
        }
    }

    pub fn max_length(&self) -> usize {
        match self {
            NameFormatPolicy::Default => 7,
            NameFormatPolicy::Loose => 8,
            NameFormatPolicy::Strict => 6,
        }
    }

    pub fn force_upper_case(&self) -> bool {
        !matches!(self, NameFormatPolicy::Loose)
    }
}

impl fmt::Display for NameFormatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NameFormatPolicy::Default => "default",
            NameFormatPolicy::Loose => "loose",
            NameFormatPolicy::Strict => "strict",
        };
        write!(f, "{}", name)
    }
}

//==============================================================================
// Output Record
//==============================================================================

/// CHIRP column names, in output order
pub const FIELD_NAMES: [&str; 18] = [
    "Location",
    "Name",
    "Frequency",
    "Duplex",
    "Offset",
    "Tone",
    "rToneFreq",
    "cToneFreq",
    "DtcsCode",
    "DtcsPolarity",
    "Mode",
    "TStep",
    "Skip",
    "Comment",
    "URCALL",
    "RPT1CALL",
    "RPT2CALL",
    "DVCODE",
];

/// One CHIRP memory channel. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    #[serde(rename = "Location")]
    pub location: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Frequency")]
    pub frequency: String,
    #[serde(rename = "Duplex")]
    pub duplex: String,
    #[serde(rename = "Offset")]
    pub offset: String,
    #[serde(rename = "Tone")]
    pub tone: String,
    #[serde(rename = "rToneFreq")]
    pub r_tone_freq: String,
    #[serde(rename = "cToneFreq")]
    pub c_tone_freq: String,
    #[serde(rename = "DtcsCode")]
    pub dtcs_code: String,
    #[serde(rename = "DtcsPolarity")]
    pub dtcs_polarity: String,
    #[serde(rename = "Mode")]
    pub mode: String,
    #[serde(rename = "TStep")]
    pub t_step: String,
    #[serde(rename = "Skip")]
    pub skip: String,
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "URCALL")]
    pub urcall: String,
    #[serde(rename = "RPT1CALL")]
    pub rpt1call: String,
    #[serde(rename = "RPT2CALL")]
    pub rpt2call: String,
    #[serde(rename = "DVCODE")]
    pub dvcode: String,
}

impl NormalizedRecord {
    pub const DTCS_CODE: &'static str = "023";
    pub const DTCS_POLARITY: &'static str = "NN";
    pub const MODE: &'static str = "FM";
    pub const TUNING_STEP: &'static str = "5.00";

    /// Field values in CSV column order, paired with their column names
    pub fn fields(&self) -> [(&'static str, String); 18] {
        let values = [
            self.location.to_string(),
            self.name.clone(),
            self.frequency.clone(),
            self.duplex.clone(),
            self.offset.clone(),
            self.tone.clone(),
            self.r_tone_freq.clone(),
            self.c_tone_freq.clone(),
            self.dtcs_code.clone(),
            self.dtcs_polarity.clone(),
            self.mode.clone(),
            self.t_step.clone(),
            self.skip.clone(),
            self.comment.clone(),
            self.urcall.clone(),
            self.rpt1call.clone(),
            self.rpt2call.clone(),
            self.dvcode.clone(),
        ];
        let mut i = 0;
        values.map(|value| {
            let pair = (FIELD_NAMES[i], value);
            i += 1;
            pair
        })
    }
}

/// Fixed-point text for a float: shortest round-trip digits, `.0` on whole numbers
///
/// `144.9` -> `"144.9"`, `5.0` -> `"5.0"`. Never scientific notation.
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
