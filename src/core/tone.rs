//! CTCSS tone cell parsing

use crate::error::ChirpResult;
use crate::types::CellValue;
use regex::Regex;

/// CHIRP's default tone when none is programmed
pub const DEFAULT_TONE_FREQ: f64 = 88.5;

/// Parsed tone cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSetting {
    pub enabled: bool,
    /// Transmit tone in Hz
    pub r_tone_freq: f64,
    /// Receive tone in Hz, always the default
    pub c_tone_freq: f64,
}

impl ToneSetting {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            r_tone_freq: DEFAULT_TONE_FREQ,
            c_tone_freq: DEFAULT_TONE_FREQ,
        }
    }

    /// CHIRP `Tone` column: `"Tone"` when enabled, otherwise empty
    pub fn mode(&self) -> &'static str {
        if self.enabled {
            "Tone"
        } else {
            ""
        }
    }
}

/// Pulls the tone out of cells like `"100Hz"`, `"127.3 hz"` or a bare number
pub struct ToneNormalizer {
    number: Regex,
}

impl ToneNormalizer {
    pub fn new() -> ChirpResult<Self> {
        Ok(Self {
            number: Regex::new(r"[0-9]+\.?[0-9]*")?,
        })
    }

    pub fn normalize(&self, cell: &CellValue) -> ToneSetting {
        if !cell.is_truthy() {
            return ToneSetting::disabled();
        }

        let text = cell.to_text();
        let tone = self
            .number
            .find(&text)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|tone| *tone > 0.0);

        match tone {
            Some(r_tone_freq) => ToneSetting {
                enabled: true,
                r_tone_freq,
                c_tone_freq: DEFAULT_TONE_FREQ,
            },
            None => ToneSetting::disabled(),
        }
    }
}
