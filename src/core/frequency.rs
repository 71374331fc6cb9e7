//! Frequency cell parsing: receive frequency, duplex direction and repeater offset

use crate::core::diagnostics::Diagnostic;
use crate::error::ChirpResult;
use regex::Regex;

/// Transmit offset direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Duplex {
    #[default]
    Simplex,
    Plus,
    Minus,
}

impl Duplex {
    /// CHIRP column text: `""`, `"+"` or `"-"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Duplex::Simplex => "",
            Duplex::Plus => "+",
            Duplex::Minus => "-",
        }
    }

    /// Duplex marker in the text following the frequency; `+` wins over `-`
    fn from_suffix(suffix: &str) -> Self {
        if suffix.contains('+') {
            Duplex::Plus
        } else if suffix.contains('-') {
            Duplex::Minus
        } else {
            Duplex::Simplex
        }
    }
}

/// Parsed frequency cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrequencyReading {
    /// Receive frequency in MHz, 0 when the cell held no number
    pub frequency: f64,
    pub duplex: Duplex,
    /// Offset magnitude in MHz
    pub offset: f64,
}

/// Standard repeater split for a band, in MHz
///
/// 70cm repeats 5 MHz, 1.25m 1.6 MHz, 2m 600 kHz. Below 100 MHz is treated as simplex.
pub fn band_offset(frequency: f64) -> f64 {
    if frequency > 400.0 {
        5.0
    } else if frequency > 200.0 {
        1.6
    } else if frequency > 100.0 {
        0.6
    } else {
        0.0
    }
}

/// Parses cells like `"146.94-"` or `"444.9 +"`
pub struct FrequencyNormalizer {
    leading_number: Regex,
}

impl FrequencyNormalizer {
    pub fn new() -> ChirpResult<Self> {
        Ok(Self {
            leading_number: Regex::new(r"^[0-9]+\.?[0-9]*")?,
        })
    }

    /// Parse a frequency cell's text. Unparseable text yields `(0, "", 0.0)`.
    pub fn normalize(&self, text: &str, diagnostics: &mut Vec<Diagnostic>) -> FrequencyReading {
        let text = text.trim();
        let Some(number) = self.leading_number.find(text) else {
            return FrequencyReading::default();
        };

        let frequency: f64 = match number.as_str().parse() {
            Ok(f) => f,
            Err(_) => return FrequencyReading::default(),
        };

        let mut duplex = Duplex::from_suffix(&text[number.end()..]);
        if duplex == Duplex::Simplex {
            return FrequencyReading {
                frequency,
                duplex,
                offset: 0.0,
            };
        }

        // UHF repeaters on this band plan always transmit above the output
        if duplex == Duplex::Minus && frequency > 400.0 {
            tracing::warn!(frequency, "negative offset on high band, using +");
            diagnostics.push(Diagnostic::NegativeHighBandOffset { frequency });
            duplex = Duplex::Plus;
        }

        FrequencyReading {
            frequency,
            duplex,
            offset: band_offset(frequency),
        }
    }
}
