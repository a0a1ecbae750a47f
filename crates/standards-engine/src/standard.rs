//! Standard Registry

use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Published vibration standards supported by the classifier.
///
/// The registry is closed: variants are fixed at build time, and external
/// identifier strings resolve through [`FromStr`] with case-sensitive
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Standard {
    /// ISO 2372 machine vibration severity
    Iso2372,
    /// DIN 4150 structural vibration
    Din4150,
    /// NCHRP construction vibration guidance
    Nchrp,
    /// Dominant-frequency rule over the FFT spectrum
    FftAnalysis,
    /// BS 7385 building vibration damage
    Bs7385,
    /// IS 2974 foundations for reciprocating machines
    Is2974Reciprocating,
    /// IS 2974 foundations for medium/high-speed rotary machines
    Is2974RotaryMedHigh,
    /// IS 2974 foundations for low-speed rotary machines
    Is2974RotaryLow,
    /// IS 2974 foundations for impact machines
    Is2974Impact,
    /// IS 1893 general structures
    Is1893General,
    /// IS 1893 industrial structures
    Is1893Industrial,
    /// ISO 4866 building vibration measurement
    Iso4866,
}

/// Physical quantity a rule thresholds on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Velocity in mm/s, derived from peak-to-peak velocity
    VelocityMmS,
    /// Peak-to-peak velocity in inches/sec
    VelocityInS,
    /// Acceleration magnitude |a| in m/s²
    AccelerationMS2,
    /// Dominant frequency of the amplitude spectrum, in Hz
    DominantFrequencyHz,
}

/// Threshold rule of one standard: unsafe when quantity strictly exceeds
/// the threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rule {
    /// Quantity compared against the threshold
    pub quantity: Quantity,
    /// Threshold in the quantity's unit; equal-to-threshold is safe
    pub threshold: f64,
}

impl Standard {
    /// Every registered standard, in registry order
    pub fn all() -> &'static [Standard] {
        &[
            Standard::Iso2372,
            Standard::Din4150,
            Standard::Nchrp,
            Standard::FftAnalysis,
            Standard::Bs7385,
            Standard::Is2974Reciprocating,
            Standard::Is2974RotaryMedHigh,
            Standard::Is2974RotaryLow,
            Standard::Is2974Impact,
            Standard::Is1893General,
            Standard::Is1893Industrial,
            Standard::Iso4866,
        ]
    }

    /// External identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::Iso2372 => "ISO2372",
            Standard::Din4150 => "DIN4150",
            Standard::Nchrp => "NCHRP",
            Standard::FftAnalysis => "FFT_ANALYSIS",
            Standard::Bs7385 => "BS7385",
            Standard::Is2974Reciprocating => "IS2974_RECIPROCATING",
            Standard::Is2974RotaryMedHigh => "IS2974_ROTARY_MED_HIGH",
            Standard::Is2974RotaryLow => "IS2974_ROTARY_LOW",
            Standard::Is2974Impact => "IS2974_IMPACT",
            Standard::Is1893General => "IS1893_GENERAL",
            Standard::Is1893Industrial => "IS1893_INDUSTRIAL",
            Standard::Iso4866 => "ISO4866",
        }
    }

    /// The standard's threshold rule
    pub fn rule(&self) -> Rule {
        match self {
            Standard::Iso2372 => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 1.8,
            },
            Standard::Din4150 => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 5.0,
            },
            Standard::Nchrp => Rule {
                quantity: Quantity::VelocityInS,
                threshold: 0.1,
            },
            Standard::FftAnalysis => Rule {
                quantity: Quantity::DominantFrequencyHz,
                threshold: 50.0,
            },
            Standard::Bs7385 => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 15.0,
            },
            Standard::Is2974Reciprocating => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 2.5,
            },
            Standard::Is2974RotaryMedHigh => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 3.5,
            },
            Standard::Is2974RotaryLow => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 2.3,
            },
            Standard::Is2974Impact => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 5.0,
            },
            Standard::Is1893General => Rule {
                quantity: Quantity::AccelerationMS2,
                threshold: 0.05,
            },
            Standard::Is1893Industrial => Rule {
                quantity: Quantity::AccelerationMS2,
                threshold: 0.03,
            },
            Standard::Iso4866 => Rule {
                quantity: Quantity::VelocityMmS,
                threshold: 5.0,
            },
        }
    }

    /// Whether the rule produces one label for the whole table instead of
    /// one per record.
    pub fn labels_whole_table(&self) -> bool {
        matches!(self.rule().quantity, Quantity::DominantFrequencyHz)
    }
}

impl FromStr for Standard {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Standard::all()
            .iter()
            .find(|std| std.as_str() == s)
            .copied()
            .ok_or_else(|| ClassifyError::UnknownStandard(s.to_string()))
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
