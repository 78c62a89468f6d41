//! Tip types and the outcome decision table

use serde::{Deserialize, Serialize};
use std::fmt;

/// A prediction category reported for every match
///
/// The five fixed categories are the ones the API promises. Any other key is
/// kept as `Unknown` so payloads from a newer model still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TipType {
    /// Match result: home, draw or away
    Winner,
    /// More than 2.5 goals in the match
    Over25,
    /// More than 1.5 goals in the match
    Over15,
    /// Two of the three results combined
    DoubleChance,
    /// Both teams to score
    Btts,
    /// A category this client does not know about
    Unknown(String),
}

impl TipType {
    /// The fixed tip types, in display order
    pub const ALL: [TipType; 5] = [
        TipType::Winner,
        TipType::Over25,
        TipType::Over15,
        TipType::DoubleChance,
        TipType::Btts,
    ];

    /// Key used by the API payloads
    pub fn key(&self) -> &str {
        match self {
            TipType::Winner => "winner",
            TipType::Over25 => "over_2_5",
            TipType::Over15 => "over_1_5",
            TipType::DoubleChance => "double_chance",
            TipType::Btts => "btts",
            TipType::Unknown(key) => key,
        }
    }

    /// Short label shown on cards
    pub fn label(&self) -> &str {
        match self {
            TipType::Winner => "Winner",
            TipType::Over25 => "Over 2.5",
            TipType::Over15 => "Over 1.5",
            TipType::DoubleChance => "Double Chance",
            TipType::Btts => "BTTS",
            TipType::Unknown(key) => key,
        }
    }

    /// Human-readable outcome for a predicted class
    ///
    /// Classes outside the documented range, and unknown tip types, render as
    /// the raw number.
    pub fn outcome_label(&self, class: i64, home_team: &str, away_team: &str) -> String {
        match (self, class) {
            (TipType::Winner, 0) => home_team.to_string(),
            (TipType::Winner, 1) => "Draw".to_string(),
            (TipType::Winner, 2) => away_team.to_string(),
            (TipType::DoubleChance, 0) => "1X (Home or Draw)".to_string(),
            (TipType::DoubleChance, 1) => "X2 (Away or Draw)".to_string(),
            (TipType::DoubleChance, 2) => "12 (Home or Away)".to_string(),
            (TipType::Over25 | TipType::Over15 | TipType::Btts, 0) => "No".to_string(),
            (TipType::Over25 | TipType::Over15 | TipType::Btts, 1) => "Yes".to_string(),
            _ => class.to_string(),
        }
    }
}

impl From<String> for TipType {
    fn from(key: String) -> Self {
        match key.as_str() {
            "winner" => TipType::Winner,
            "over_2_5" => TipType::Over25,
            "over_1_5" => TipType::Over15,
            "double_chance" => TipType::DoubleChance,
            "btts" => TipType::Btts,
            _ => TipType::Unknown(key),
        }
    }
}

impl From<TipType> for String {
    fn from(tip: TipType) -> Self {
        match tip {
            TipType::Unknown(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl fmt::Display for TipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Visual tier for a confidence percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceBand {
    High,
    MediumHigh,
    MediumLow,
    Low,
}

impl ConfidenceBand {
    /// Band for a percentage in [0, 100]
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            80..=u8::MAX => ConfidenceBand::High,
            60..=79 => ConfidenceBand::MediumHigh,
            40..=59 => ConfidenceBand::MediumLow,
            _ => ConfidenceBand::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::MediumHigh => "medium-high",
            ConfidenceBand::MediumLow => "medium-low",
            ConfidenceBand::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a raw model probability to a whole percentage
pub fn confidence_percent(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    (raw * 100.0).round().clamp(0.0, 100.0) as u8
}
