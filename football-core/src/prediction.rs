//! Match prediction records returned by `GET /predictions`

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::ViewError;
use crate::tip::TipType;

/// Model output for a single tip type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipPrediction {
    /// Predicted class, meaning depends on the tip type
    pub class: i64,
    /// Model probability in [0, 1]
    pub confidence: f64,
}

/// One upcoming match with its predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Upstream match identifier (numeric upstream, kept as text)
    #[serde(deserialize_with = "match_id_as_string")]
    pub match_id: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub league: String,

    pub home_team: String,

    pub away_team: String,

    /// Betting market odds, market name -> decimal odds
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub odds: BTreeMap<String, f64>,

    /// Predictions keyed by tip type
    #[serde(default)]
    pub predictions: BTreeMap<TipType, TipPrediction>,

    /// Whether the match has already been played
    #[serde(default)]
    pub finished: bool,
}

impl PredictionRecord {
    /// Prediction for a tip type, if the record carries one
    pub fn tip(&self, tip: &TipType) -> Option<&TipPrediction> {
        self.predictions.get(tip)
    }

    /// Prediction for a tip type the record is required to carry
    pub fn required_tip(&self, tip: &TipType) -> Result<&TipPrediction, ViewError> {
        self.tip(tip).ok_or_else(|| ViewError::MissingTip {
            match_id: self.match_id.clone(),
            tip: tip.clone(),
        })
    }
}

fn match_id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MatchId {
        Number(i64),
        Text(String),
    }

    Ok(match MatchId::deserialize(deserializer)? {
        MatchId::Number(n) => n.to_string(),
        MatchId::Text(s) => s,
    })
}
