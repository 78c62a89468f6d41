//! Aggregate accuracy statistics returned by `GET /stats`

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::tip::TipType;

/// Historical accuracy for one tip type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyStat {
    /// Hit rate in [0, 100]; absent when upstream sent nothing usable
    #[serde(default, deserialize_with = "finite_or_none")]
    pub percent: Option<f64>,
}

/// Accuracy per tip type plus the best performing category
///
/// Decoding never rejects an object: an entry of the wrong shape is kept in
/// `extra` under its key instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct StatsSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<AccuracyStat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_2_5: Option<AccuracyStat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_1_5: Option<AccuracyStat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_chance: Option<AccuracyStat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btts: Option<AccuracyStat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_type: Option<String>,

    /// Keys that are not a usable tip entry, passed through untouched
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for StatsSummary {
    fn from(mut map: Map<String, Value>) -> Self {
        let mut entry = |key: &str| {
            if !matches!(map.get(key), Some(Value::Object(_))) {
                return None;
            }
            map.remove(key)
                .and_then(|value| serde_json::from_value::<AccuracyStat>(value).ok())
        };

        let winner = entry(TipType::Winner.key());
        let over_2_5 = entry(TipType::Over25.key());
        let over_1_5 = entry(TipType::Over15.key());
        let double_chance = entry(TipType::DoubleChance.key());
        let btts = entry(TipType::Btts.key());

        let best_type = match map.remove("best_type") {
            Some(Value::String(best)) => Some(best),
            Some(other) => {
                map.insert("best_type".to_string(), other);
                None
            }
            None => None,
        };

        Self {
            winner,
            over_2_5,
            over_1_5,
            double_chance,
            btts,
            best_type,
            extra: map,
        }
    }
}

impl StatsSummary {
    /// Entry for a tip type
    pub fn get(&self, tip: &TipType) -> Option<&AccuracyStat> {
        match tip {
            TipType::Winner => self.winner.as_ref(),
            TipType::Over25 => self.over_2_5.as_ref(),
            TipType::Over15 => self.over_1_5.as_ref(),
            TipType::DoubleChance => self.double_chance.as_ref(),
            TipType::Btts => self.btts.as_ref(),
            TipType::Unknown(_) => None,
        }
    }

    /// Usable percentage for a tip type
    pub fn percent(&self, tip: &TipType) -> Option<f64> {
        self.get(tip)
            .and_then(|stat| stat.percent)
            .filter(|v| v.is_finite())
    }

    /// True when upstream sent no keys at all
    pub fn is_empty(&self) -> bool {
        self.best_type.is_none()
            && self.extra.is_empty()
            && TipType::ALL.iter().all(|tip| self.get(tip).is_none())
    }

    /// Mean of the usable percentages, 0 when there are none
    pub fn average_accuracy(&self) -> f64 {
        let values: Vec<f64> = TipType::ALL
            .iter()
            .filter_map(|tip| self.percent(tip))
            .collect();

        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }
}

fn finite_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}
