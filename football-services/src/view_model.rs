//! Display-ready view of the home page
//!
//! Turns raw prediction, stats and last-update payloads into the exact
//! fields the cards and summary widgets render.

use football_core::{
    confidence_percent, format_last_update, AppLabels, ConfidenceBand, LastUpdate,
    PredictionRecord, StatsSummary, TipType, ViewError,
};
use serde::Serialize;

/// Shown when upstream returned neither predictions nor stats
pub const NO_DATA_MESSAGE: &str = "No data available.";

/// One tip line on a match card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipView {
    pub tip: TipType,
    /// Card label, e.g. "Over 2.5"
    pub name: String,
    /// Human-readable outcome, e.g. "Draw" or "Yes"
    pub outcome: String,
    /// Whole percent in [0, 100]
    pub confidence: u8,
    pub band: ConfidenceBand,
    pub class: i64,
}

/// A match card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView {
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub date: String,
    pub time: String,
    pub finished: bool,
    pub tips: Vec<TipView>,
}

/// One accuracy tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub tip: TipType,
    pub name: String,
    /// 0.0 when upstream had no usable value
    pub percent: f64,
}

/// Accuracy summary widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub average: f64,
    pub rows: Vec<StatRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_type: Option<String>,
}

/// Everything the home page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_match: Option<MatchView>,
    pub matches: Vec<MatchView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsView>,
    /// Formatted last refresh, empty when unknown
    pub last_update: String,
    pub app: AppLabels,
    /// Page-level error state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Builds view models with fixed footer labels
#[derive(Debug, Clone, Default)]
pub struct ViewModelBuilder {
    labels: AppLabels,
}

impl ViewModelBuilder {
    pub fn new(labels: AppLabels) -> Self {
        Self { labels }
    }

    /// Build the home page view
    ///
    /// The first record becomes the top match and the rest keep their
    /// upstream order. Missing stats or last-update data only shrink the
    /// page; a record without one of the fixed tip types fails the build.
    pub fn build(
        &self,
        predictions: &[PredictionRecord],
        stats: Option<&StatsSummary>,
        last_update: Option<&LastUpdate>,
    ) -> Result<ViewModel, ViewError> {
        let mut cards = predictions
            .iter()
            .map(match_view)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        let top_match = cards.next();
        let matches: Vec<MatchView> = cards.collect();

        let stats = stats.filter(|s| !s.is_empty());
        let error = (predictions.is_empty() && stats.is_none())
            .then(|| NO_DATA_MESSAGE.to_string());

        Ok(ViewModel {
            top_match,
            matches,
            stats: stats.map(stats_view),
            last_update: format_last_update(
                last_update.and_then(|u| u.last_update.as_deref()),
            ),
            app: self.labels.clone(),
            error,
        })
    }
}

/// Build the home page view with default footer labels
pub fn build(
    predictions: &[PredictionRecord],
    stats: Option<&StatsSummary>,
    last_update: Option<&LastUpdate>,
) -> Result<ViewModel, ViewError> {
    ViewModelBuilder::default().build(predictions, stats, last_update)
}

/// Card for one record, tips in the fixed display order
pub fn match_view(record: &PredictionRecord) -> Result<MatchView, ViewError> {
    let tips = TipType::ALL
        .iter()
        .map(|tip| {
            let prediction = record.required_tip(tip)?;
            let confidence = confidence_percent(prediction.confidence);
            Ok(TipView {
                tip: tip.clone(),
                name: tip.label().to_string(),
                outcome: tip.outcome_label(
                    prediction.class,
                    &record.home_team,
                    &record.away_team,
                ),
                confidence,
                band: ConfidenceBand::from_percent(confidence),
                class: prediction.class,
            })
        })
        .collect::<Result<Vec<_>, ViewError>>()?;

    Ok(MatchView {
        match_id: record.match_id.clone(),
        home_team: record.home_team.clone(),
        away_team: record.away_team.clone(),
        league: record.league.clone(),
        date: record.date.clone(),
        time: record.time.clone(),
        finished: record.finished,
        tips,
    })
}

fn stats_view(stats: &StatsSummary) -> StatsView {
    StatsView {
        average: stats.average_accuracy(),
        rows: TipType::ALL
            .iter()
            .map(|tip| StatRow {
                tip: tip.clone(),
                name: tip.label().to_string(),
                percent: stats.percent(tip).unwrap_or(0.0),
            })
            .collect(),
        best_type: stats.best_type.clone(),
    }
}
