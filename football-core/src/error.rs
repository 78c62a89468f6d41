//! Error types shared across the workspace

use thiserror::Error;

use crate::tip::TipType;

/// Configuration errors, raised once at process start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),

    #[error("Invalid URL in {field}: {error}")]
    InvalidUrl { field: &'static str, error: String },

    #[error("Invalid value in {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Errors raised while turning raw payloads into a view model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A displayed record lacks one of the fixed tip types
    #[error("Match {match_id} has no {tip} prediction")]
    MissingTip { match_id: String, tip: TipType },
}
