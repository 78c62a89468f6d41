//! View model building and page loading for the Football Predictions client
//!
//! This crate turns raw API payloads into the display-ready view model and
//! orchestrates the concurrent fetches behind the home page.

pub mod home_loader;
pub mod view_model;

pub use home_loader::{HomeLoader, HomePage, LOAD_FAILED_MESSAGE};
pub use view_model::{
    build, match_view, MatchView, StatRow, StatsView, TipView, ViewModel, ViewModelBuilder,
    NO_DATA_MESSAGE,
};
