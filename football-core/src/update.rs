//! Last model refresh returned by `GET /meta/last-update`

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display format: day/month/year then 24-hour time
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Accepted upstream layouts once the date/time separator is normalized
const PARSE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Date-only values are shown at midnight
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastUpdate {
    /// Raw timestamp, "YYYY-MM-DD HH:MM:SS"
    #[serde(default)]
    pub last_update: Option<String>,
}

impl LastUpdate {
    /// Display string, empty when absent or unparseable
    pub fn display(&self) -> String {
        format_last_update(self.last_update.as_deref())
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.trim().replacen(' ', "T", 1);
    PARSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Format a raw upstream timestamp for display. Never fails.
pub fn format_last_update(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}
