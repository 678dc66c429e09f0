use crate::utils::date::format_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One past call. Stored as `{"name": ..., "time": "YYYY-MM-DD HH:MM:SS"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub name: String,
    #[serde(rename = "time", alias = "timestamp")]
    pub timestamp: String, // local time, already formatted
}

impl HistoryRecord {
    pub fn new(name: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            timestamp: format_timestamp(at),
        }
    }
}
