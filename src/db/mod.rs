//! Internal activity log kept in a small SQLite database next to the JSON
//! documents.

pub mod initialize;
pub mod log;
pub mod pool;

pub use log::ActivityLog;

/// File name of the activity database inside the data directory.
pub const ACTIVITY_DB: &str = "activity.sqlite";
