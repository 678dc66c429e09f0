// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use logic::ExportLogic;

use crate::models::StudentStat;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

pub(crate) const HEADERS: [&str; 4] = ["rank", "name", "count", "percentage"];

/// Flatten per-student statistics into table rows, rank first.
pub(crate) fn stat_rows(stats: &[StudentStat]) -> Vec<[String; 4]> {
    stats
        .iter()
        .enumerate()
        .map(|(i, s)| {
            [
                (i + 1).to_string(),
                s.name.clone(),
                s.count.to_string(),
                format!("{:.2}", s.percentage),
            ]
        })
        .collect()
}
