use super::notify_export_success;
use crate::errors::AppResult;
use crate::models::Stats;
use std::path::Path;

/// Scrive le statistiche complete in JSON formattato.
pub(crate) fn export_json(stats: &Stats, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
