use super::{HEADERS, notify_export_success, stat_rows};
use crate::errors::{AppError, AppResult};
use crate::models::Stats;
use csv::Writer;
use std::path::Path;

/// Scrive le statistiche in CSV nel file indicato.
pub(crate) fn export_csv(stats: &Stats, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(to_export_error)?;

    wtr.write_record(HEADERS).map_err(to_export_error)?;
    for row in stat_rows(&stats.student_stats) {
        wtr.write_record(&row).map_err(to_export_error)?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

fn to_export_error(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV export error: {e}"))
}
