// src/export/logic.rs

use crate::core::logic::RollCallLogic;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::xlsx::export_xlsx;
use crate::storage::Store;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// Logica di alto livello per l'export delle statistiche.
pub struct ExportLogic;

impl ExportLogic {
    /// Export delle statistiche correnti.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: path del file di output (le cartelle mancanti vengono create)
    /// - `force`: sovrascrive senza chiedere
    pub fn export<S: Store + ?Sized>(
        store: &S,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let stats = RollCallLogic::stats(store)?;

        if stats.student_stats.is_empty() {
            warning("The roster is empty, exporting headers only.");
        }

        match format {
            ExportFormat::Csv => export_csv(&stats, file)?,
            ExportFormat::Json => export_json(&stats, file)?,
            ExportFormat::Xlsx => export_xlsx(&stats, file)?,
        }

        Ok(())
    }
}
