// src/export/xlsx.rs

use super::{HEADERS, notify_export_success, stat_rows};
use crate::errors::{AppError, AppResult};
use crate::models::Stats;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(stats: &Stats, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Statistics").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    // ---------------------------
    // Righe (banded)
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in stat_rows(&stats.student_stats).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let text_fmt = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        let num_fmt = text_fmt.clone().set_align(FormatAlign::Right);

        for (col, value) in values.iter().enumerate() {
            // the name column stays text even when it looks numeric
            let written = match value.parse::<f64>() {
                Ok(num) if col != 1 => worksheet.write_with_format(row, col as u16, num, &num_fmt),
                _ => worksheet.write_with_format(row, col as u16, value.as_str(), &text_fmt),
            };
            written.map_err(to_export_error)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Totali
    // ---------------------------
    let totals_row = stats.student_stats.len() as u32 + 2;
    let bold = Format::new().set_bold();
    worksheet
        .write_with_format(totals_row, 0, "total students", &bold)
        .map_err(to_export_error)?;
    worksheet
        .write(totals_row, 2, stats.total_students as f64)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(totals_row + 1, 0, "total calls", &bold)
        .map_err(to_export_error)?;
    worksheet
        .write(totals_row + 1, 2, stats.total_calls as f64)
        .map_err(to_export_error)?;
    col_widths[0] = col_widths[0].max("total students".len());

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX export error: {e}"))
}
