//! `.xlsx` / `.xls` reader: column A of the first worksheet.

use super::is_placeholder;
use crate::errors::{AppError, AppResult};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

pub(super) fn read_names(bytes: &[u8]) -> AppResult<Vec<String>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::Import(format!("not a valid workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Import("the workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Import(format!("cannot read the first worksheet: {e}")))?;

    let (Some((first_row, _)), Some((last_row, _))) = (range.start(), range.end()) else {
        return Ok(Vec::new());
    };

    // the first populated row holds the column headers
    let names = (first_row + 1..=last_row)
        .filter_map(|row| range.get_value((row, 0)))
        .filter_map(cell_text)
        .filter(|name| !is_placeholder(name))
        .collect();

    Ok(names)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string().trim().to_string()),
    }
}
