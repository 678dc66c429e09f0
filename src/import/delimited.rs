use super::is_placeholder;
use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;

/// First column of every record. The first record is the header row, the
/// same way spreadsheet sheets are read.
pub(super) fn read_names(bytes: &[u8]) -> AppResult<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut names = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| AppError::Import(format!("CSV import failed: {e}")))?;

        if let Some(first) = record.get(0) {
            let name = first.trim();
            if !is_placeholder(name) {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_column_after_header() {
        let data = "name,class\nAlice,3A\n,3A\nBob,3B\nnan,3C\n\"Smith, J\",3C\n";
        assert_eq!(read_names(data.as_bytes()).unwrap(), ["Alice", "Bob", "Smith, J"]);
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let data = "name\nAlice,extra,columns\nBob\n";
        assert_eq!(read_names(data.as_bytes()).unwrap(), ["Alice", "Bob"]);
    }

    #[test]
    fn invalid_utf8_is_an_import_error() {
        let data = b"name\n\xff\xfe\n";
        assert!(matches!(read_names(data), Err(AppError::Import(_))));
    }
}
