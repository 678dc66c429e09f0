//! Roster import from uploaded files.
//!
//! Only the first column (spreadsheets) or each trimmed line (text files) is
//! used as a student name. Parsing never touches the store: callers replace
//! the roster only after a file has been read completely.

mod delimited;
mod spreadsheet;
mod text;

use crate::errors::{AppError, AppResult};
use crate::models::Student;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Text,
    Csv,
    Xlsx,
    Xls,
}

impl RosterFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_file_name(name: &str) -> AppResult<Self> {
        let ext = Path::new(name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(RosterFormat::Text),
            "csv" => Ok(RosterFormat::Csv),
            "xlsx" => Ok(RosterFormat::Xlsx),
            "xls" => Ok(RosterFormat::Xls),
            "" => Err(AppError::UnsupportedFormat(format!(
                "'{name}' has no file extension"
            ))),
            other => Err(AppError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// Values spreadsheet tools write into cells that are logically empty.
const PLACEHOLDERS: [&str; 5] = ["nan", "NaN", "None", "null", "NULL"];

pub(crate) fn is_placeholder(value: &str) -> bool {
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

/// Parse an in-memory upload, using `file_name` only to pick the format.
pub fn parse_bytes(file_name: &str, bytes: &[u8]) -> AppResult<Vec<Student>> {
    let names = match RosterFormat::from_file_name(file_name)? {
        RosterFormat::Text => text::read_names(bytes)?,
        RosterFormat::Csv => delimited::read_names(bytes)?,
        RosterFormat::Xlsx | RosterFormat::Xls => spreadsheet::read_names(bytes)?,
    };

    Ok(names.into_iter().map(Student::new).collect())
}

/// Parse a roster file from disk.
pub fn parse_file(path: &Path) -> AppResult<Vec<Student>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    // check the extension before reading a possibly large unrelated file
    RosterFormat::from_file_name(&file_name)?;

    let bytes = fs::read(path)
        .map_err(|e| AppError::Import(format!("cannot read {}: {e}", path.display())))?;

    parse_bytes(&file_name, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_case_insensitively() {
        assert_eq!(
            RosterFormat::from_file_name("class.TXT").unwrap(),
            RosterFormat::Text
        );
        assert_eq!(
            RosterFormat::from_file_name("a.b.csv").unwrap(),
            RosterFormat::Csv
        );
        assert_eq!(
            RosterFormat::from_file_name("roster.Xlsx").unwrap(),
            RosterFormat::Xlsx
        );
    }

    #[test]
    fn legacy_workbooks_are_accepted_unknown_formats_are_not() {
        assert!(matches!(
            RosterFormat::from_file_name("photo.png"),
            Err(AppError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            RosterFormat::from_file_name("README"),
            Err(AppError::UnsupportedFormat(_))
        ));
        assert_eq!(
            RosterFormat::from_file_name("old.XLS").unwrap(),
            RosterFormat::Xls
        );
    }

    #[test]
    fn text_upload_becomes_fresh_students_in_order() {
        let roster = parse_bytes("list.txt", "Alice\n\n  Bob \r\nAlice\n".as_bytes()).unwrap();

        assert_eq!(
            roster,
            vec![Student::new("Alice"), Student::new("Bob"), Student::new("Alice")]
        );
    }

    #[test]
    fn placeholders_cover_blank_and_nan() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("nan"));
        assert!(!is_placeholder("Nancy"));
    }
}
