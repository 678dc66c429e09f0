use crate::errors::{AppError, AppResult};

/// One name per line. Lines are trimmed and blank lines skipped.
pub(super) fn read_names(bytes: &[u8]) -> AppResult<Vec<String>> {
    let content = std::str::from_utf8(bytes)
        .map_err(|e| AppError::Import(format!("text file is not valid UTF-8: {e}")))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
