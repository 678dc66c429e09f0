//! Unified application error type.
//! All modules (core, storage, import, server, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Roll-call logic
    // ---------------------------
    #[error("roster empty")]
    EmptyRoster,

    #[error("Student not found in roster: {0}")]
    StudentNotFound(String),

    // ---------------------------
    // Roster import
    // ---------------------------
    #[error("Import failed: {0}")]
    Import(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Activity log error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for failures caused by the caller's input rather than by the
    /// server or its storage.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::EmptyRoster | AppError::Import(_) | AppError::UnsupportedFormat(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
