use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use std::path::{Path, PathBuf};

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// One row of the activity log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Load every log row, oldest first.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}

/// Handle on the activity database. Recording never fails the caller:
/// problems are reported as warnings and the operation carries on.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: Option<PathBuf>,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Log into the configured data directory, unless turned off.
    pub fn for_config(cfg: &Config) -> Self {
        if cfg.activity_log {
            Self::new(cfg.activity_db())
        } else {
            Self::disabled()
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn record(&self, operation: &str, target: &str, message: &str) {
        let Some(path) = &self.path else {
            return;
        };

        if let Err(e) = write_entry(path, operation, target, message) {
            tracing::warn!(operation, error = %e, "failed to write activity log");
        }
    }
}

fn write_entry(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    ttlog(&pool.conn, operation, target, message)
}
