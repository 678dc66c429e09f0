//! Load → modify → save sequences shared by the HTTP handlers and the CLI.

use crate::core::{selector, stats};
use crate::errors::{AppError, AppResult};
use crate::models::{HistoryRecord, Stats, Student};
use crate::storage::Store;
use chrono::NaiveDateTime;
use rand::Rng;
use serde::Serialize;

/// Default number of records returned by the history view.
pub const HISTORY_LIMIT: usize = 50;

/// What a call returns to its client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallOutcome {
    pub name: String,
    /// Count after this call has been recorded.
    pub count: u32,
    pub previous_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub success: bool,
    pub count: usize,
}

pub struct RollCallLogic;

impl RollCallLogic {
    pub fn students<S: Store + ?Sized>(store: &S) -> AppResult<Vec<Student>> {
        store.load_roster()
    }

    /// Replace the whole roster with an already parsed one. History is kept.
    pub fn replace_roster<S: Store + ?Sized>(
        store: &mut S,
        roster: &[Student],
    ) -> AppResult<ImportOutcome> {
        store.save_roster(roster)?;
        Ok(ImportOutcome {
            success: true,
            count: roster.len(),
        })
    }

    /// Draw one student, bump their count and append the call to history.
    pub fn call<S: Store + ?Sized, R: Rng + ?Sized>(
        store: &mut S,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> AppResult<CallOutcome> {
        let loaded = store.load_roster()?;
        let selection = selector::select_weighted(&loaded, rng).ok_or(AppError::EmptyRoster)?;

        let mut roster = loaded.clone();
        let mut history = store.load_history()?;
        let count = selector::record_selection(&mut roster, &mut history, &selection.name, now)?;

        store.save_roster(&roster)?;
        if let Err(e) = store.save_history(&history) {
            restore_roster(store, &loaded);
            return Err(e);
        }

        Ok(CallOutcome {
            name: selection.name,
            count,
            previous_count: selection.count,
        })
    }

    /// The last `limit` calls, oldest first.
    pub fn recent_history<S: Store + ?Sized>(
        store: &S,
        limit: usize,
    ) -> AppResult<Vec<HistoryRecord>> {
        let mut history = store.load_history()?;
        let start = history.len().saturating_sub(limit);
        Ok(history.split_off(start))
    }

    pub fn stats<S: Store + ?Sized>(store: &S) -> AppResult<Stats> {
        let roster = store.load_roster()?;
        let history = store.load_history()?;
        Ok(stats::compute(&roster, &history))
    }

    /// Empty both the roster and the history.
    pub fn clear<S: Store + ?Sized>(store: &mut S) -> AppResult<()> {
        // a corrupt roster document can still be cleared
        let loaded = store.load_roster().ok();

        store.save_roster(&[])?;
        if let Err(e) = store.save_history(&[]) {
            if let Some(roster) = loaded {
                restore_roster(store, &roster);
            }
            return Err(e);
        }
        Ok(())
    }
}

/// Put back the roster read at the start of an operation whose history
/// write failed, so counts and history stay in step.
fn restore_roster<S: Store + ?Sized>(store: &mut S, roster: &[Student]) {
    if let Err(e) = store.save_roster(roster) {
        tracing::error!(error = %e, "cannot restore the roster after a failed history write");
    }
}
