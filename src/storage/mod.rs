//! Persistence of the roster and the call history.
//!
//! Both collections live in their own JSON document and are always read and
//! written as a whole. The roll-call logic only sees the [`Store`] trait, so
//! it can run against files or against memory.

mod json_store;
mod memory;

pub use json_store::{HISTORY_FILE, JsonStore, STUDENTS_FILE};
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::{HistoryRecord, Student};

pub trait Store: Send {
    fn load_roster(&self) -> AppResult<Vec<Student>>;
    fn save_roster(&mut self, roster: &[Student]) -> AppResult<()>;
    fn load_history(&self) -> AppResult<Vec<HistoryRecord>>;
    fn save_history(&mut self, history: &[HistoryRecord]) -> AppResult<()>;
}
