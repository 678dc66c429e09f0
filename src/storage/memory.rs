use super::Store;
use crate::errors::AppResult;
use crate::models::{HistoryRecord, Student};

/// In-memory store, used by tests and by callers that do not persist.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub roster: Vec<Student>,
    pub history: Vec<HistoryRecord>,
}

impl MemoryStore {
    pub fn new(roster: Vec<Student>, history: Vec<HistoryRecord>) -> Self {
        Self { roster, history }
    }
}

impl Store for MemoryStore {
    fn load_roster(&self) -> AppResult<Vec<Student>> {
        Ok(self.roster.clone())
    }

    fn save_roster(&mut self, roster: &[Student]) -> AppResult<()> {
        self.roster = roster.to_vec();
        Ok(())
    }

    fn load_history(&self) -> AppResult<Vec<HistoryRecord>> {
        Ok(self.history.clone())
    }

    fn save_history(&mut self, history: &[HistoryRecord]) -> AppResult<()> {
        self.history = history.to_vec();
        Ok(())
    }
}
