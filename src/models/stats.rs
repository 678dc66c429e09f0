use serde::Serialize;

/// Per-student share of all calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStat {
    pub name: String,
    pub count: u32,
    pub percentage: f64,
}

/// Derived statistics, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_students: usize,
    pub total_calls: usize,
    pub student_stats: Vec<StudentStat>,
}

impl Stats {
    pub fn empty() -> Self {
        Self {
            total_students: 0,
            total_calls: 0,
            student_stats: Vec::new(),
        }
    }
}
