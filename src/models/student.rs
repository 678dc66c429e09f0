use serde::{Deserialize, Serialize};

/// A roster entry: the student's display name and how many times they
/// have been called so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String, // unique by convention, duplicates from imports are kept
    #[serde(default)]
    pub count: u32,
}

impl Student {
    /// A freshly imported student, never called.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
        }
    }

    pub fn with_count(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
