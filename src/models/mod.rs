pub mod history;
pub mod stats;
pub mod student;

pub use history::HistoryRecord;
pub use stats::{Stats, StudentStat};
pub use student::Student;
