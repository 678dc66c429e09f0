pub mod backup;
pub mod log;
pub mod logic;
pub mod selector;
pub mod stats;
