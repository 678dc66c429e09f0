pub mod backup;
pub mod call;
pub mod clear;
pub mod config;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod serve;
pub mod stats;
