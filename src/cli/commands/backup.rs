use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::ActivityLog;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        dest,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(
            &cfg.data_path(),
            Path::new(dest),
            *compress,
            *force,
            &ActivityLog::for_config(cfg),
        )?;
    }

    Ok(())
}
