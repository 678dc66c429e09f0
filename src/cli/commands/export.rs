use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::storage::JsonStore;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = JsonStore::open(cfg.data_path())?;
        ExportLogic::export(&store, *format, Path::new(file), *force)?;
    }
    Ok(())
}
