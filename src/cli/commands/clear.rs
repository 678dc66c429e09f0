use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::RollCallLogic;
use crate::db::ActivityLog;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages::{info, success};
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { force } = cmd {
        if !*force && !confirm()? {
            info("Nothing was removed.");
            return Ok(());
        }

        let mut store = JsonStore::open(cfg.data_path())?;
        RollCallLogic::clear(&mut store)?;
        success("Roster and history cleared.");

        ActivityLog::for_config(cfg).record("clear", "", "Roster and history cleared");
    }

    Ok(())
}

fn confirm() -> AppResult<bool> {
    print!("Remove the roster and the whole call history? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();

    Ok(answer == "y" || answer == "yes")
}
