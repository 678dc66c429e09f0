use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::RollCallLogic;
use crate::db::ActivityLog;
use crate::errors::AppResult;
use crate::import;
use crate::storage::JsonStore;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = Path::new(file);

        // parse first: a broken file must leave the current roster alone
        let roster = import::parse_file(path)?;

        let mut store = JsonStore::open(cfg.data_path())?;
        let outcome = RollCallLogic::replace_roster(&mut store, &roster)?;

        if outcome.count == 0 {
            warning("The file contained no names, the roster is now empty.");
        } else {
            success(format!("Imported {} students from {}", outcome.count, path.display()));
        }

        ActivityLog::for_config(cfg).record(
            "import",
            &path.to_string_lossy(),
            &format!("Imported {} students", outcome.count),
        );
    }

    Ok(())
}
