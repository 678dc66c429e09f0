use crate::config::Config;
use crate::db::ActivityLog;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (kept if already present)
///  - the data directory with empty roster and history documents
///  - the activity log
pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();

    //
    // 1️⃣ CONFIGURAZIONE
    //
    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
    } else {
        cfg.save_to(&path)?;
        success(format!("Config file: {}", path.display()));
    }

    //
    // 2️⃣ DATA DIRECTORY
    //
    let store = JsonStore::open(cfg.data_path())?;
    success(format!("Data directory: {}", store.dir().display()));

    //
    // 3️⃣ LOG INTERNO (non bloccante)
    //
    ActivityLog::for_config(cfg).record(
        "init",
        &store.dir().to_string_lossy(),
        "Data directory initialized",
    );

    println!("🎉 rollcall initialization completed!");
    Ok(())
}
