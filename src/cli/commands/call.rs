use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::RollCallLogic;
use crate::db::ActivityLog;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages::called;
use crate::utils::date::now_local;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Call { seed } = cmd {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };

        let mut store = JsonStore::open(cfg.data_path())?;
        let outcome = RollCallLogic::call(&mut store, &mut rng, now_local())?;

        called(&outcome.name, outcome.count);

        ActivityLog::for_config(cfg).record(
            "call",
            &outcome.name,
            &format!("Called (count {})", outcome.count),
        );
    }

    Ok(())
}
