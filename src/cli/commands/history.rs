use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::RollCallLogic;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages::info;
use crate::utils::colors::GREY;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { limit } = cmd {
        let store = JsonStore::open(cfg.data_path())?;
        let limit = limit.unwrap_or(cfg.history_limit);
        let records = RollCallLogic::recent_history(&store, limit)?;

        if records.is_empty() {
            info("No calls recorded yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![Column::left("Time"), Column::left("Name")]);
        for record in &records {
            table.add_row(vec![
                Cell::colored(record.timestamp.clone(), GREY),
                Cell::plain(record.name.clone()),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
