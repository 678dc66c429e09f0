use crate::config::Config;
use crate::core::logic::RollCallLogic;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = JsonStore::open(cfg.data_path())?;
    let stats = RollCallLogic::stats(&store)?;

    println!("{CYAN}• Students:{RESET} {GREEN}{}{RESET}", stats.total_students);
    println!("{CYAN}• Calls:{RESET}    {GREEN}{}{RESET}", stats.total_calls);
    println!();

    if stats.student_stats.is_empty() {
        info("No statistics yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::right("Calls"),
        Column::right("Share"),
    ]);

    for s in &stats.student_stats {
        let share = format!("{:.1}%", s.percentage);
        table.add_row(vec![
            Cell::plain(s.name.clone()),
            Cell::plain(s.count.to_string()),
            if s.count == 0 {
                Cell::plain(share)
            } else {
                Cell::colored(share, YELLOW)
            },
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
