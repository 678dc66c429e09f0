use crate::config::Config;
use crate::core::logic::RollCallLogic;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages::info;
use crate::utils::colors::color_for_count;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = JsonStore::open(cfg.data_path())?;
    let roster = RollCallLogic::students(&store)?;

    if roster.is_empty() {
        info("The roster is empty. Import one with `rollcall import <FILE>`.");
        return Ok(());
    }

    let total: u32 = roster.iter().map(|s| s.count).sum();
    let average = f64::from(total) / roster.len() as f64;

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Name"),
        Column::right("Calls"),
    ]);

    for (i, student) in roster.iter().enumerate() {
        table.add_row(vec![
            Cell::plain((i + 1).to_string()),
            Cell::plain(student.name.clone()),
            Cell::colored(
                student.count.to_string(),
                color_for_count(student.count, average),
            ),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} students, {} calls recorded on the roster", roster.len(), total);
    Ok(())
}
