use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

/// Longest visible `operation (target)` column before truncation.
const OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "call" => Colour::Green,
        "clear" => Colour::Red,
        "import" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(db_path: &Path) -> AppResult<()> {
        if !db_path.exists() {
            info("The activity log is empty.");
            return Ok(());
        }

        let pool = DbPool::new(db_path)?;
        let entries = load_entries(&pool.conn)?;

        if entries.is_empty() {
            info("The activity log is empty.");
            return Ok(());
        }

        println!("📜 Activity log:\n");
        for line in render(&entries) {
            println!("{line}");
        }

        Ok(())
    }
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

/// One formatted line per entry: `id: date | op (target) => message`.
fn render(entries: &[LogEntry]) -> Vec<String> {
    let op_w = entries
        .iter()
        .map(|e| op_target(e).chars().count())
        .max()
        .unwrap_or(10)
        .min(OP_WIDTH);
    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);

    entries
        .iter()
        .map(|entry| {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            let visible = op_target(entry);
            let visible = if visible.chars().count() > OP_WIDTH {
                let mut s: String = visible.chars().take(OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is coloured
            let color = color_for_operation(&entry.operation);
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding =
                " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            format!(
                "{:>id_w$}: {} | {}{} => {}",
                entry.id,
                date,
                colored,
                padding,
                entry.message,
                id_w = id_w
            )
        })
        .collect()
}
