use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// Colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "set" => Colour::Green,
        "del" => Colour::Red,
        "period" | "contract" | "employee" => Colour::Yellow,
        "import" => Colour::Cyan,
        "export" | "backup" => Colour::Blue,
        "migration_applied" | "db" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let entries: Vec<(LogRow, String)> = rows
            .into_iter()
            .map(|row| {
                let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| row.date.clone());
                (row, date)
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(r, _)| op_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = entries
            .iter()
            .map(|(r, _)| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, d)| d.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, date) in &entries {
            let color = color_for_operation(&row.operation);

            // truncate on the plain text, then color only the operation word
            let visible = truncate(&op_target(row), OP_MAX_WIDTH);
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}
