use crate::db::log::{LogRow, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;
use unicode_width::UnicodeWidthStr;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour for an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "clear" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, truncated to the column limit.
fn op_target(row: &LogRow) -> String {
    let full = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if full.chars().count() > OP_MAX_WIDTH {
        let mut s: String = full.chars().take(OP_MAX_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = load_log(conn)?;

        if rows.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let labels: Vec<String> = rows.iter().map(op_target).collect();
        let op_w = labels
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(10);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);

        for (row, label) in rows.iter().zip(labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| row.date.clone());

            // only the operation word is coloured; padding uses the plain width
            let padding = " ".repeat(op_w.saturating_sub(UnicodeWidthStr::width(label.as_str())));
            let coloured = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&row.operation).paint(op), rest),
                None => color_for_operation(&row.operation).paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                coloured,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
