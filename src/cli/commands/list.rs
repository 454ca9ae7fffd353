use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::open_progress_log;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::utils::formatting::EMPTY_VALUE;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let log = open_progress_log(cfg)?;

        if log.is_empty() {
            println!("No entries yet. Add your first one with `fitstart add`.");
            return Ok(());
        }

        let separator = cfg.separator_char.chars().next().unwrap_or('-');
        print!("{}", render_entries(log.entries(), separator));
    }
    Ok(())
}

/// Entries table in storage order (newest insertion first).
pub fn render_entries(entries: &[Entry], separator: char) -> String {
    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("WEIGHT (KG)", 11),
        Column::new("WORKOUTS", 8),
        Column::new("NOTES", 5),
        Column::new("ID", 2),
    ])
    .with_separator(separator);

    for e in entries {
        table.add_row(vec![
            e.date_str(),
            e.weight_kg.to_string(),
            e.workouts.to_string(),
            notes_cell(&e.notes),
            e.id.clone(),
        ]);
    }

    table.render()
}

fn notes_cell(notes: &str) -> String {
    if notes.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        notes.to_string()
    }
}
