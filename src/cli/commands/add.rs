use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::open_progress_log;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::Draft;
use crate::ui::messages::success;
use crate::utils::date::today_iso;
use crate::utils::formatting::{format_weight, format_workouts};

/// Add a progress entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        weight,
        workouts,
        notes,
    } = cmd
    {
        let draft = Draft::new(
            date.clone().unwrap_or_else(today_iso),
            weight.as_str(),
            workouts.as_str(),
            notes.clone(),
        );

        let mut log = open_progress_log(cfg)?;
        let entry = log.add(&draft)?;

        success(format!(
            "Entry added for {}: {}, {} (id {})",
            entry.date_str(),
            format_weight(entry.weight_kg),
            format_workouts(entry.workouts),
            entry.id
        ));

        ttlog_quiet(
            log.storage().conn(),
            "add",
            &entry.id,
            &format!(
                "Added entry for {} ({} kg, {} workouts)",
                entry.date_str(),
                entry.weight_kg,
                entry.workouts
            ),
        );
    }

    Ok(())
}
