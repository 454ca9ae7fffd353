use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::open_progress_log;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut log = open_progress_log(cfg)?;

        let date = log.get(id).map(|e| e.date_str());

        if log.delete(id) {
            let date = date.unwrap_or_default();
            success(format!("Entry {} ({}) has been deleted.", id, date));
            ttlog_quiet(
                log.storage().conn(),
                "del",
                id,
                &format!("Deleted entry for {}", date),
            );
        } else {
            warning(format!("No entry with id {}.", id));
        }
    }

    Ok(())
}
