use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::open_progress_log;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut log = open_progress_log(cfg)?;
        let count = log.count();

        let cleared = log.clear_all(|| {
            *yes || confirm("Are you sure you want to delete ALL progress data? This action is irreversible.")
        });

        if !cleared {
            info("Operation cancelled.");
            return Ok(());
        }

        success(format!("All progress data has been deleted ({} entries).", count));
        ttlog_quiet(
            log.storage().conn(),
            "clear",
            "",
            &format!("Deleted all {} entries", count),
        );
    }

    Ok(())
}
