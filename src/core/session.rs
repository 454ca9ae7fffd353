//! Opens the progress log on the configured SQLite database.

use crate::config::Config;
use crate::core::progress_log::ProgressLog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::SqliteStorage;
use std::fs;
use std::path::Path;

pub type SqliteProgressLog = ProgressLog<SqliteStorage>;

/// Open (and migrate) the database, then load the log from its slot.
pub fn open_progress_log(cfg: &Config) -> AppResult<SqliteProgressLog> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::open_migrated(&cfg.database)?;
    Ok(ProgressLog::load(
        SqliteStorage::new(pool),
        cfg.storage_key.clone(),
    ))
}
