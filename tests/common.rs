#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use fitstart::core::session::open_progress_log;
use fitstart::config::Config;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fit() -> Command {
    cargo_bin_cmd!("fitstart")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitstart.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Config pointing at a test database, default storage key
pub fn test_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        ..Config::default()
    }
}

/// Initialize the DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    fit()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    fit()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "2024-01-01",
            "--weight",
            "80.2",
            "--workouts",
            "3",
        ])
        .assert()
        .success();

    fit()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "2024-01-05",
            "--weight",
            "79.8",
            "--workouts",
            "4",
            "--notes",
            "second week",
        ])
        .assert()
        .success();
}

/// Ids currently stored in the test DB, storage order
pub fn stored_ids(db_path: &str) -> Vec<String> {
    let log = open_progress_log(&test_config(db_path)).expect("open progress log");
    log.entries().iter().map(|e| e.id.clone()).collect()
}
