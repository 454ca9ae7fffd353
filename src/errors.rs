//! Unified application error type.
//! The CLI layer, config and db modules return AppError so error handling
//! stays consistent. The progress log itself only surfaces ValidationError.

use crate::core::validation::ValidationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
