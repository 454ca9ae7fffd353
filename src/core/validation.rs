//! Pure validation of a draft. No storage, no output.

use crate::models::{Draft, Entry};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a date.")]
    MissingDate,

    #[error("Invalid date '{0}': expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Please enter a valid weight in kg.")]
    InvalidWeight,

    #[error("Workouts must be a number (0–14).")]
    InvalidWorkouts,
}

/// Normalized values of a draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub workouts: u32,
    pub notes: String,
}

/// Check a draft field by field (date, weight, workouts) and return the
/// first failure, or the normalized values.
pub fn validate(draft: &Draft) -> Result<ValidDraft, ValidationError> {
    let date_raw = draft.date.trim();
    if date_raw.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    let date =
        parse_date(date_raw).ok_or_else(|| ValidationError::InvalidDate(date_raw.to_string()))?;

    let weight = parse_number(&draft.weight_kg)
        .filter(|w| *w > 0.0)
        .ok_or(ValidationError::InvalidWeight)?;

    let workouts = parse_number(&draft.workouts)
        .filter(|w| (0.0..=Entry::MAX_WORKOUTS as f64).contains(w))
        .ok_or(ValidationError::InvalidWorkouts)?;

    Ok(ValidDraft {
        date,
        weight_kg: round_one_decimal(weight),
        workouts: workouts.round() as u32,
        notes: draft.notes.as_deref().unwrap_or("").trim().to_string(),
    })
}

/// Parse a numeric form field. Surrounding whitespace is ignored and a blank
/// field reads as zero. Non-finite values are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    // Rust accepts "inf"/"nan" spellings; they are never valid here
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
