use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One dated progress record.
///
/// Serialized with camelCase field names so a stored blob reads
/// `{id, date, weightKg, workouts, notes, createdAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    pub weight_kg: f64,  // rounded to 0.1
    pub workouts: u32,   // 0..=14
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    #[serde(default)]
    pub created_at: i64, // ms since epoch, ordering tie-breaker only
}

impl Entry {
    pub const MAX_WORKOUTS: u32 = 14;

    /// Build an entry with a freshly generated id.
    pub fn new(
        date: NaiveDate,
        weight_kg: f64,
        workouts: u32,
        notes: String,
        created_at: i64,
    ) -> Self {
        Self {
            id: Self::generate_id(created_at),
            date,
            weight_kg,
            workouts,
            notes,
            created_at,
        }
    }

    /// `<millis>_<random hex>`
    pub fn generate_id(created_at: i64) -> String {
        format!("{}_{}", created_at, Uuid::new_v4().simple())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// True when the numeric fields respect the accepted ranges.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && self.weight_kg.is_finite()
            && self.weight_kg > 0.0
            && self.workouts <= Self::MAX_WORKOUTS
    }
}

/// Current wall clock in milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// `"notes": null` reads as an empty note.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
