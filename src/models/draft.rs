/// Unvalidated, string-typed user input destined to become an Entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub weight_kg: String,
    pub workouts: String,
    pub notes: Option<String>,
}

impl Draft {
    pub fn new(
        date: impl Into<String>,
        weight_kg: impl Into<String>,
        workouts: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            weight_kg: weight_kg.into(),
            workouts: workouts.into(),
            notes,
        }
    }
}
