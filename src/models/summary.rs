use super::entry::Entry;

/// Figures shown on top of the progress table.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub latest: Option<Entry>,
    pub total_entries: usize,
}

impl Summary {
    pub fn latest_weight(&self) -> Option<f64> {
        self.latest.as_ref().map(|e| e.weight_kg)
    }

    pub fn latest_workouts(&self) -> Option<u32> {
        self.latest.as_ref().map(|e| e.workouts)
    }
}
