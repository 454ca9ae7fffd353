//! Formatting utilities used for CLI output.

/// Placeholder for values that do not exist yet.
pub const EMPTY_VALUE: &str = "—";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `72.5 kg`, `80 kg`
pub fn format_weight(kg: f64) -> String {
    format!("{} kg", kg)
}

/// `4/week`
pub fn format_workouts(n: u32) -> String {
    format!("{}/week", n)
}

pub fn or_empty(value: Option<String>) -> String {
    value.unwrap_or_else(|| EMPTY_VALUE.to_string())
}
