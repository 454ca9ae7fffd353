use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::open_progress_log;
use crate::errors::AppResult;
use crate::models::Summary;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, format_weight, format_workouts, or_empty};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary = cmd {
        let log = open_progress_log(cfg)?;
        header("Track Progress");
        print!("{}", render_summary(&log.summary()));
    }
    Ok(())
}

pub fn render_summary(summary: &Summary) -> String {
    let weight = or_empty(summary.latest_weight().map(format_weight));
    let workouts = or_empty(summary.latest_workouts().map(format_workouts));

    let mut out = String::new();
    out.push_str(&format!("{:<16} {}\n", "Latest Weight", bold(&weight)));
    out.push_str(&format!("{:<16} {}\n", "Latest Workouts", bold(&workouts)));
    out.push_str(&format!(
        "{:<16} {}\n",
        "Total Entries",
        bold(&summary.total_entries.to_string())
    ));
    if let Some(latest) = &summary.latest {
        out.push_str(&format!("{:<16} {}\n", "Latest Date", latest.date_str()));
    }
    out
}
