//! Terminal rendering of the tracker state.
//!
//! This layer only consumes derived values ([`Summary`], the sorted log,
//! the chart series); it never validates input and never touches the
//! store.

pub mod chart;

pub use chart::ChartSeries;

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use crate::log::EntryLog;
use crate::profile::Profile;
use crate::stats::{self, BmiCategory, Summary, Trend};

/// Default width of the progress bar fill, in characters.
pub const PROGRESS_BAR_WIDTH: usize = 30;

/// Format a date for display as `dd/mm/yyyy`.
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// One decimal place with a unit suffix; `—` when absent.
fn fmt_kg(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.1} kg", value),
        None => "—".to_string(),
    }
}

fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.0}%", value),
        None => "—".to_string(),
    }
}

fn category_colored(category: BmiCategory) -> ColoredString {
    let label = category.label();
    match category {
        BmiCategory::Underweight => label.blue(),
        BmiCategory::Normal => label.green(),
        BmiCategory::Overweight => label.yellow(),
        BmiCategory::Obese => label.red(),
    }
}

/// Render the stats panel.
#[must_use]
pub fn summary_panel(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} Current progress\n",
        "Tracker:".cyan().bold()
    ));
    out.push_str(&format!("{}\n", "─".repeat(60)));

    out.push_str(&format!(
        "   Current: {} | Goal: {}\n",
        fmt_kg(summary.current_weight_kg),
        fmt_kg(summary.goal_weight_kg)
    ));
    out.push_str(&format!(
        "   Lost: {} | Remaining: {}\n",
        fmt_kg(summary.weight_lost_kg),
        fmt_kg(summary.weight_remaining_kg)
    ));

    let bmi_cell = match (summary.bmi, summary.bmi_category) {
        (Some(bmi), Some(category)) => {
            format!("{:.1} ({})", bmi, category_colored(category))
        }
        _ => "—".to_string(),
    };
    out.push_str(&format!(
        "   BMI: {} | Progress: {}\n",
        bmi_cell,
        fmt_percent(summary.progress_percent)
    ));

    out.push_str(&format!("   Entries: {}\n", summary.entry_count));
    out.push_str(&format!("{}\n", "─".repeat(60)));

    out
}

/// Render the goal progress bar, `None` when the profile or log is absent.
///
/// # Example
///
/// ```
/// use wtrack::render::progress_bar;
/// use wtrack::stats::Summary;
/// use wtrack::log::EntryLog;
///
/// // Nothing configured: no bar to draw.
/// let summary = Summary::derive(None, &EntryLog::default());
/// assert!(progress_bar(&summary, 30).is_none());
/// ```
#[must_use]
pub fn progress_bar(summary: &Summary, width: usize) -> Option<String> {
    let percent = summary.progress_percent?;
    let start = summary.initial_weight_kg?;
    let goal = summary.goal_weight_kg?;

    let width = width.max(1);
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let bar = format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).dimmed()
    );

    Some(format!(
        "   {:.1} kg [{}] {:.1} kg  {:.0}%",
        start, bar, goal, percent
    ))
}

/// Render the history table, newest entry first.
///
/// Each row shows the date, the weight, the change against the previous
/// observation (sign preserved, colored by trend), the BMI at that
/// weight when a profile is configured, and the note.
#[must_use]
pub fn history_table(profile: Option<&Profile>, log: &EntryLog) -> String {
    if log.is_empty() {
        return format!(
            "No entries yet. Record one with '{}'.\n",
            "wtrack add <weight>".cyan()
        );
    }

    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:>9} {:>10} {:>6}  {}\n",
        "Date", "Weight", "Change", "BMI", "Note"
    ));
    out.push_str(&format!("{}\n", "─".repeat(60)));

    for (index, entry) in log.entries().iter().enumerate().rev() {
        let delta = stats::delta_to_previous(log, index);

        // Pad first, color after: ANSI codes would break the alignment.
        let change_cell = match delta {
            Some(delta) => {
                let sign = if delta > 0.0 { "+" } else { "" };
                let text = format!("{:>10}", format!("{}{:.1} kg", sign, delta));
                match Trend::classify(Some(delta)) {
                    Trend::Loss => text.green().to_string(),
                    Trend::Gain => text.red().to_string(),
                    Trend::Same => text,
                }
            }
            None => format!("{:>10}", "—"),
        };

        let bmi_cell = match profile.and_then(|p| stats::bmi(entry.weight_kg, p.height_cm)) {
            Some(bmi) => {
                let text = format!("{:>6}", format!("{:.1}", bmi));
                match BmiCategory::classify(bmi) {
                    BmiCategory::Underweight => text.blue().to_string(),
                    BmiCategory::Normal => text.green().to_string(),
                    BmiCategory::Overweight => text.yellow().to_string(),
                    BmiCategory::Obese => text.red().to_string(),
                }
            }
            None => format!("{:>6}", "—"),
        };

        out.push_str(&format!(
            "{:<12} {:>9} {} {}  {}\n",
            display_date(entry.date),
            format!("{:.1} kg", entry.weight_kg),
            change_cell,
            bmi_cell,
            entry.note.as_deref().unwrap_or("—")
        ));
    }

    out
}
