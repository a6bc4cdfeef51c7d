//! Progress report types and formatting.
//!
//! This module provides types for exporting the tracker state as a
//! report in various formats (JSON, Markdown).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TrackerError;
use crate::log::{Entry, EntryLog};
use crate::profile::Profile;
use crate::render::display_date;
use crate::stats::Summary;

/// Output format for progress reports.
///
/// # Example
///
/// ```
/// use wtrack::report::ReportFormat;
///
/// assert_eq!(ReportFormat::Json.extension(), "json");
/// assert_eq!(ReportFormat::Markdown.extension(), "md");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// JSON format.
    Json,
    /// Markdown format.
    Markdown,
}

impl ReportFormat {
    /// Get the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = TrackerError;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(TrackerError::validation(
                "format",
                format!("'{}' is not a report format (json, markdown)", other),
            )),
        }
    }
}

/// A full progress report: summary figures plus the entry history.
///
/// # Example
///
/// ```
/// use wtrack::log::EntryLog;
/// use wtrack::report::ProgressReport;
///
/// let report = ProgressReport::build(None, &EntryLog::default());
/// assert_eq!(report.entries.len(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Timestamp when the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The profile, when configured.
    pub profile: Option<Profile>,
    /// Derived summary figures.
    pub summary: Summary,
    /// The entry history, ascending by date.
    pub entries: Vec<Entry>,
}

impl ProgressReport {
    /// Build a report from the current state.
    #[must_use]
    pub fn build(profile: Option<&Profile>, log: &EntryLog) -> Self {
        Self {
            generated_at: Utc::now(),
            profile: profile.copied(),
            summary: Summary::derive(profile, log),
            entries: log.entries().to_vec(),
        }
    }

    /// Export the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report to JSON")
    }

    /// Export the report as Markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Weight Progress Report\n\n");

        // Summary section
        md.push_str("## Summary\n\n");

        let kg = |value: Option<f64>| match value {
            Some(value) => format!("{:.1} kg", value),
            None => "—".to_string(),
        };

        md.push_str(&format!(
            "**Current weight:** {}\n\n",
            kg(self.summary.current_weight_kg)
        ));
        md.push_str(&format!(
            "**Goal weight:** {}\n\n",
            kg(self.summary.goal_weight_kg)
        ));
        md.push_str(&format!(
            "**Lost:** {}\n\n",
            kg(self.summary.weight_lost_kg)
        ));
        md.push_str(&format!(
            "**Remaining:** {}\n\n",
            kg(self.summary.weight_remaining_kg)
        ));

        match self.summary.progress_percent {
            Some(percent) => md.push_str(&format!("**Progress:** {:.0}%\n\n", percent)),
            None => md.push_str("**Progress:** —\n\n"),
        }

        match (self.summary.bmi, self.summary.bmi_category) {
            (Some(bmi), Some(category)) => {
                md.push_str(&format!("**BMI:** {:.1} ({})\n\n", bmi, category.label()));
            }
            _ => md.push_str("**BMI:** —\n\n"),
        }

        // History section
        md.push_str("## History\n\n");

        if self.entries.is_empty() {
            md.push_str("No entries recorded.\n\n");
        } else {
            md.push_str("| Date | Weight | Change | Note |\n");
            md.push_str("|------|--------|--------|------|\n");

            for (index, entry) in self.entries.iter().enumerate().rev() {
                let change = if index == 0 {
                    "—".to_string()
                } else {
                    let delta = entry.weight_kg - self.entries[index - 1].weight_kg;
                    let sign = if delta > 0.0 { "+" } else { "" };
                    format!("{}{:.1} kg", sign, delta)
                };

                md.push_str(&format!(
                    "| {} | {:.1} kg | {} | {} |\n",
                    display_date(entry.date),
                    entry.weight_kg,
                    change,
                    entry.note.as_deref().unwrap_or("—")
                ));
            }
            md.push('\n');
        }

        // Footer
        md.push_str("---\n\n");
        md.push_str(&format!(
            "*Generated at {}*\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        md
    }

    /// Export the report in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Markdown => Ok(self.to_markdown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_log, sample_profile};

    #[test]
    fn test_report_format_enum() {
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(
            "Markdown".parse::<ReportFormat>().unwrap(),
            ReportFormat::Markdown
        );
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);

        let err = "yaml".parse::<ReportFormat>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_report_json_is_valid() {
        let profile = sample_profile();
        let report = ProgressReport::build(Some(&profile), &sample_log());

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["progress_percent"], 40.0);
        assert_eq!(value["entries"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_report_markdown_structure() {
        let profile = sample_profile();
        let report = ProgressReport::build(Some(&profile), &sample_log());

        let md = report.to_markdown();

        assert!(md.contains("# Weight Progress Report"));
        assert!(md.contains("## Summary"));
        assert!(md.contains("## History"));
        assert!(md.contains("**Current weight:** 82.0 kg"));
        assert!(md.contains("**Progress:** 40%"));
        assert!(md.contains("| 01/02/2024 | 82.0 kg | -3.0 kg |"));
        assert!(md.contains("*Generated at "));
    }

    #[test]
    fn test_report_markdown_without_state() {
        let report = ProgressReport::build(None, &EntryLog::default());
        let md = report.to_markdown();

        assert!(md.contains("**Current weight:** —"));
        assert!(md.contains("**BMI:** —"));
        assert!(md.contains("No entries recorded."));
    }

    #[test]
    fn test_report_export_dispatch() {
        let report = ProgressReport::build(None, &EntryLog::default());

        let json = report.export(ReportFormat::Json).unwrap();
        assert!(json.contains("\"summary\""));

        let md = report.export(ReportFormat::Markdown).unwrap();
        assert!(md.contains("# Weight Progress Report"));
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let profile = sample_profile();
        let report = ProgressReport::build(Some(&profile), &sample_log());

        let json = report.to_json().unwrap();
        let restored: ProgressReport = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.entries.len(), 3);
        assert_eq!(restored.summary.current_weight_kg, Some(82.0));
    }
}
