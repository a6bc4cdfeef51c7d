//! The weight chart: series document and ASCII rendering.

use serde::Serialize;

use crate::log::EntryLog;
use crate::profile::Profile;

/// Y-axis padding around the observed weights, in kilograms.
const Y_PAD_KG: f64 = 2.0;

/// Chart-ready series: display labels, weights, and a flat goal line.
///
/// This is the document an external renderer consumes; the ASCII chart
/// below is one consumer of it.
///
/// # Example
///
/// ```
/// use wtrack::render::ChartSeries;
/// use wtrack::log::EntryLog;
///
/// let series = ChartSeries::from_log(None, &EntryLog::default());
/// assert!(series.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartSeries {
    /// Display dates, ascending, one per entry.
    pub labels: Vec<String>,
    /// Weights in kilograms, aligned with `labels`.
    pub weights: Vec<f64>,
    /// Goal weight repeated per entry; empty without a profile.
    pub goal_line: Vec<f64>,
}

impl ChartSeries {
    /// Build the series from the sorted log.
    #[must_use]
    pub fn from_log(profile: Option<&Profile>, log: &EntryLog) -> Self {
        let labels = log
            .entries()
            .iter()
            .map(|entry| super::display_date(entry.date))
            .collect();
        let weights: Vec<f64> = log.entries().iter().map(|entry| entry.weight_kg).collect();
        let goal_line = profile
            .map(|p| vec![p.goal_weight_kg; weights.len()])
            .unwrap_or_default();

        Self {
            labels,
            weights,
            goal_line,
        }
    }

    /// Whether there is anything to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Render an ASCII area chart of the weight series.
    ///
    /// The y-range is the observed weights padded by ±2 kg; the goal
    /// line overlays as a dashed row when it falls inside that range.
    ///
    /// # Arguments
    ///
    /// * `width` - Chart width in characters
    /// * `height` - Chart height in lines
    #[must_use]
    pub fn render_ascii(&self, width: usize, height: usize) -> String {
        if self.is_empty() {
            return "Weight (kg)\n\nNo data available.\n".to_string();
        }

        let min_w = self.weights.iter().copied().fold(f64::INFINITY, f64::min);
        let max_w = self
            .weights
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = min_w - Y_PAD_KG;
        let max_y = max_w + Y_PAD_KG;
        let range = max_y - min_y;

        let mut chart = String::new();

        chart.push_str("Weight (kg)\n");
        chart.push_str(&"─".repeat(width));
        chart.push('\n');

        // Reserve rows for the title, x-axis, and legend, and columns for
        // the y-axis labels.
        let effective_height = height.saturating_sub(3).max(1);
        let effective_width = width.saturating_sub(10).max(1);

        let level_of = |value: f64| -> usize {
            ((value - min_y) * effective_height as f64 / range) as usize
        };
        let goal_level = self.goal_line.first().copied().and_then(|goal| {
            if goal >= min_y && goal <= max_y {
                Some(level_of(goal))
            } else {
                None
            }
        });

        for row in 0..effective_height {
            let row_from_bottom = effective_height - 1 - row;
            let y_value = max_y - row as f64 * range / effective_height as f64;
            chart.push_str(&format!("{:>8.1} │", y_value));

            for col in 0..effective_width {
                let data_idx = col * self.weights.len() / effective_width;
                let cell = if data_idx < self.weights.len()
                    && level_of(self.weights[data_idx]) >= row_from_bottom
                {
                    '█'
                } else if goal_level == Some(row_from_bottom) {
                    '┄'
                } else {
                    ' '
                };
                chart.push(cell);
            }
            chart.push('\n');
        }

        // X-axis
        chart.push_str(&format!("{:>8} └", ""));
        chart.push_str(&"─".repeat(effective_width));
        chart.push('\n');

        // Legend
        let goal_note = self
            .goal_line
            .first()
            .map(|goal| format!(" | goal {:.1} kg", goal))
            .unwrap_or_default();
        chart.push_str(&format!(
            "          {} entries | {} → {}{}\n",
            self.weights.len(),
            self.labels.first().map(String::as_str).unwrap_or("?"),
            self.labels.last().map(String::as_str).unwrap_or("?"),
            goal_note
        ));

        chart
    }
}
