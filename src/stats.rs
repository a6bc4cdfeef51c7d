//! Derived statistics over a profile and entry log.
//!
//! Everything in this module is a pure function of its inputs: no hidden
//! state, no side effects, recomputed on every call. Absent values are
//! genuine `Option`s — a missing profile or an empty log is never
//! conflated with a zero.

use serde::{Deserialize, Serialize};

use crate::log::EntryLog;
use crate::profile::Profile;

// ============================================================================
// BMI
// ============================================================================

/// Body Mass Index from a weight and a height.
///
/// Returns `None` when the height is zero, negative, or not finite.
///
/// # Example
///
/// ```
/// use wtrack::stats::bmi;
///
/// let value = bmi(82.0, 170.0).unwrap();
/// assert!((value - 28.37).abs() < 0.01);
/// assert!(bmi(82.0, 0.0).is_none());
/// ```
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// WHO band for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI in 18.5 to 25.
    Normal,
    /// BMI in 25 to 30.
    Overweight,
    /// BMI of 30 and above.
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Each band includes its lower bound.
    ///
    /// # Example
    ///
    /// ```
    /// use wtrack::stats::BmiCategory;
    ///
    /// assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
    /// assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    /// ```
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label for this band.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

// ============================================================================
// Progress figures
// ============================================================================

/// Weight of the maximum-date entry, `None` on an empty log.
#[must_use]
pub fn current_weight(log: &EntryLog) -> Option<f64> {
    log.latest().map(|entry| entry.weight_kg)
}

/// Kilograms lost since the starting weight, floored at zero.
///
/// A net gain since the start reports 0, not a negative number.
#[must_use]
pub fn weight_lost(profile: &Profile, current_kg: f64) -> f64 {
    (profile.initial_weight_kg - current_kg).max(0.0)
}

/// Kilograms still to lose before the goal, floored at zero.
#[must_use]
pub fn weight_remaining(profile: &Profile, current_kg: f64) -> f64 {
    (current_kg - profile.goal_weight_kg).max(0.0)
}

/// Fraction of the initial-to-goal interval closed by the current weight,
/// as a percentage clamped to `[0, 100]`.
///
/// Returns `None` when the interval is non-positive. A validated
/// [`Profile`] always has a positive interval; the guard here keeps the
/// engine total for callers that bypass [`Profile::new`].
///
/// # Example
///
/// ```
/// use wtrack::profile::Profile;
/// use wtrack::stats::progress_percent;
///
/// let profile = Profile::new(170.0, 90.0, 70.0).unwrap();
/// assert_eq!(progress_percent(&profile, 82.0), Some(40.0));
/// // Past the goal clamps to 100, not 116.7.
/// assert_eq!(progress_percent(&profile, 50.0), Some(100.0));
/// ```
#[must_use]
pub fn progress_percent(profile: &Profile, current_kg: f64) -> Option<f64> {
    let total = profile.total_to_lose();
    if total <= 0.0 {
        return None;
    }
    let done = profile.initial_weight_kg - current_kg;
    Some((done / total * 100.0).clamp(0.0, 100.0))
}

/// Weight change of the entry at `index` against its predecessor in
/// ascending date order.
///
/// `None` for the first entry or an out-of-range index. The sign is
/// preserved: this feeds the gain/loss badges, not the cumulative stats.
#[must_use]
pub fn delta_to_previous(log: &EntryLog, index: usize) -> Option<f64> {
    if index == 0 || index >= log.len() {
        return None;
    }
    let entries = log.entries();
    Some(entries[index].weight_kg - entries[index - 1].weight_kg)
}

/// Sign classification of a delta between consecutive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Weight went down.
    Loss,
    /// Weight went up.
    Gain,
    /// No change, or no predecessor to compare against.
    Same,
}

impl Trend {
    /// Classify a delta. Zero and absent both read as [`Trend::Same`].
    #[must_use]
    pub fn classify(delta: Option<f64>) -> Self {
        match delta {
            Some(delta) if delta < 0.0 => Self::Loss,
            Some(delta) if delta > 0.0 => Self::Gain,
            _ => Self::Same,
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Aggregate snapshot of every derived figure the presentation layer
/// displays.
///
/// Derived wholesale from the current `(profile, log)` pair; there is no
/// cached or incremental state to go stale.
///
/// # Example
///
/// ```
/// use wtrack::log::EntryLog;
/// use wtrack::stats::Summary;
///
/// let summary = Summary::derive(None, &EntryLog::default());
/// assert!(summary.current_weight_kg.is_none());
/// assert_eq!(summary.entry_count, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Number of entries in the log.
    pub entry_count: usize,
    /// Weight of the maximum-date entry.
    pub current_weight_kg: Option<f64>,
    /// Starting weight from the profile.
    pub initial_weight_kg: Option<f64>,
    /// Goal weight from the profile.
    pub goal_weight_kg: Option<f64>,
    /// Kilograms lost since the start, floored at zero.
    pub weight_lost_kg: Option<f64>,
    /// Kilograms still to lose, floored at zero.
    pub weight_remaining_kg: Option<f64>,
    /// Progress through the initial-to-goal interval, in `[0, 100]`.
    pub progress_percent: Option<f64>,
    /// BMI of the current weight.
    pub bmi: Option<f64>,
    /// Band of the current BMI.
    pub bmi_category: Option<BmiCategory>,
}

impl Summary {
    /// Derive the snapshot from a profile and log.
    ///
    /// Each field is independently absent when its inputs are: BMI needs
    /// a profile and at least one entry, the progress figures need both
    /// as well, the entry count needs neither.
    #[must_use]
    pub fn derive(profile: Option<&Profile>, log: &EntryLog) -> Self {
        let current = current_weight(log);
        let bmi_value = match (profile, current) {
            (Some(profile), Some(weight)) => bmi(weight, profile.height_cm),
            _ => None,
        };

        Self {
            entry_count: log.len(),
            current_weight_kg: current,
            initial_weight_kg: profile.map(|p| p.initial_weight_kg),
            goal_weight_kg: profile.map(|p| p.goal_weight_kg),
            weight_lost_kg: profile.zip(current).map(|(p, w)| weight_lost(p, w)),
            weight_remaining_kg: profile.zip(current).map(|(p, w)| weight_remaining(p, w)),
            progress_percent: profile.zip(current).and_then(|(p, w)| progress_percent(p, w)),
            bmi: bmi_value,
            bmi_category: bmi_value.map(BmiCategory::classify),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Entry;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario_profile() -> Profile {
        Profile::new(170.0, 90.0, 70.0).unwrap()
    }

    fn scenario_log() -> EntryLog {
        let mut log = EntryLog::new();
        for (date, weight) in [
            (day(2024, 1, 1), 90.0),
            (day(2024, 1, 15), 85.0),
            (day(2024, 2, 1), 82.0),
        ] {
            log.add(Entry::new(date, weight).unwrap()).unwrap();
        }
        log
    }

    // ========================================================================
    // BMI Tests
    // ========================================================================

    #[test]
    fn test_bmi_formula() {
        let value = bmi(82.0, 170.0).unwrap();
        assert!((value - 28.373_702).abs() < 1e-6);
    }

    #[test]
    fn test_bmi_absent_for_unusable_height() {
        assert!(bmi(82.0, 0.0).is_none());
        assert!(bmi(82.0, -170.0).is_none());
        assert!(bmi(82.0, f64::NAN).is_none());
    }

    #[test]
    fn test_bmi_category_boundaries_inclusive_below() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_category_monotone_in_weight() {
        // For a fixed height, a heavier weight never classifies into a
        // lower band.
        let rank = |category: BmiCategory| match category {
            BmiCategory::Underweight => 0,
            BmiCategory::Normal => 1,
            BmiCategory::Overweight => 2,
            BmiCategory::Obese => 3,
        };

        let mut previous = 0;
        for weight in (40..=140).map(f64::from) {
            let current = rank(BmiCategory::classify(bmi(weight, 170.0).unwrap()));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_bmi_category_labels() {
        assert_eq!(BmiCategory::Underweight.label(), "Underweight");
        assert_eq!(BmiCategory::Normal.label(), "Normal");
        assert_eq!(BmiCategory::Overweight.label(), "Overweight");
        assert_eq!(BmiCategory::Obese.label(), "Obese");
    }

    // ========================================================================
    // Progress Tests
    // ========================================================================

    #[test]
    fn test_current_weight_absent_on_empty_log() {
        assert!(current_weight(&EntryLog::new()).is_none());
    }

    #[test]
    fn test_weight_lost_floors_at_zero() {
        let profile = Profile::new(170.0, 70.0, 60.0).unwrap();
        assert_eq!(weight_lost(&profile, 75.0), 0.0);
        assert_eq!(weight_lost(&profile, 65.0), 5.0);
    }

    #[test]
    fn test_weight_remaining_floors_at_zero() {
        let profile = scenario_profile();
        assert_eq!(weight_remaining(&profile, 82.0), 12.0);
        assert_eq!(weight_remaining(&profile, 65.0), 0.0);
    }

    #[test]
    fn test_progress_percent_clamps_past_goal() {
        let profile = Profile::new(170.0, 80.0, 60.0).unwrap();
        assert_eq!(progress_percent(&profile, 50.0), Some(100.0));
    }

    #[test]
    fn test_progress_percent_clamps_below_start() {
        let profile = Profile::new(170.0, 80.0, 60.0).unwrap();
        assert_eq!(progress_percent(&profile, 85.0), Some(0.0));
    }

    #[test]
    fn test_progress_percent_absent_for_degenerate_interval() {
        // Unreachable through Profile::new; exercised directly.
        let degenerate = Profile {
            height_cm: 170.0,
            initial_weight_kg: 80.0,
            goal_weight_kg: 80.0,
        };
        assert!(progress_percent(&degenerate, 75.0).is_none());
    }

    #[test]
    fn test_delta_to_previous_signs() {
        let mut log = scenario_log();
        log.add(Entry::new(day(2024, 2, 10), 83.5).unwrap()).unwrap();

        assert_eq!(delta_to_previous(&log, 0), None);
        assert_eq!(delta_to_previous(&log, 1), Some(-5.0));
        assert_eq!(delta_to_previous(&log, 3), Some(1.5));
        assert_eq!(delta_to_previous(&log, 4), None);
    }

    #[test]
    fn test_trend_classification() {
        assert_eq!(Trend::classify(Some(-0.5)), Trend::Loss);
        assert_eq!(Trend::classify(Some(0.5)), Trend::Gain);
        assert_eq!(Trend::classify(Some(0.0)), Trend::Same);
        assert_eq!(Trend::classify(None), Trend::Same);
    }

    // ========================================================================
    // Summary Tests
    // ========================================================================

    #[test]
    fn test_summary_concrete_scenario() {
        // 170 cm, 90 -> 70 kg, entries 90 / 85 / 82.
        let profile = scenario_profile();
        let log = scenario_log();

        let summary = Summary::derive(Some(&profile), &log);

        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.current_weight_kg, Some(82.0));
        assert_eq!(summary.weight_lost_kg, Some(8.0));
        assert_eq!(summary.weight_remaining_kg, Some(12.0));
        assert_eq!(summary.progress_percent, Some(40.0));

        let bmi_value = summary.bmi.unwrap();
        assert!((bmi_value - 28.37).abs() < 0.01);
        assert_eq!(summary.bmi_category, Some(BmiCategory::Overweight));
    }

    #[test]
    fn test_summary_without_profile() {
        let log = scenario_log();
        let summary = Summary::derive(None, &log);

        assert_eq!(summary.current_weight_kg, Some(82.0));
        assert!(summary.initial_weight_kg.is_none());
        assert!(summary.weight_lost_kg.is_none());
        assert!(summary.weight_remaining_kg.is_none());
        assert!(summary.progress_percent.is_none());
        assert!(summary.bmi.is_none());
        assert!(summary.bmi_category.is_none());
    }

    #[test]
    fn test_summary_without_entries() {
        let profile = scenario_profile();
        let summary = Summary::derive(Some(&profile), &EntryLog::new());

        assert_eq!(summary.entry_count, 0);
        assert!(summary.current_weight_kg.is_none());
        assert_eq!(summary.goal_weight_kg, Some(70.0));
        assert!(summary.weight_lost_kg.is_none());
        assert!(summary.progress_percent.is_none());
    }

    #[test]
    fn test_summary_gain_since_start_reports_zero_lost() {
        let profile = Profile::new(170.0, 70.0, 60.0).unwrap();
        let mut log = EntryLog::new();
        log.add(Entry::new(day(2024, 1, 1), 75.0).unwrap()).unwrap();

        let summary = Summary::derive(Some(&profile), &log);

        assert_eq!(summary.weight_lost_kg, Some(0.0));
        assert_eq!(summary.progress_percent, Some(0.0));
    }

    #[test]
    fn test_summary_serialization() {
        let summary = Summary::derive(Some(&scenario_profile()), &scenario_log());

        let json = serde_json::to_string(&summary).unwrap();
        let restored: Summary = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.progress_percent, Some(40.0));
        assert_eq!(restored.bmi_category, Some(BmiCategory::Overweight));
    }
}
