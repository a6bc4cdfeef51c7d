//! Body configuration: height, starting weight, goal weight.
//!
//! A profile is saved wholesale and never merged with a previous one.
//! The unconfigured state is `Option<Profile>::None` — a half-filled
//! profile is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Minimum accepted height in centimeters.
pub const MIN_HEIGHT_CM: f64 = 100.0;
/// Maximum accepted height in centimeters.
pub const MAX_HEIGHT_CM: f64 = 250.0;
/// Minimum accepted weight in kilograms, for the profile and entries alike.
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Maximum accepted entry weight in kilograms.
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Validated body and goal parameters.
///
/// # Example
///
/// ```
/// use wtrack::profile::Profile;
///
/// let profile = Profile::new(170.0, 90.0, 70.0).unwrap();
/// assert_eq!(profile.total_to_lose(), 20.0);
///
/// // The goal must sit strictly below the starting weight.
/// assert!(Profile::new(170.0, 80.0, 80.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Height in centimeters.
    pub height_cm: f64,
    /// Weight at the start of tracking, in kilograms.
    pub initial_weight_kg: f64,
    /// Target weight in kilograms. Always strictly below the initial weight.
    pub goal_weight_kg: f64,
}

impl Profile {
    /// Validate and construct a profile.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError::Validation`] naming the offending field
    /// when the height is outside 100-250 cm, either weight is below
    /// 30 kg, the goal weight is not below the initial weight, or any
    /// input is not a finite number.
    pub fn new(height_cm: f64, initial_weight_kg: f64, goal_weight_kg: f64) -> Result<Self> {
        // NaN slips through plain range comparisons, so finiteness is
        // checked explicitly per field.
        if !height_cm.is_finite() || !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(TrackerError::validation(
                "height",
                format!(
                    "must be between {} and {} cm",
                    MIN_HEIGHT_CM, MAX_HEIGHT_CM
                ),
            ));
        }

        if !initial_weight_kg.is_finite() || initial_weight_kg < MIN_WEIGHT_KG {
            return Err(TrackerError::validation(
                "initial_weight",
                format!("must be at least {} kg", MIN_WEIGHT_KG),
            ));
        }

        if !goal_weight_kg.is_finite() || goal_weight_kg < MIN_WEIGHT_KG {
            return Err(TrackerError::validation(
                "goal_weight",
                format!("must be at least {} kg", MIN_WEIGHT_KG),
            ));
        }

        // An equal goal would also make the progress interval zero-length.
        if goal_weight_kg >= initial_weight_kg {
            return Err(TrackerError::validation(
                "goal_weight",
                "must be below the initial weight",
            ));
        }

        Ok(Self {
            height_cm,
            initial_weight_kg,
            goal_weight_kg,
        })
    }

    /// Width of the initial-to-goal interval in kilograms.
    ///
    /// Always positive for a validated profile.
    #[must_use]
    pub fn total_to_lose(&self) -> f64 {
        self.initial_weight_kg - self.goal_weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = Profile::new(170.0, 90.0, 70.0).unwrap();
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.initial_weight_kg, 90.0);
        assert_eq!(profile.goal_weight_kg, 70.0);
    }

    #[test]
    fn test_height_bounds_are_inclusive() {
        assert!(Profile::new(100.0, 90.0, 70.0).is_ok());
        assert!(Profile::new(250.0, 90.0, 70.0).is_ok());
        assert!(Profile::new(99.9, 90.0, 70.0).is_err());
        assert!(Profile::new(250.1, 90.0, 70.0).is_err());
    }

    #[test]
    fn test_rejections_name_the_field() {
        let field_of = |err: TrackerError| match err {
            TrackerError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        };

        assert_eq!(
            field_of(Profile::new(90.0, 90.0, 70.0).unwrap_err()),
            "height"
        );
        assert_eq!(
            field_of(Profile::new(170.0, 20.0, 70.0).unwrap_err()),
            "initial_weight"
        );
        assert_eq!(
            field_of(Profile::new(170.0, 90.0, 20.0).unwrap_err()),
            "goal_weight"
        );
        assert_eq!(
            field_of(Profile::new(170.0, 70.0, 90.0).unwrap_err()),
            "goal_weight"
        );
    }

    #[test]
    fn test_equal_goal_and_initial_rejected() {
        // Zero-length progress interval; refused at save time so the
        // engine never divides by it.
        let err = Profile::new(170.0, 80.0, 80.0).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("below the initial weight"));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(Profile::new(f64::NAN, 90.0, 70.0).is_err());
        assert!(Profile::new(170.0, f64::INFINITY, 70.0).is_err());
        assert!(Profile::new(170.0, 90.0, f64::NAN).is_err());
    }

    #[test]
    fn test_total_to_lose() {
        let profile = Profile::new(170.0, 90.0, 70.0).unwrap();
        assert_eq!(profile.total_to_lose(), 20.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let profile = Profile::new(182.5, 104.3, 85.0).unwrap();

        let json = serde_json::to_string(&profile).unwrap();
        let restored: Profile = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, profile);
    }
}
