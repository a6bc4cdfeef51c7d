//! Test fixtures for reproducible tracker states.
//!
//! Canned profiles and logs shared by unit tests across modules.

use chrono::NaiveDate;

use crate::log::{Entry, EntryLog};
use crate::profile::Profile;

/// Date literal helper.
///
/// # Panics
///
/// Panics on an invalid calendar date.
#[must_use]
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// The profile used across examples and tests: 170 cm, 90 kg down to 70 kg.
#[must_use]
pub fn sample_profile() -> Profile {
    Profile::new(170.0, 90.0, 70.0).expect("sample profile is valid")
}

/// Three-entry log: 90.0 on 2024-01-01, 85.0 on 2024-01-15, 82.0 on
/// 2024-02-01.
///
/// With [`sample_profile`] this lands at 40% progress and a BMI of 28.4.
#[must_use]
pub fn sample_log() -> EntryLog {
    let mut log = EntryLog::new();
    for (date, weight) in [
        (day(2024, 1, 1), 90.0),
        (day(2024, 1, 15), 85.0),
        (day(2024, 2, 1), 82.0),
    ] {
        log.add(Entry::new(date, weight).expect("sample weight is valid"))
            .expect("sample dates are unique");
    }
    log
}
