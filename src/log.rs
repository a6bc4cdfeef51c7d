//! The entry log: dated weight observations.
//!
//! The log owns its entries and the two structural invariants over them:
//! dates are unique, and the sequence is always sorted ascending by date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::profile::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};

/// One dated weight observation.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use wtrack::log::Entry;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let entry = Entry::new(date, 85.0).unwrap().with_note("after holidays");
/// assert_eq!(entry.note.as_deref(), Some("after holidays"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Calendar day of the observation. Unique within a log.
    pub date: NaiveDate,
    /// Observed weight in kilograms.
    pub weight_kg: f64,
    /// Free-text annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    /// Validate and construct an entry.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError::Validation`] on the `weight` field when
    /// the weight is outside 30-300 kg or not a finite number.
    pub fn new(date: NaiveDate, weight_kg: f64) -> Result<Self> {
        if !weight_kg.is_finite() || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
            return Err(TrackerError::validation(
                "weight",
                format!("must be between {} and {} kg", MIN_WEIGHT_KG, MAX_WEIGHT_KG),
            ));
        }

        Ok(Self {
            date,
            weight_kg,
            note: None,
        })
    }

    /// Attach a note. Whitespace is trimmed; an empty note stays absent.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        let trimmed = note.trim();
        self.note = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }
}

/// Ordered collection of entries, unique by date, ascending.
///
/// Serializes transparently as a bare JSON array, so the stored slot is
/// the entry list itself.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use wtrack::log::{Entry, EntryLog};
///
/// let mut log = EntryLog::default();
/// let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// log.add(Entry::new(date, 82.0).unwrap()).unwrap();
///
/// assert_eq!(log.latest().unwrap().weight_kg, 82.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLog {
    entries: Vec<Entry>,
}

impl EntryLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at its sorted position.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError::Validation`] on the `date` field when an
    /// entry for that date already exists. The log is unchanged on error.
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        match self
            .entries
            .binary_search_by(|existing| existing.date.cmp(&entry.date))
        {
            Ok(_) => Err(TrackerError::validation(
                "date",
                format!("an entry for {} already exists", entry.date),
            )),
            Err(position) => {
                self.entries.insert(position, entry);
                Ok(())
            }
        }
    }

    /// Remove the entry for a date.
    ///
    /// Returns `false` when no entry matched; an absent date is a no-op,
    /// not an error.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        match self
            .entries
            .binary_search_by(|existing| existing.date.cmp(&date))
        {
            Ok(position) => {
                self.entries.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in ascending date order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry with the maximum date, if any.
    ///
    /// This is the "current" observation regardless of insertion order.
    #[must_use]
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Look up the entry for a date.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries
            .binary_search_by(|existing| existing.date.cmp(&date))
            .ok()
            .map(|position| &self.entries[position])
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Restore the sorted-unique invariant after deserializing.
    ///
    /// A hand-edited slot may arrive unsorted or with duplicate dates;
    /// the first entry of a date wins.
    pub(crate) fn normalize(&mut self) {
        self.entries.sort_by_key(|entry| entry.date);
        self.entries.dedup_by_key(|entry| entry.date);
    }
}
