//! The tracker session: working state, mutations, change notification.
//!
//! The session replaces module-level globals with one explicit object
//! passed to every caller. It owns the store handle plus the in-memory
//! profile and log, applies every mutation all-or-nothing, and notifies
//! subscribed listeners after each successful mutation so the
//! presentation layer can redraw without the core knowing how.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::log::{Entry, EntryLog};
use crate::profile::Profile;
use crate::stats::Summary;
use crate::store::Store;

/// Emitted once after every successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The profile was saved (created or replaced).
    ProfileSaved,
    /// An entry was inserted.
    EntryAdded { date: NaiveDate },
    /// An entry was deleted.
    EntryRemoved { date: NaiveDate },
    /// The whole log was cleared.
    EntriesCleared,
}

/// Observer for successful state changes.
///
/// Failed or no-op mutations emit nothing: a listener only ever sees
/// states that were persisted.
pub trait ChangeListener {
    /// Called after the mutation has been persisted and committed.
    fn on_change(&self, event: &ChangeEvent);
}

/// One user's tracking session.
///
/// # Example
///
/// ```rust,ignore
/// use wtrack::session::Session;
/// use wtrack::store::Store;
///
/// let mut session = Session::open(Store::new(data_dir));
/// session.save_profile(170.0, 90.0, 70.0)?;
/// session.add_entry(date, 85.0, None)?;
/// println!("{:?}", session.summary().progress_percent);
/// ```
pub struct Session {
    store: Store,
    profile: Option<Profile>,
    log: EntryLog,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl Session {
    /// Open a session over a store, reading both slots fail-soft.
    #[must_use]
    pub fn open(store: Store) -> Self {
        let profile = store.load_profile();
        let log = store.load_entries();

        debug!(
            entries = log.len(),
            configured = profile.is_some(),
            "session opened"
        );

        Self {
            store,
            profile,
            log,
            listeners: Vec::new(),
        }
    }

    /// The current profile, `None` when unconfigured.
    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// The entry log, ascending by date.
    #[must_use]
    pub fn log(&self) -> &EntryLog {
        &self.log
    }

    /// Derive the statistics snapshot for the current state.
    ///
    /// Recomputed on every call; nothing is cached across mutations.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::derive(self.profile.as_ref(), &self.log)
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    // =========================================================================
    // Mutations
    // =========================================================================
    //
    // Every mutation follows the same discipline: validate, persist,
    // then commit to memory and notify. A failure anywhere leaves the
    // in-memory state exactly as it was.

    /// Validate and save the profile, replacing any previous one wholesale.
    ///
    /// # Errors
    ///
    /// Validation errors per [`Profile::new`]; store errors when the
    /// document cannot be persisted. Neither mutates the session.
    pub fn save_profile(
        &mut self,
        height_cm: f64,
        initial_weight_kg: f64,
        goal_weight_kg: f64,
    ) -> Result<Profile> {
        let profile = Profile::new(height_cm, initial_weight_kg, goal_weight_kg)?;
        self.store.save_profile(&profile)?;

        self.profile = Some(profile);
        debug!(height_cm, initial_weight_kg, goal_weight_kg, "profile saved");
        self.notify(&ChangeEvent::ProfileSaved);
        Ok(profile)
    }

    /// Validate and insert one entry.
    ///
    /// # Errors
    ///
    /// Validation errors for an out-of-range weight or a duplicate date;
    /// store errors when persisting fails. Neither mutates the session.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        weight_kg: f64,
        note: Option<&str>,
    ) -> Result<()> {
        let mut entry = Entry::new(date, weight_kg)?;
        if let Some(note) = note {
            entry = entry.with_note(note);
        }

        let mut updated = self.log.clone();
        updated.add(entry)?;
        self.store.save_entries(&updated)?;

        self.log = updated;
        debug!(%date, weight_kg, "entry added");
        self.notify(&ChangeEvent::EntryAdded { date });
        Ok(())
    }

    /// Remove the entry for a date.
    ///
    /// Returns `Ok(false)` when no entry matched; nothing is written and
    /// no event fires.
    ///
    /// # Errors
    ///
    /// Store errors when persisting the shrunk log fails.
    pub fn remove_entry(&mut self, date: NaiveDate) -> Result<bool> {
        let mut updated = self.log.clone();
        if !updated.remove(date) {
            return Ok(false);
        }
        self.store.save_entries(&updated)?;

        self.log = updated;
        debug!(%date, "entry removed");
        self.notify(&ChangeEvent::EntryRemoved { date });
        Ok(true)
    }

    /// Delete all entries.
    ///
    /// Destructive; callers are expected to confirm with the user first.
    ///
    /// # Errors
    ///
    /// Store errors when persisting the empty log fails.
    pub fn clear_entries(&mut self) -> Result<()> {
        let updated = EntryLog::new();
        self.store.save_entries(&updated)?;

        self.log = updated;
        debug!("entries cleared");
        self.notify(&ChangeEvent::EntriesCleared);
        Ok(())
    }

    fn notify(&self, event: &ChangeEvent) {
        for listener in &self.listeners {
            listener.on_change(event);
        }
    }
}
