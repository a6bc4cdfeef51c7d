//! Key-value persistence for the tracker's two document slots.
//!
//! Each slot is one JSON file under the data directory. Reads are
//! fail-soft: an absent or malformed slot yields the caller's default
//! and never an error. Writes replace the whole document.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{Result, TrackerError};
use crate::log::EntryLog;
use crate::profile::Profile;

/// Name of the profile slot.
pub const SLOT_CONFIG: &str = "config";
/// Name of the entry-log slot.
pub const SLOT_ENTRIES: &str = "entries";

/// Local key-value store over a data directory.
///
/// # Example
///
/// ```rust,ignore
/// use wtrack::store::Store;
///
/// let store = Store::new(Store::default_dir().unwrap());
/// let log = store.load_entries();
/// ```
#[derive(Debug)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Create a store over the given data directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Default per-user data directory (`<platform data dir>/wtrack`).
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("wtrack"))
    }

    /// The directory this store reads and writes under.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", slot))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    /// Read a slot, falling back to `default` when it is absent or
    /// malformed.
    ///
    /// A malformed slot is logged and recovered from locally; it is
    /// never surfaced to the caller.
    pub fn read_slot<T: DeserializeOwned>(&self, slot: &str, default: T) -> T {
        let path = self.slot_path(slot);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return default,
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "malformed '{}' slot at {}, using default: {}",
                    slot,
                    path.display(),
                    err
                );
                default
            }
        }
    }

    /// Replace a slot wholesale with a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns a [`TrackerError::Store`] when the document cannot be
    /// written to disk.
    pub fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;

        let path = self.slot_path(slot);
        let json = serde_json::to_string_pretty(value)?;

        fs::write(&path, json).map_err(|err| {
            TrackerError::store_with_path(
                format!("failed to write '{}' slot: {}", slot, err),
                path,
            )
        })
    }

    // =========================================================================
    // Typed slot accessors
    // =========================================================================

    /// Load the profile; `None` when unconfigured (absent, null, or
    /// malformed slot).
    #[must_use]
    pub fn load_profile(&self) -> Option<Profile> {
        self.read_slot(SLOT_CONFIG, None)
    }

    /// Persist the profile.
    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.write_slot(SLOT_CONFIG, profile)
    }

    /// Load the entry log, restoring its sorted-unique invariant.
    #[must_use]
    pub fn load_entries(&self) -> EntryLog {
        let mut log = self.read_slot(SLOT_ENTRIES, EntryLog::default());
        log.normalize();
        log
    }

    /// Persist the entry log.
    pub fn save_entries(&self, log: &EntryLog) -> Result<()> {
        self.write_slot(SLOT_ENTRIES, log)
    }
}
