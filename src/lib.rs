//! wtrack - personal weight tracking.
//!
//! Stores a body configuration (height, starting weight, goal weight)
//! and a time series of dated weight entries, derives summary statistics
//! (BMI, goal progress, per-entry trends), and renders them for the
//! terminal. All state persists as two JSON documents in a local
//! per-user data directory.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`store`] - Key-value persistence (two JSON slots, fail-soft reads)
//! - [`log`] - The entry log and its sorted-unique invariants
//! - [`profile`] - Validated body/goal configuration
//! - [`stats`] - Pure derived statistics (BMI, progress, trends)
//! - [`session`] - The session object: mutations and change notification
//! - [`render`] - Terminal presentation (panel, bar, chart, table)
//! - [`report`] - Report export (JSON, Markdown)
//! - [`error`] - Custom error types and handling
//! - [`testing`] - Test fixtures
//!
//! # Example
//!
//! ```rust,ignore
//! use wtrack::{Session, Store};
//!
//! let mut session = Session::open(Store::new(data_dir));
//! session.save_profile(170.0, 90.0, 70.0)?;
//! session.add_entry(date, 82.0, None)?;
//!
//! let summary = session.summary();
//! println!("{:?}", summary.progress_percent);
//! ```

pub mod error;
pub mod log;
pub mod profile;
pub mod render;
pub mod report;
pub mod session;
pub mod stats;
pub mod store;
pub mod testing;

// Re-export commonly used types
pub use error::{Result, TrackerError};

// Re-export data model types
pub use log::{Entry, EntryLog};
pub use profile::Profile;

// Re-export statistics engine types
pub use stats::{
    bmi, current_weight, delta_to_previous, progress_percent, weight_lost, weight_remaining,
    BmiCategory, Summary, Trend,
};

// Re-export session types
pub use session::{ChangeEvent, ChangeListener, Session};

// Re-export persistence and presentation types
pub use render::ChartSeries;
pub use report::{ProgressReport, ReportFormat};
pub use store::Store;
