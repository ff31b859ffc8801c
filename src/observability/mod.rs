//! Telemetry counters and the reload-tick journal.

pub mod journal;
pub mod telemetry;

pub use journal::{JournalError, JournalRetention, ReloadJournal};
pub use telemetry::TrackerTelemetry;
