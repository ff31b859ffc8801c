//! Registration-entry cache reload engine for the identity plane.
//!
//! The crate's core is the skipped-event tracker: when a cache reload reads
//! the backing store, event ids whose rows are not yet visible to the
//! reader transaction are tracked and re-polled on later reload ticks with
//! decaying frequency, until they either surface or age past the store's
//! transaction visibility horizon.

pub mod config;
pub mod observability;
pub mod reload;

pub use config::{
    ConfigError, ReloadConfig, DEFAULT_POLL_JITTER, DEFAULT_RELOAD_INTERVAL_MS,
    DEFAULT_TRACK_FOR_MS,
};
pub use observability::{JournalError, JournalRetention, ReloadJournal, TrackerTelemetry};
pub use reload::{
    poll_periods, AgeBand, DynClock, EventBufferPool, EventTracker, MonotonicClock,
    PollPeriodTracker, PollPolicy, SkippedEventTracker, SystemMonotonicClock,
};
