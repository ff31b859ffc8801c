use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default reload cadence for the entry cache (5 s).
pub const DEFAULT_RELOAD_INTERVAL_MS: u64 = 5_000;
/// Default tracking horizon, matching the store's transaction visibility
/// timeout (24 h).
pub const DEFAULT_TRACK_FOR_MS: u64 = 86_400_000;
/// Default jitter divisor applied to reschedule intervals.
pub const DEFAULT_POLL_JITTER: u32 = 10;

/// Floor for the reload interval; anything faster hammers the store.
const MIN_RELOAD_INTERVAL_MS: u64 = 1_000;

/// Knobs for the event-driven cache reload loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadConfig {
    /// How often the cache reloads from the backing store, in milliseconds.
    /// This is also the young-band poll interval for skipped events.
    #[serde(default = "default_reload_interval_ms")]
    pub reload_interval_ms: u64,
    /// How long a skipped event keeps being re-polled, in milliseconds.
    #[serde(default = "default_track_for_ms")]
    pub track_for_ms: u64,
    /// Jitter divisor for reschedule intervals; `0` disables jitter.
    #[serde(default = "default_poll_jitter")]
    pub poll_jitter: u32,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            reload_interval_ms: DEFAULT_RELOAD_INTERVAL_MS,
            track_for_ms: DEFAULT_TRACK_FOR_MS,
            poll_jitter: DEFAULT_POLL_JITTER,
        }
    }
}

impl ReloadConfig {
    /// Validates the knob combination before a poll policy is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reload_interval_ms < MIN_RELOAD_INTERVAL_MS {
            return Err(ConfigError::IntervalTooShort {
                interval_ms: self.reload_interval_ms,
            });
        }
        if self.track_for_ms < self.reload_interval_ms {
            return Err(ConfigError::HorizonTooShort {
                track_for_ms: self.track_for_ms,
                reload_interval_ms: self.reload_interval_ms,
            });
        }
        Ok(())
    }
}

fn default_reload_interval_ms() -> u64 {
    DEFAULT_RELOAD_INTERVAL_MS
}

fn default_track_for_ms() -> u64 {
    DEFAULT_TRACK_FOR_MS
}

fn default_poll_jitter() -> u32 {
    DEFAULT_POLL_JITTER
}

/// Errors surfaced while validating reload configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reload interval {interval_ms}ms is below the 1s floor")]
    IntervalTooShort { interval_ms: u64 },
    #[error(
        "track horizon {track_for_ms}ms is shorter than the reload interval {reload_interval_ms}ms"
    )]
    HorizonTooShort {
        track_for_ms: u64,
        reload_interval_ms: u64,
    },
}
