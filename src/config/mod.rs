pub mod schema;

pub use schema::{
    ConfigError, ReloadConfig, DEFAULT_POLL_JITTER, DEFAULT_RELOAD_INTERVAL_MS,
    DEFAULT_TRACK_FOR_MS,
};
