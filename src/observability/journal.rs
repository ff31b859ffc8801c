use serde::Serialize;
use std::collections::VecDeque;
use thiserror::Error;

/// Retention policy for the reload-tick journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalRetention {
    pub max_records: usize,
}

impl Default for JournalRetention {
    fn default() -> Self {
        Self { max_records: 4096 }
    }
}

#[derive(Debug, Serialize)]
struct TickRecord {
    ts_ms: u64,
    tracked: usize,
    selected: usize,
    retired: u64,
}

/// JSON-line journal of reload ticks with bounded retention.
///
/// The reload loop appends one record after each selection; the tracker
/// itself stays journal-free to keep the hot path allocation-light.
#[derive(Debug, Clone)]
pub struct ReloadJournal {
    retention: JournalRetention,
    records: VecDeque<String>,
}

impl ReloadJournal {
    /// Creates a journal anchored to the provided retention policy.
    pub fn new(retention: JournalRetention) -> Self {
        Self {
            retention,
            records: VecDeque::new(),
        }
    }

    /// Appends one tick record, evicting the oldest lines past retention.
    pub fn record_tick(
        &mut self,
        ts_ms: u64,
        tracked: usize,
        selected: usize,
        retired: u64,
    ) -> Result<(), JournalError> {
        let line = serde_json::to_string(&TickRecord {
            ts_ms,
            tracked,
            selected,
            retired,
        })?;
        self.records.push_back(line);
        while self.records.len() > self.retention.max_records {
            self.records.pop_front();
        }
        Ok(())
    }

    /// Journal lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(String::as_str)
    }
}

/// Errors surfaced while serializing journal lines.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to serialize tick record: {0}")]
    Serialize(#[from] serde_json::Error),
}
