use std::collections::HashMap;

use super::buffer::EventBufferPool;
use super::EventTracker;

/// Lower clamp applied to both inputs of [`poll_periods`].
const MIN_PERIOD_MS: u64 = 1_000;

/// Number of reload ticks an event is polled for when every tick polls
/// every live event.
pub fn poll_periods(poll_ms: u64, track_ms: u64) -> u32 {
    let poll = poll_ms.max(MIN_PERIOD_MS);
    let track = track_ms.max(MIN_PERIOD_MS);
    u32::try_from(1 + (track - 1) / poll).unwrap_or(u32::MAX)
}

/// Counter-based tracker that polls every live event on every tick.
///
/// This is the baseline the reload-tick benchmarks compare the
/// priority-queue tracker against: selection cost grows linearly with the
/// tracked population, and emission order is unspecified.
pub struct PollPeriodTracker {
    poll_periods: u32,
    events: HashMap<u64, u32>,
    pool: EventBufferPool,
}

impl PollPeriodTracker {
    pub fn new(poll_periods: u32) -> Self {
        Self {
            poll_periods: poll_periods.max(1),
            events: HashMap::new(),
            pool: EventBufferPool::new(),
        }
    }

    /// Returns the per-event poll budget.
    pub fn poll_periods(&self) -> u32 {
        self.poll_periods
    }

    /// Drops an event before its poll budget is exhausted.
    pub fn stop_tracking(&mut self, id: u64) {
        self.events.remove(&id);
    }
}

impl EventTracker for PollPeriodTracker {
    /// Begins tracking an id. An id that is already tracked keeps its
    /// accumulated poll count.
    fn start_tracking(&mut self, id: u64) {
        self.events.entry(id).or_insert(0);
    }

    fn select_events(&mut self) -> Vec<u64> {
        let mut events = self.pool.acquire();
        let budget = self.poll_periods;
        self.events.retain(|id, polls| {
            if *polls >= budget {
                return false;
            }
            *polls += 1;
            events.push(*id);
            true
        });
        events
    }

    fn free_events(&mut self, events: Vec<u64>) {
        self.pool.release(events);
    }

    fn event_count(&self) -> usize {
        self.events.len()
    }
}
