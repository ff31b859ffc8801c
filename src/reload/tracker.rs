use std::cmp::{Ordering, Reverse};
use std::collections::binary_heap::PeekMut;
use std::collections::{BinaryHeap, HashSet};

use super::buffer::EventBufferPool;
use super::clock::{DynClock, SystemMonotonicClock};
use super::policy::PollPolicy;
use super::EventTracker;
use crate::observability::TrackerTelemetry;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct TrackedEvent {
    next_poll_ms: u64,
    id: u64,
    observed_at_ms: u64,
}

impl Ord for TrackedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ids are unique among live entries, so the tie-break is total.
        self.next_poll_ms
            .cmp(&other.next_poll_ms)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for TrackedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-queue tracker for skipped event ids.
///
/// Entries are ordered by next-poll tick (id-ascending on ties, so emission
/// order is deterministic under an injected clock). Each selection drains
/// every due entry from the heap head: the entry is either rescheduled in
/// place via the poll policy or, once it has aged past the tracking
/// horizon, popped for good.
pub struct SkippedEventTracker {
    policy: PollPolicy,
    clock: DynClock,
    queue: BinaryHeap<Reverse<TrackedEvent>>,
    live: HashSet<u64>,
    pool: EventBufferPool,
    telemetry: TrackerTelemetry,
}

impl SkippedEventTracker {
    /// Creates a tracker that samples the system clock.
    pub fn new(policy: PollPolicy) -> Self {
        Self::with_clock(policy, Box::new(SystemMonotonicClock::new()))
    }

    /// Creates a tracker with an explicit clock (tests, benches).
    pub fn with_clock(policy: PollPolicy, clock: DynClock) -> Self {
        Self {
            policy,
            clock,
            queue: BinaryHeap::new(),
            live: HashSet::new(),
            pool: EventBufferPool::new(),
            telemetry: TrackerTelemetry::default(),
        }
    }

    /// Returns telemetry counters for `/metrics`.
    pub fn telemetry(&self) -> &TrackerTelemetry {
        &self.telemetry
    }
}

impl EventTracker for SkippedEventTracker {
    /// Begins tracking an id at the current tick. An id that is already
    /// tracked is left on its original schedule.
    fn start_tracking(&mut self, id: u64) {
        if !self.live.insert(id) {
            return;
        }
        let now = self.clock.now_ms();
        let next_poll = self.policy.next_poll(now, now).unwrap_or(now);
        self.queue.push(Reverse(TrackedEvent {
            next_poll_ms: next_poll,
            id,
            observed_at_ms: now,
        }));
        self.telemetry.tracked_events = self.queue.len();
    }

    fn select_events(&mut self) -> Vec<u64> {
        let now = self.clock.now_ms();
        let mut events = self.pool.acquire();
        while let Some(mut head) = self.queue.peek_mut() {
            if head.0.next_poll_ms > now {
                break;
            }
            match self.policy.next_poll(head.0.observed_at_ms, now) {
                Some(next_poll) => {
                    events.push(head.0.id);
                    // The heap order is fixed up when the handle drops.
                    head.0.next_poll_ms = next_poll;
                }
                None => {
                    let Reverse(retired) = PeekMut::pop(head);
                    self.live.remove(&retired.id);
                    self.telemetry.retired_total += 1;
                }
            }
        }
        self.telemetry.selected_total += events.len() as u64;
        self.telemetry.last_selected = events.len();
        self.telemetry.tracked_events = self.queue.len();
        events
    }

    fn free_events(&mut self, events: Vec<u64>) {
        self.pool.release(events);
    }

    fn event_count(&self) -> usize {
        self.queue.len()
    }
}
