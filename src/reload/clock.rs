use std::time::Instant;

/// Monotonic time source sampled by the reload engine.
pub trait MonotonicClock {
    /// Returns the current monotonic tick in milliseconds.
    fn now_ms(&mut self) -> u64;
}

/// System clock implementation backed by `Instant`.
#[derive(Clone)]
pub struct SystemMonotonicClock {
    start: Instant,
}

impl Default for SystemMonotonicClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl SystemMonotonicClock {
    /// Creates a clock anchored at the moment of construction.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MonotonicClock for SystemMonotonicClock {
    fn now_ms(&mut self) -> u64 {
        saturating_u64(self.start.elapsed().as_millis())
    }
}

/// Clock handle owned by a tracker. The reload loop is single-threaded, so
/// no `Send` bound is required.
pub type DynClock = Box<dyn MonotonicClock>;

fn saturating_u64(value: u128) -> u64 {
    if value > u64::MAX as u128 {
        u64::MAX
    } else {
        value as u64
    }
}
