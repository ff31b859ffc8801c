use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ReloadConfig;

/// Age at which an event leaves the young band and is polled every 30 s.
const MID_BAND_START_MS: u64 = 60_000;
/// Age at which an event leaves the mid band and is polled every minute.
const OLD_BAND_START_MS: u64 = 600_000;

const MID_BAND_INTERVAL_MS: u64 = 30_000;
const OLD_BAND_INTERVAL_MS: u64 = 60_000;

/// Age band of a tracked event relative to its first observation.
///
/// Most skipped events surface within seconds of being observed, so polling
/// is densest while an event is young and thins out as it ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Young,
    Mid,
    Old,
}

impl AgeBand {
    /// Returns the band for the given age, or `None` once the event has
    /// reached the tracking horizon and must be retired.
    pub fn for_elapsed(elapsed_ms: u64, track_for_ms: u64) -> Option<Self> {
        if elapsed_ms >= track_for_ms {
            return None;
        }
        if elapsed_ms < MID_BAND_START_MS {
            Some(AgeBand::Young)
        } else if elapsed_ms < OLD_BAND_START_MS {
            Some(AgeBand::Mid)
        } else {
            Some(AgeBand::Old)
        }
    }
}

/// Age-dependent reschedule policy with optional uniform jitter.
///
/// The jitter source is seeded once at construction; a one-minute base
/// interval with the default divisor of 10 resolves to a draw in
/// `[57 s, 63 s)`.
pub struct PollPolicy {
    poll_interval_ms: u64,
    track_for_ms: u64,
    jitter: u32,
    rng: ChaCha8Rng,
}

impl PollPolicy {
    /// Creates a policy with the given young-band interval, tracking
    /// horizon, and jitter divisor (`0` disables jitter).
    pub fn new(poll_interval_ms: u64, track_for_ms: u64, jitter: u32) -> Self {
        Self {
            poll_interval_ms,
            track_for_ms,
            jitter,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Builds the policy from a validated reload configuration.
    pub fn from_config(config: &ReloadConfig) -> Self {
        Self::new(
            config.reload_interval_ms,
            config.track_for_ms,
            config.poll_jitter,
        )
    }

    /// Replaces the jitter source with a fixed-seed PRNG (tests, benches).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Returns the tracking horizon (ms).
    pub fn track_for_ms(&self) -> u64 {
        self.track_for_ms
    }

    /// Computes the next poll tick for an event first observed at
    /// `observed_at_ms`, or `None` once the event has aged past the horizon.
    pub fn next_poll(&mut self, observed_at_ms: u64, now_ms: u64) -> Option<u64> {
        let elapsed = now_ms.saturating_sub(observed_at_ms);
        let band = AgeBand::for_elapsed(elapsed, self.track_for_ms)?;
        let base = match band {
            AgeBand::Young => self.poll_interval_ms,
            AgeBand::Mid => MID_BAND_INTERVAL_MS,
            AgeBand::Old => OLD_BAND_INTERVAL_MS,
        };
        Some(now_ms.saturating_add(self.apply_jitter(base)))
    }

    fn apply_jitter(&mut self, base_ms: u64) -> u64 {
        if self.jitter == 0 {
            return base_ms;
        }
        let spread = base_ms / u64::from(self.jitter);
        if spread == 0 {
            return base_ms;
        }
        // Uniform draw over [base - spread/2, base + spread/2).
        base_ms + self.rng.gen_range(0..spread) - spread / 2
    }
}
