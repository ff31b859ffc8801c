/// Counters exported by the skipped-event tracker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrackerTelemetry {
    /// Ids currently tracked.
    pub tracked_events: usize,
    /// Ids emitted for polling since boot.
    pub selected_total: u64,
    /// Ids retired after aging past the horizon since boot.
    pub retired_total: u64,
    /// Ids emitted by the most recent selection.
    pub last_selected: usize,
}

impl TrackerTelemetry {
    /// Renders the counters in Prometheus exposition format.
    pub fn render_metrics(&self) -> String {
        format!(
            "regcache_tracked_events {}\nregcache_selected_events_total {}\nregcache_retired_events_total {}\nregcache_last_selected_events {}\n",
            self.tracked_events, self.selected_total, self.retired_total, self.last_selected
        )
    }
}
