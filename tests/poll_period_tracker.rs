use regcache::{poll_periods, EventTracker, PollPeriodTracker};

fn sorted(mut events: Vec<u64>) -> Vec<u64> {
    events.sort_unstable();
    events
}

#[test]
fn poll_period_count_for_deployment_defaults() {
    assert_eq!(poll_periods(5_000, 86_400_000), 17_280);
}

#[test]
fn poll_period_inputs_are_clamped_to_one_second() {
    assert_eq!(poll_periods(100, 500), 1);
    assert_eq!(poll_periods(0, 0), 1);
    assert_eq!(poll_periods(1_000, 10_000), 10);
}

#[test]
fn polls_every_event_until_budget_exhausted() {
    let mut tracker = PollPeriodTracker::new(3);
    tracker.start_tracking(1);
    tracker.start_tracking(2);
    for _ in 0..3 {
        let events = tracker.select_events();
        assert_eq!(sorted(events.clone()), vec![1, 2]);
        tracker.free_events(events);
    }
    assert!(tracker.select_events().is_empty());
    assert_eq!(tracker.event_count(), 0);
}

#[test]
fn stop_tracking_removes_event() {
    let mut tracker = PollPeriodTracker::new(4);
    tracker.start_tracking(1);
    tracker.start_tracking(2);
    tracker.stop_tracking(1);
    assert_eq!(tracker.event_count(), 1);
    assert_eq!(sorted(tracker.select_events()), vec![2]);
}

#[test]
fn readd_keeps_accumulated_polls() {
    let mut tracker = PollPeriodTracker::new(2);
    tracker.start_tracking(9);
    assert_eq!(tracker.select_events(), vec![9]);
    tracker.start_tracking(9);
    assert_eq!(tracker.select_events(), vec![9]);
    assert!(tracker.select_events().is_empty());
}

#[test]
fn zero_budget_is_clamped_to_one() {
    let mut tracker = PollPeriodTracker::new(0);
    assert_eq!(tracker.poll_periods(), 1);
    tracker.start_tracking(3);
    assert_eq!(tracker.select_events(), vec![3]);
    assert!(tracker.select_events().is_empty());
}

#[test]
fn reuses_freed_buffer_capacity() {
    let mut tracker = PollPeriodTracker::new(8);
    for id in 0..32 {
        tracker.start_tracking(id);
    }
    let events = tracker.select_events();
    let capacity = events.capacity();
    assert!(capacity >= 32);
    tracker.free_events(events);
    let events = tracker.select_events();
    assert_eq!(events.len(), 32);
    assert_eq!(events.capacity(), capacity);
}
