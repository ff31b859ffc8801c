use regcache::{JournalRetention, ReloadJournal};
use serde_json::Value;

#[test]
fn records_ticks_as_json_lines() {
    let mut journal = ReloadJournal::new(JournalRetention::default());
    journal.record_tick(5_000, 12, 3, 1).unwrap();
    let lines: Vec<&str> = journal.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["ts_ms"], 5_000);
    assert_eq!(record["tracked"], 12);
    assert_eq!(record["selected"], 3);
    assert_eq!(record["retired"], 1);
}

#[test]
fn retention_evicts_oldest_lines() {
    let mut journal = ReloadJournal::new(JournalRetention { max_records: 2 });
    for tick in 1..=3u64 {
        journal.record_tick(tick * 5_000, 0, 0, 0).unwrap();
    }
    let timestamps: Vec<u64> = journal
        .lines()
        .map(|line| {
            let record: Value = serde_json::from_str(line).unwrap();
            record["ts_ms"].as_u64().unwrap()
        })
        .collect();
    assert_eq!(timestamps, vec![10_000, 15_000]);
}
