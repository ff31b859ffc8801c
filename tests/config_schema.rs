use regcache::{ConfigError, ReloadConfig};

#[test]
fn defaults_match_deployment() {
    let config = ReloadConfig::default();
    assert_eq!(config.reload_interval_ms, 5_000);
    assert_eq!(config.track_for_ms, 86_400_000);
    assert_eq!(config.poll_jitter, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn parses_partial_document() {
    let config: ReloadConfig = serde_json::from_str(r#"{"reload_interval_ms": 10000}"#).unwrap();
    assert_eq!(config.reload_interval_ms, 10_000);
    assert_eq!(config.track_for_ms, 86_400_000);
    assert_eq!(config.poll_jitter, 10);
}

#[test]
fn rejects_sub_second_interval() {
    let config = ReloadConfig {
        reload_interval_ms: 500,
        ..ReloadConfig::default()
    };
    match config.validate() {
        Err(ConfigError::IntervalTooShort { interval_ms }) => assert_eq!(interval_ms, 500),
        other => panic!("expected IntervalTooShort, got {other:?}"),
    }
}

#[test]
fn rejects_horizon_shorter_than_interval() {
    let config = ReloadConfig {
        reload_interval_ms: 5_000,
        track_for_ms: 4_000,
        ..ReloadConfig::default()
    };
    match config.validate() {
        Err(ConfigError::HorizonTooShort {
            track_for_ms,
            reload_interval_ms,
        }) => {
            assert_eq!(track_for_ms, 4_000);
            assert_eq!(reload_interval_ms, 5_000);
        }
        other => panic!("expected HorizonTooShort, got {other:?}"),
    }
}
