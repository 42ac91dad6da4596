//! JSON shapes of the stats handed to callers.

use serde_json::json;

use unit_test_summary::models::{UnitTestRunDeltaStats, UnitTestRunStats};
use unit_test_summary::services::get_stats_with_delta;

#[test]
fn test_delta_stats_without_reference() {
    let stats = UnitTestRunStats {
        tests: Some(20),
        duration: Some(3),
        commit: Some("commit".to_string()),
        ..Default::default()
    };

    let delta = get_stats_with_delta(&stats, &UnitTestRunStats::default(), "missing");

    assert_eq!(
        serde_json::to_value(&delta).unwrap(),
        json!({
            "duration": {"duration": 3},
            "tests": {"number": 20},
            "reference_commit": null,
            "reference_type": "missing"
        })
    );
}

#[test]
fn test_delta_stats_with_reference() {
    let stats = UnitTestRunStats {
        tests: Some(20),
        runs: Some(40),
        ..Default::default()
    };
    let reference = UnitTestRunStats {
        tests: Some(18),
        runs: None,
        commit: Some("ref".to_string()),
        ..Default::default()
    };

    let delta = get_stats_with_delta(&stats, &reference, "ancestor");

    assert_eq!(
        serde_json::to_value(&delta).unwrap(),
        json!({
            "tests": {"number": 20, "delta": 2},
            "runs": {"number": 40},
            "reference_commit": "ref",
            "reference_type": "ancestor"
        })
    );
}

#[test]
fn test_delta_stats_read_back() {
    let delta: UnitTestRunDeltaStats = serde_json::from_value(json!({
        "files": {"number": 1, "delta": -2},
        "duration": {"duration": 3, "delta": 4},
        "reference_commit": null,
        "reference_type": "type"
    }))
    .unwrap();

    assert_eq!(delta.files.and_then(|f| f.delta), Some(-2));
    assert_eq!(delta.duration.and_then(|d| d.delta), Some(4));
    assert_eq!(delta.tests, None);
}

#[test]
fn test_reference_stats_accept_canonical_output() {
    let stats = UnitTestRunStats {
        files: Some(1),
        tests: Some(2),
        commit: Some("abc".to_string()),
        ..Default::default()
    };

    let text = serde_json::to_string(&stats).unwrap();
    let read_back: UnitTestRunStats = serde_json::from_str(&text).unwrap();
    assert_eq!(read_back, stats);
}
