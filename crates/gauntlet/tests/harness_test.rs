//! Integration tests for full harness runs.

use gauntlet::report::MAX_INPUT_RENDER;
use gauntlet::{FailureKind, Harness, HarnessConfig, RunReport};

/// Edge-case invocations per run: 5 parse probes, 8 date pairs, 6 paths,
/// 5 data-load probes.
const EDGE_CASE_TOTAL: usize = 24;

fn run_with_iterations(iterations: usize) -> RunReport {
    let harness = Harness::with_config(HarnessConfig { iterations }).expect("suite loads");
    harness.run(|_| {}).expect("run completes")
}

#[test]
fn test_edge_only_run_logs_one_outcome_per_edge_case() {
    let report = run_with_iterations(0);
    assert_eq!(report.total, EDGE_CASE_TOTAL);
}

#[test]
fn test_total_is_iterations_times_campaigns_plus_edges() {
    let report = run_with_iterations(3);
    assert_eq!(report.total, 3 * 5 + EDGE_CASE_TOTAL);
}

#[test]
fn test_failures_bounded_by_total() {
    let report = run_with_iterations(5);
    assert!(report.failures <= report.total);
    assert_eq!(report.failures, report.bugs.len());
}

#[test]
fn test_success_rate_within_bounds() {
    let report = run_with_iterations(5);
    let rate = report.success_rate.expect("total > 0");
    assert!((0.0..=100.0).contains(&rate));
}

#[test]
fn test_bug_inputs_are_bounded() {
    let report = run_with_iterations(10);
    for bug in &report.bugs {
        assert!(bug.outcome.input.chars().count() <= MAX_INPUT_RENDER);
    }
}

#[test]
fn test_null_date_pair_is_logged_not_raised() {
    let report = run_with_iterations(0);
    let bug = report
        .bugs
        .iter()
        .find(|b| b.outcome.target == "days_between" && b.outcome.input == "d1: None, d2: None")
        .expect("null/null date pair must be logged as a failure");
    let failure = bug.outcome.failure.as_ref().expect("failed outcome");
    assert_eq!(failure.kind, FailureKind::TypeMismatch);
    assert!(!failure.message.is_empty());
}

#[test]
fn test_nonexistent_parse_path_classified_as_resource_not_found() {
    let report = run_with_iterations(0);
    let found = report.bugs.iter().any(|b| {
        b.outcome.target == "parse"
            && b.outcome
                .failure
                .as_ref()
                .is_some_and(|f| f.kind == FailureKind::ResourceNotFound)
    });
    assert!(found, "nonexistent parse paths must yield ResourceNotFound bugs");
}

#[test]
fn test_bug_numbers_follow_discovery_order() {
    let report = run_with_iterations(2);
    for (i, bug) in report.bugs.iter().enumerate() {
        assert_eq!(bug.number, i + 1);
    }
}

#[test]
fn test_report_written_to_disk() {
    let report = run_with_iterations(0);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fuzz_report.txt");
    report.write_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("FUZZING REPORT"));
    assert!(text.contains(&format!("Total tests executed: {}", report.total)));
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_with_iterations(0);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total"].as_u64(), Some(report.total as u64));
    assert!(json["bugs"].as_array().is_some());
}
