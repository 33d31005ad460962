//! End-to-end verification of the builtin fixture set.

use strtoolkit_harness::fixtures::{self, FixtureSet};
use strtoolkit_harness::report::ConformanceReport;
use strtoolkit_harness::runner::TestRunner;

#[test]
fn builtin_fixture_set_passes_in_full() {
    let set = fixtures::builtin_set();
    let results = TestRunner::new("builtin").run(&set);
    let failures: Vec<_> = results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| format!("{}: expected {:?}, got {:?}", r.case_name, r.expected, r.actual))
        .collect();
    assert!(failures.is_empty(), "failed cases:\n{}", failures.join("\n"));
}

#[test]
fn builtin_fixture_set_survives_json_round_trip() {
    let set = fixtures::builtin_set();
    let json = set.to_json().expect("serialize");
    let reparsed = FixtureSet::from_json(&json).expect("parse");
    let results = TestRunner::new("round-trip").run(&reparsed);
    assert!(results.iter().all(|r| r.passed));
}

#[test]
fn report_over_builtin_set_is_green() {
    let set = fixtures::builtin_set();
    let results = TestRunner::new("builtin").run(&set);
    let report = ConformanceReport::new("builtin", "2026-08-30T00:00:00Z", results);
    assert!(report.all_passed());
    let md = report.render_markdown();
    assert!(md.contains(&format!("**{} / {} cases passed**", report.total, report.total)));
}
