//! Integration test: the checked-in conformance fixtures pass in both modes.
//!
//! Run: cargo test -p smallprintf-harness --test fixture_verify_test

use std::path::PathBuf;

use smallprintf_core::Mode;
use smallprintf_harness::fixtures::fixture_paths;
use smallprintf_harness::{ConformanceReport, FixtureSet, RunMode, TestRunner, VerificationSummary};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/conformance/fixtures")
}

fn load_sets() -> Vec<FixtureSet> {
    let paths = fixture_paths(&fixture_dir()).expect("fixture directory readable");
    assert!(!paths.is_empty(), "no fixtures in {}", fixture_dir().display());
    paths
        .iter()
        .map(|path| {
            FixtureSet::from_file(path)
                .unwrap_or_else(|err| panic!("{}: {err}", path.display()))
        })
        .collect()
}

fn verify(run_mode: RunMode) -> VerificationSummary {
    let sets = load_sets();
    let mut results = Vec::new();
    for &mode in run_mode.modes() {
        let runner = TestRunner::new("fixture_verify_test", mode);
        for set in &sets {
            results.extend(runner.run(set));
        }
    }
    VerificationSummary::from_results(results)
}

fn failures(summary: &VerificationSummary) -> String {
    summary
        .results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| format!("{}:\n{}", r.case_name, r.diff.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn lenient_fixtures_pass() {
    let summary = verify(RunMode::Lenient);
    assert!(summary.total > 0);
    assert!(summary.all_passed(), "{}", failures(&summary));
}

#[test]
fn strict_fixtures_pass() {
    let summary = verify(RunMode::Strict);
    assert!(summary.total > 0);
    assert!(summary.all_passed(), "{}", failures(&summary));
}

#[test]
fn both_mode_runs_shared_cases_twice() {
    let sets = load_sets();
    let shared = sets
        .iter()
        .flat_map(|set| &set.cases)
        .filter(|case| case.mode == "both")
        .count();
    let lenient_only = sets
        .iter()
        .flat_map(|set| &set.cases)
        .filter(|case| case.mode == "lenient")
        .count();
    let strict_only = sets
        .iter()
        .flat_map(|set| &set.cases)
        .filter(|case| case.mode == "strict")
        .count();

    let summary = verify(RunMode::Both);
    assert_eq!(summary.total, 2 * shared + lenient_only + strict_only);
    assert!(summary.all_passed(), "{}", failures(&summary));
}

#[test]
fn report_renders_for_fixture_run() {
    let report = ConformanceReport {
        title: "smallprintf Conformance Report".to_string(),
        mode: RunMode::Both.as_str().to_string(),
        timestamp: "2026-10-19T00:00:00Z".to_string(),
        summary: verify(RunMode::Both),
    };
    let md = report.to_markdown();
    assert!(md.contains("- Mode: lenient+strict"));
    assert!(md.contains("| adc_report_line [lenient] | scanner/mixed | lenient | PASS |"));
    assert!(md.contains("| adc_report_line [strict] | scanner/mixed | strict | PASS |"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["summary"]["failed"], 0);
}

#[test]
fn strict_cases_never_touch_the_sink_on_error() {
    for set in load_sets() {
        for case in set.cases.iter().filter(|c| c.expected_output.starts_with("error:")) {
            let rendered = smallprintf_harness::render_case(
                case.word,
                case.format.as_bytes(),
                &case.args,
                Mode::Strict,
            )
            .unwrap();
            assert!(rendered.output.is_empty(), "{}", case.name);
            assert_eq!(rendered.observed, 0, "{}", case.name);
        }
    }
}
