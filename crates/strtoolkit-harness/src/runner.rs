//! Test execution engine.

use serde::Serialize;

use crate::diff;
use crate::exec;
use crate::fixtures::FixtureSet;

/// Outcome of verifying one fixture case.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// Case identifier.
    pub case_name: String,
    /// Contract the case exercises.
    pub contract: String,
    /// Whether actual output matched the expectation.
    pub passed: bool,
    /// Expected output.
    pub expected: String,
    /// Actual output.
    pub actual: String,
    /// Rendered diff when the case failed.
    pub diff: Option<String>,
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let actual = match exec::run_case(&case.function, &case.inputs) {
                    Ok(output) => output,
                    Err(err) => format!("unsupported:{err}"),
                };
                let passed = actual == case.expected_output;
                let diff = if passed {
                    None
                } else {
                    Some(diff::render_diff(&case.expected_output, &actual))
                };
                VerificationResult {
                    case_name: case.name.clone(),
                    contract: case.contract.clone(),
                    passed,
                    expected: case.expected_output.clone(),
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_executes_matching_cases() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"string",
                "cases":[
                    {"name":"len","function":"strlen","contract":"length","inputs":{"s":"Hi"},"expected_output":"2"},
                    {"name":"eq","function":"streq","contract":"equality","inputs":{"a":"x","b":"x"},"expected_output":"true"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert!(results.iter().all(|r| r.diff.is_none()));
    }

    #[test]
    fn runner_diffs_mismatches() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"string",
                "cases":[
                    {"name":"len","function":"strlen","contract":"length","inputs":{"s":"Hi"},"expected_output":"3"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "2");
        assert_eq!(results[0].diff.as_deref(), Some("- 3\n+ 2\n"));
    }

    #[test]
    fn runner_marks_unknown_functions_unsupported() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"string",
                "cases":[
                    {"name":"dup","function":"strdup","contract":"n/a","inputs":{},"expected_output":"?"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert!(!results[0].passed);
        assert!(results[0].actual.starts_with("unsupported:"));
    }
}
