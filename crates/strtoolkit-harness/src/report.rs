//! Report generation: human-readable markdown and machine-readable JSON.

use serde::Serialize;

use crate::runner::VerificationResult;

/// Aggregated outcome of a verification campaign.
#[derive(Debug, Serialize)]
pub struct ConformanceReport {
    /// Campaign name.
    pub campaign: String,
    /// Timestamp string supplied by the caller (kept out of the library so
    /// reports stay deterministic under test).
    pub generated_at: String,
    /// Total cases executed.
    pub total: usize,
    /// Cases that passed.
    pub passed: usize,
    /// Per-case results.
    pub results: Vec<VerificationResult>,
}

impl ConformanceReport {
    /// Builds a report from runner results.
    pub fn new(
        campaign: impl Into<String>,
        generated_at: impl Into<String>,
        results: Vec<VerificationResult>,
    ) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            campaign: campaign.into(),
            generated_at: generated_at.into(),
            total: results.len(),
            passed,
            results,
        }
    }

    /// Returns `true` when every case passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Renders the report as markdown.
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Conformance Report: {}\n\n", self.campaign));
        out.push_str(&format!("Generated: {}\n\n", self.generated_at));
        out.push_str(&format!(
            "**{} / {} cases passed**\n\n",
            self.passed, self.total
        ));
        out.push_str("| Case | Contract | Result |\n");
        out.push_str("|------|----------|--------|\n");
        for result in &self.results {
            let status = if result.passed { "pass" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                result.case_name, result.contract, status
            ));
        }
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for result in failures {
                out.push_str(&format!("\n### {}\n\n```diff\n", result.case_name));
                if let Some(diff) = &result.diff {
                    out.push_str(diff);
                }
                out.push_str("```\n");
            }
        }
        out
    }

    /// Serializes the report to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
