#![forbid(unsafe_code)]

//! The finding data model.
//!
//! Findings are the external wire format: the same axe-core-compatible
//! shape the baseline rule engine produces, so results from both engines
//! merge by plain concatenation and serialize into one report. Field names
//! are camelCase on the wire; a finding without `impact` is a pass.

use serde::{Deserialize, Serialize};

/// One affected element inside a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingNode {
    /// The element's outer HTML, verbatim.
    pub html: String,
    /// Human-readable explanation of what failed; absent on passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub failure_summary: Option<String>,
    /// Best-effort selector chain locating the element.
    pub target: Vec<String>,
}

/// A rule outcome: one pass or one violation, with the elements involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    /// Violation severity; absent signifies a pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub impact: Option<String>,
    pub description: String,
    pub help: String,
    pub help_url: String,
    pub tags: Vec<String>,
    pub nodes: Vec<FindingNode>,
}

impl Finding {
    /// A finding without an impact is a pass.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.impact.is_none()
    }
}

/// Counts over a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub passed: usize,
    pub violations: usize,
    pub total: usize,
}

/// The engine's output: pass and violation sequences in element traversal
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub passes: Vec<Finding>,
    pub violations: Vec<Finding>,
}

impl AnalysisResults {
    /// Merge another result set in: plain concatenation, no
    /// de-duplication. Used to combine this engine's findings with the
    /// baseline rule engine's.
    pub fn merge(&mut self, other: AnalysisResults) {
        self.passes.extend(other.passes);
        self.violations.extend(other.violations);
    }

    /// Every rule outcome, passes first.
    pub fn all_rules(&self) -> impl Iterator<Item = &Finding> {
        self.passes.iter().chain(self.violations.iter())
    }

    /// Pass/violation counts.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            passed: self.passes.len(),
            violations: self.violations.len(),
            total: self.passes.len() + self.violations.len(),
        }
    }
}
