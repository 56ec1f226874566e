#![forbid(unsafe_code)]

//! WCAG tag decoding and compliance summarization.
//!
//! Rule tags carry WCAG metadata in a compact external vocabulary:
//! `wcag2aa` means "WCAG 2, level AA", `wcag143` means "WCAG 1, criterion
//! 4.3", `wcag2143` means "WCAG 2.1, criterion 4.3". The decoder expands
//! those into structured entries; the summarizer aggregates pass/violation
//! counts per version-level and per criterion across a whole rule set.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::finding::Finding;

/// Level tags: `wcag` + version digits + one or more `a`s.
static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^wcag(\d+)(a+)$").expect("level pattern is valid"));

/// Criterion tags: `wcag` + version digits + criterion major digit +
/// criterion minor digit. The greedy version group means a multi-digit
/// version absorbs everything but the last two digits; the boundary is
/// ambiguous by construction and kept as-is for wire compatibility.
static CRITERION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^wcag(\d+)(\d)(\d)$").expect("criterion pattern is valid"));

/// Structured WCAG metadata decoded from one rule tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WcagInfo {
    /// A conformance level, e.g. WCAG 2.1 / AA.
    Level { version: String, level: String },
    /// A numbered success criterion, e.g. WCAG 2.1 / 4.3.
    Criterion { version: String, criterion: String },
}

/// Decode the WCAG entries carried by a rule's tags.
///
/// Each tag is tested against both patterns independently (level first);
/// tags matching neither contribute nothing. Output order follows input
/// tag order.
#[must_use]
pub fn extract_wcag_info<S: AsRef<str>>(tags: &[S]) -> Vec<WcagInfo> {
    let mut out = Vec::new();
    for tag in tags {
        let tag = tag.as_ref();
        if let Some(caps) = LEVEL_RE.captures(tag) {
            out.push(WcagInfo::Level {
                version: format_version(&caps[1]),
                level: caps[2].to_ascii_uppercase(),
            });
        }
        if let Some(caps) = CRITERION_RE.captures(tag) {
            out.push(WcagInfo::Criterion {
                version: format_version(&caps[1]),
                criterion: format!("{}.{}", &caps[2], &caps[3]),
            });
        }
    }
    out
}

/// `"2"` → `"WCAG 2"`; runs of more than one digit split after the first:
/// `"21"` → `"WCAG 2.1"`.
fn format_version(digits: &str) -> String {
    if digits.len() > 1 {
        format!("WCAG {}.{}", &digits[..1], &digits[1..])
    } else {
        format!("WCAG {digits}")
    }
}

/// Aggregated counts for one version-level or criterion bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagCounts {
    pub total: u32,
    pub passed: u32,
    pub violations: u32,
}

impl WcagCounts {
    fn record(&mut self, passing: bool) {
        self.total += 1;
        if passing {
            self.passed += 1;
        } else {
            self.violations += 1;
        }
    }
}

/// The WCAG compliance summary over a combined rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagSummary {
    /// version → level → counts.
    pub versions: BTreeMap<String, BTreeMap<String, WcagCounts>>,
    /// "version criterion" → counts.
    pub criteria: BTreeMap<String, WcagCounts>,
}

/// Aggregate WCAG counts over a rule set. A rule is passing iff it has no
/// `impact`; every decoded level entry increments its version-level
/// bucket, every criterion entry its criterion bucket. Rules without WCAG
/// tags contribute nothing; an empty rule set yields the empty summary.
#[must_use]
pub fn generate_wcag_summary<'a, I>(rules: I) -> WcagSummary
where
    I: IntoIterator<Item = &'a Finding>,
{
    let mut summary = WcagSummary::default();
    for rule in rules {
        let passing = rule.is_passing();
        for info in extract_wcag_info(&rule.tags) {
            match info {
                WcagInfo::Level { version, level } => summary
                    .versions
                    .entry(version)
                    .or_default()
                    .entry(level)
                    .or_default()
                    .record(passing),
                WcagInfo::Criterion { version, criterion } => summary
                    .criteria
                    .entry(format!("{version} {criterion}"))
                    .or_default()
                    .record(passing),
            }
        }
    }
    summary
}
