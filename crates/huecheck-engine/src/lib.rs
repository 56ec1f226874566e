#![forbid(unsafe_code)]

//! WCAG color-contrast rule engine.
//!
//! # Role in huecheck
//! `huecheck-engine` is the orchestrator: it walks candidate elements of a
//! [`Document`](huecheck_dom::Document), resolves the effective color pair
//! each one renders with, scores it against the WCAG AA/AAA thresholds,
//! and emits axe-core-shaped findings.
//!
//! # Primary responsibilities
//! - **Analyzer**: per-element resolution, classification, and emission.
//! - **Background resolver**: alpha-composites translucent ancestor
//!   backgrounds into the one opaque color an element sits on.
//! - **Visibility filter**: hidden content never produces findings.
//! - **Findings**: the mergeable pass/violation wire format.
//! - **WCAG summary**: tag decoding and per-level/per-criterion counts.
//!
//! # How it fits in the system
//! The calling service renders HTML elsewhere, adapts its DOM snapshot to
//! `huecheck-dom`, runs [`run_contrast_analysis`], merges the results with
//! the baseline rule engine's by concatenation, and summarizes the
//! combined set with [`generate_wcag_summary`]. The whole pipeline is
//! synchronous and stateless per invocation.

/// Per-element contrast analysis and classification.
pub mod analyzer;
/// Effective background resolution through the ancestor chain.
pub mod background;
/// Browser default styles (UA stylesheet approximation).
pub mod defaults;
/// The pass/violation finding data model.
pub mod finding;
/// Visibility gating.
pub mod visibility;
/// WCAG tag decoding and compliance summarization.
pub mod wcag;

pub use analyzer::{CANDIDATE_TAGS, run_contrast_analysis};
pub use background::effective_background;
pub use defaults::{BrowserDefaultStyle, DEFAULT_FONT_SIZE, browser_default, heading_font_size};
pub use finding::{AnalysisResults, Finding, FindingNode, RunSummary};
pub use visibility::is_hidden;
pub use wcag::{WcagCounts, WcagInfo, WcagSummary, extract_wcag_info, generate_wcag_summary};
