#![forbid(unsafe_code)]

//! The contrast rule engine.
//!
//! Walks every text-bearing candidate element, resolves the color pair it
//! actually renders with (computed style, browser defaults, or composited
//! ancestor backgrounds), scores the pair against the WCAG thresholds for
//! its font size and weight, and emits pass/violation findings.
//!
//! The engine never fails mid-document: color resolution is total, and
//! elements are evaluated independently, so one messy element cannot
//! poison the rest of the run.

use tracing::trace;

use huecheck_color::{DEFAULT_TEXT_COLOR, Rgba, contrast_ratio, parse_color};
use huecheck_dom::{ComputedStyle, Document, NodeId, StyleLookup, selector};

use crate::background::{effective_background, is_declared_transparent};
use crate::defaults::{DEFAULT_FONT_SIZE, browser_default, heading_font_size};
use crate::finding::{AnalysisResults, Finding, FindingNode};
use crate::visibility::is_hidden;

/// Tags considered text-bearing candidates for contrast analysis.
pub const CANDIDATE_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "a", "span", "label", "button", "input",
    "select", "textarea", "li", "td", "th",
];

const CONTRAST_MINIMUM_URL: &str =
    "https://www.w3.org/WAI/WCAG21/Understanding/contrast-minimum.html";
const CONTRAST_ENHANCED_URL: &str =
    "https://www.w3.org/WAI/WCAG21/Understanding/contrast-enhanced.html";

/// Run the contrast analysis over a document.
///
/// Elements are visited in document order; hidden and text-free elements
/// are skipped. An element landing between the AA and AAA thresholds
/// produces two records: an AA pass and an AAA violation.
#[must_use]
pub fn run_contrast_analysis<S: StyleLookup>(doc: &Document, styles: &S) -> AnalysisResults {
    let mut results = AnalysisResults::default();

    for element in doc.elements_by_tags(CANDIDATE_TAGS) {
        if is_hidden(doc, element, styles) || doc.text_content(element).trim().is_empty() {
            continue;
        }

        let style = styles.computed_style(element);
        let tag = doc.tag_name(element);

        let foreground = resolve_foreground(doc, element, tag, &style);
        let background = resolve_background(doc, element, tag, &style, styles);
        let ratio = contrast_ratio(foreground, background);

        let font_size = resolve_font_size(tag, &style);
        let bold = resolve_bold(tag, &style);
        let (required_aa, required_aaa) = required_ratios(font_size, bold);

        trace!(tag, ratio, font_size, bold, "element contrast evaluated");

        let node = |failure_summary: Option<String>| FindingNode {
            html: doc.outer_html(element),
            failure_summary,
            target: vec![selector(doc, element)],
        };

        if ratio < required_aa {
            results.violations.push(Finding {
                id: "custom-color-contrast".to_string(),
                impact: Some("serious".to_string()),
                description: "Elements must have sufficient color contrast".to_string(),
                help: "Text elements must have a contrast ratio of at least 4.5:1 (3:1 for large text)"
                    .to_string(),
                help_url: CONTRAST_MINIMUM_URL.to_string(),
                tags: string_vec(&["wcag2aa", "wcag143"]),
                nodes: vec![node(Some(format!(
                    "Fix any of the following: Element has insufficient color contrast of {ratio:.2}:1 (foreground: {}, background: {}, font size: {font_size}pt, font weight: {})",
                    foreground.to_hex(),
                    background.to_hex(),
                    weight_name(bold),
                )))],
            });
        } else if ratio < required_aaa {
            // AA holds but AAA does not: report both outcomes.
            results.passes.push(Finding {
                id: "custom-color-contrast-aa".to_string(),
                impact: None,
                description: "Elements have sufficient color contrast for WCAG AA".to_string(),
                help: "Text elements have a contrast ratio of at least 4.5:1 (3:1 for large text)"
                    .to_string(),
                help_url: CONTRAST_MINIMUM_URL.to_string(),
                tags: string_vec(&["wcag2aa", "wcag143"]),
                nodes: vec![node(None)],
            });
            results.violations.push(Finding {
                id: "custom-color-contrast-aaa".to_string(),
                impact: Some("moderate".to_string()),
                description: "Elements must have enhanced color contrast".to_string(),
                help: "Text elements should have a contrast ratio of at least 7:1 (4.5:1 for large text)"
                    .to_string(),
                help_url: CONTRAST_ENHANCED_URL.to_string(),
                tags: string_vec(&["wcag2aaa", "wcag146"]),
                nodes: vec![node(Some(format!(
                    "Element has insufficient color contrast for AAA of {ratio:.2}:1 (foreground: {}, background: {}, font size: {font_size}pt, font weight: {})",
                    foreground.to_hex(),
                    background.to_hex(),
                    weight_name(bold),
                )))],
            });
        } else {
            results.passes.push(Finding {
                id: "custom-color-contrast".to_string(),
                impact: None,
                description: "Elements have sufficient color contrast".to_string(),
                help: "Text elements have a contrast ratio of at least 7:1 (4.5:1 for large text)"
                    .to_string(),
                help_url: CONTRAST_ENHANCED_URL.to_string(),
                tags: string_vec(&["wcag2aa", "wcag2aaa", "wcag143", "wcag146"]),
                nodes: vec![node(None)],
            });
        }
    }

    results
}

/// Foreground: computed color, else the tag's browser default (anchors
/// branch on visited/active state), else the global default.
fn resolve_foreground(
    doc: &Document,
    element: NodeId,
    tag: &str,
    style: &ComputedStyle,
) -> Rgba {
    if let Some(color) = present(&style.color) {
        return parse_color(Some(color));
    }
    if let Some(default) = browser_default(tag)
        && let Some(color) = default.color
    {
        if tag == "a" {
            if doc.has_class(element, "visited")
                && let Some(visited) = default.visited_color
            {
                return visited;
            }
            if doc.has_class(element, "active")
                && let Some(active) = default.active_color
            {
                return active;
            }
        }
        return color;
    }
    DEFAULT_TEXT_COLOR
}

/// Background: declared computed background, else the tag's browser
/// default, else the composited effective background of the ancestry.
fn resolve_background<S: StyleLookup>(
    doc: &Document,
    element: NodeId,
    tag: &str,
    style: &ComputedStyle,
    styles: &S,
) -> Rgba {
    if let Some(declared) = present(&style.background_color)
        && !is_declared_transparent(declared)
    {
        return parse_color(Some(declared));
    }
    if let Some(default) = browser_default(tag)
        && let Some(background) = default.background_color
    {
        return background;
    }
    effective_background(doc, element, styles)
}

/// Font size in px: computed value, else the heading default for h1-h6,
/// else the global default.
fn resolve_font_size(tag: &str, style: &ComputedStyle) -> f64 {
    if let Some(value) = present(&style.font_size)
        && let Some(size) = parse_px(value)
    {
        return size;
    }
    heading_font_size(tag).unwrap_or(DEFAULT_FONT_SIZE)
}

/// Boldness: a declared numeric weight >= 700 wins (non-numeric declared
/// weights count as not bold); otherwise inherently-bold tags and bold
/// browser defaults.
fn resolve_bold(tag: &str, style: &ComputedStyle) -> bool {
    if let Some(weight) = present(&style.font_weight) {
        return parse_leading_int(weight).is_some_and(|w| w >= 700);
    }
    matches!(tag, "b" | "strong" | "th") || browser_default(tag).is_some_and(|d| d.bold)
}

/// WCAG (AA, AAA) thresholds: large text (>= 18, or >= 14 bold) relaxes
/// to 3.0/4.5; everything else requires 4.5/7.0.
fn required_ratios(font_size: f64, bold: bool) -> (f64, f64) {
    if font_size >= 18.0 || (font_size >= 14.0 && bold) {
        (3.0, 4.5)
    } else {
        (4.5, 7.0)
    }
}

/// A style field counts as present only when non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Leading float of a CSS length: `"16px"` -> 16.0.
fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-')
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Leading integer of a weight string: `"700"` -> 700, `"bold"` -> None.
fn parse_leading_int(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

fn weight_name(bold: bool) -> &'static str {
    if bold { "bold" } else { "normal" }
}

fn string_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
