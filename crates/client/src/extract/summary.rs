//! Summary extraction.

use super::{SectionRules, scan_section};

/// Lines that open the summary section.
const SUMMARY_MARKERS: &[&str] = &["## Summary", "## 概要", "# Overview"];

/// Heading words that keep the summary section open.
const SUMMARY_HEADINGS: &[&str] = &["Summary", "概要"];

/// How many leading lines the first fallback looks at.
const LEAD_WINDOW: usize = 10;

/// How many plain lines the first fallback keeps.
const LEAD_LINES: usize = 3;

/// Length of the raw prefix used as the last resort, in characters.
const RAW_PREFIX_CHARS: usize = 500;

fn is_summary_marker(line: &str) -> bool {
    SUMMARY_MARKERS.iter().any(|marker| line.contains(marker))
}

fn is_summary_heading(line: &str) -> bool {
    SUMMARY_HEADINGS.iter().any(|word| line.contains(word))
}

/// Scanner rules for the summary section. The marker line is not kept.
pub const SUMMARY_RULES: SectionRules =
    SectionRules { is_marker: is_summary_marker, continues_section: is_summary_heading, keep_marker: false };

/// Extract a short summary from a playbook body.
///
/// Tries, in order, and returns the first non-blank result:
/// 1. the lines of the `## Summary` / `## 概要` / `# Overview` section
/// 2. up to 3 non-blank, non-heading lines among the first 10 lines
/// 3. the first 500 characters of the body followed by `...`
pub fn extract_summary(body: &str) -> String {
    let section = scan_section(body, SUMMARY_RULES);
    if !section.is_empty() {
        return section;
    }

    let lead = lead_lines(body);
    if !lead.is_empty() {
        return lead;
    }

    raw_prefix(body)
}

fn lead_lines(body: &str) -> String {
    body.split('\n')
        .take(LEAD_WINDOW)
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .take(LEAD_LINES)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn raw_prefix(body: &str) -> String {
    let mut prefix: String = body.chars().take(RAW_PREFIX_CHARS).collect();
    prefix.push_str("...");
    prefix
}
