//! Heuristic section extraction from playbook markdown.
//!
//! ### Scanner
//! - Line-oriented, single forward pass over `body.split('\n')`.
//! - Two states: `Searching` until a marker line is seen, then `Collecting`.
//! - While collecting, a `##` heading outside the section ends the scan.
//! - Blank lines are never collected.
//!
//! ### Fallbacks
//! - Applied by the callers, only when the scan collected nothing.
//! - Summary: first plain lines, then a truncated raw prefix.
//! - Prevention: the summary.
//!
//! This is not a markdown parser; it only looks at line prefixes and
//! substrings.

pub mod prevention;
pub mod summary;

pub use prevention::extract_prevention_guidance;
pub use summary::extract_summary;

/// Prefix that starts a section boundary while collecting.
const SECTION_HEADING: &str = "##";

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Searching,
    Collecting,
}

/// What a section looks like to the scanner.
#[derive(Debug, Clone, Copy)]
pub struct SectionRules {
    /// A line that opens (or re-opens) the section.
    pub is_marker: fn(&str) -> bool,
    /// A heading that belongs to the section and so does not end it.
    pub continues_section: fn(&str) -> bool,
    /// Whether marker lines are part of the output.
    pub keep_marker: bool,
}

/// Collects the lines of one section.
#[derive(Debug)]
pub struct SectionScanner {
    rules: SectionRules,
    state: ScanState,
    collected: Vec<String>,
}

impl SectionScanner {
    pub fn new(rules: SectionRules) -> Self {
        Self { rules, state: ScanState::Searching, collected: Vec::new() }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feed one line. Returns false once the section has ended.
    pub fn feed(&mut self, line: &str) -> bool {
        if (self.rules.is_marker)(line) {
            self.state = ScanState::Collecting;
            if self.rules.keep_marker {
                self.collected.push(line.to_string());
            }
            return true;
        }

        match self.state {
            ScanState::Searching => true,
            ScanState::Collecting => {
                if line.starts_with(SECTION_HEADING) && !(self.rules.continues_section)(line) {
                    return false;
                }
                if !line.trim().is_empty() {
                    self.collected.push(line.to_string());
                }
                true
            }
        }
    }

    /// Collected lines joined with `\n` and trimmed. Empty if nothing matched.
    pub fn finish(self) -> String {
        self.collected.join("\n").trim().to_string()
    }
}

/// Run a full scan of `body` and return the collected section.
pub fn scan_section(body: &str, rules: SectionRules) -> String {
    let mut scanner = SectionScanner::new(rules);
    for line in body.split('\n') {
        if !scanner.feed(line) {
            break;
        }
    }
    scanner.finish()
}
