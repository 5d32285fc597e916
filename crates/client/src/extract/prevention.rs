//! Prevention / mitigation guidance extraction.

use super::{SectionRules, extract_summary, scan_section};

/// Lower-case phrases that open the prevention section.
const PREVENTION_MARKERS: &[&str] = &["prevention", "mitigation", "best practices", "security controls"];

/// Localized marker, matched against the raw line.
const LOCALIZED_MARKER: &str = "予防";

/// Lower-case heading phrases that keep the prevention section open.
const PREVENTION_HEADINGS: &[&str] = &["prevention", "mitigation", "best practices"];

fn is_prevention_marker(line: &str) -> bool {
    let lower = line.to_lowercase();
    PREVENTION_MARKERS.iter().any(|marker| lower.contains(marker)) || line.contains(LOCALIZED_MARKER)
}

fn is_prevention_heading(line: &str) -> bool {
    let lower = line.to_lowercase();
    PREVENTION_HEADINGS.iter().any(|word| lower.contains(word))
}

/// Scanner rules for the prevention section. Marker lines are kept.
pub const PREVENTION_RULES: SectionRules =
    SectionRules { is_marker: is_prevention_marker, continues_section: is_prevention_heading, keep_marker: true };

/// Extract prevention guidance from a playbook body.
///
/// Any line mentioning prevention, mitigation, best practices, security
/// controls, or `予防` opens the section and is itself included. Falls back
/// to [`extract_summary`] when nothing was collected.
pub fn extract_prevention_guidance(body: &str) -> String {
    let section = scan_section(body, PREVENTION_RULES);
    if section.is_empty() { extract_summary(body) } else { section }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mitigation_section() {
        let body = "## Mitigation\nDo X\n## Other\nDo Y";
        assert_eq!(extract_prevention_guidance(body), "## Mitigation\nDo X");
    }

    #[test]
    fn test_marker_in_body_text() {
        let body = "# IAM\nIntro\nFollow best practices always.\n\nRotate keys\n## Next\nx";
        assert_eq!(extract_prevention_guidance(body), "Follow best practices always.\nRotate keys");
    }

    #[test]
    fn test_related_headings_continue_section() {
        let body = "## Prevention\na\n## Best Practices\nb\n## Detection\nc";
        assert_eq!(extract_prevention_guidance(body), "## Prevention\na\n## Best Practices\nb");
    }

    #[test]
    fn test_security_controls_heading_is_kept() {
        let body = "## Mitigation\na\n## Security Controls\nb\n## Recovery\nc";
        assert_eq!(extract_prevention_guidance(body), "## Mitigation\na\n## Security Controls\nb");
    }

    #[test]
    fn test_localized_marker() {
        let body = "# S3\n## 予防策\nパブリックアクセスをブロック\n## 検知\nログ";
        assert_eq!(extract_prevention_guidance(body), "## 予防策\nパブリックアクセスをブロック");
    }

    #[test]
    fn test_case_insensitive_marker() {
        let body = "## PREVENTION\nEnable MFA\n## Steps\n1";
        assert_eq!(extract_prevention_guidance(body), "## PREVENTION\nEnable MFA");
    }

    #[test]
    fn test_subheading_ends_section() {
        let body = "## Mitigation\na\n### Timeline\nb";
        assert_eq!(extract_prevention_guidance(body), "## Mitigation\na");
    }

    #[test]
    fn test_no_marker_falls_back_to_summary() {
        let bodies = [
            "## Summary\nShort summary\n## Steps\nDo things",
            "# Title\nplain one\nplain two",
            "# Only a heading",
        ];
        for body in bodies {
            assert_eq!(extract_prevention_guidance(body), extract_summary(body));
        }
    }
}
