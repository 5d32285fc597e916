//! Rendering of repository results for both front ends.

use advisor_client::{SearchResult, extract_prevention_guidance, extract_summary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Render the prevention guidance report for a service.
///
/// ```text
/// Question: <question>            (only when asked)
///
/// # <SERVICE> Security Guidance
///
/// ## <identifier>
///
/// <prevention section>
///
/// ---
/// ```
pub fn prevention_report(service: &str, question: Option<&str>, results: &[SearchResult]) -> String {
    let mut report = String::new();
    if let Some(question) = question {
        report.push_str(&format!("Question: {question}\n\n"));
    }
    report.push_str(&format!("# {} Security Guidance\n\n", service.to_uppercase()));

    for result in results {
        let guidance = extract_prevention_guidance(&result.body);
        report.push_str(&format!("## {}\n\n{}\n\n---\n\n", result.identifier, guidance));
    }

    report
}

/// Identifiers of the playbooks a report was built from.
pub fn sources(results: &[SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.identifier.clone()).collect()
}

/// A playbook with its summary and full body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlaybookDetail {
    pub filename: String,
    pub summary: String,
    pub content: String,
}

impl PlaybookDetail {
    pub fn new(filename: impl Into<String>, content: String) -> Self {
        let summary = extract_summary(&content);
        Self { filename: filename.into(), summary, content }
    }
}

/// A further match, summary only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelatedPlaybook {
    pub filename: String,
    pub summary: String,
}

/// Scenario search result: the first match in full, the rest summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScenarioReport {
    pub primary: PlaybookDetail,
    pub related: Vec<RelatedPlaybook>,
}

impl ScenarioReport {
    /// Build a report from search results in order. None if there are none.
    pub fn from_results(results: Vec<SearchResult>) -> Option<Self> {
        let mut results = results.into_iter();
        let first = results.next()?;

        Some(Self {
            primary: PlaybookDetail::new(first.identifier, first.body),
            related: results
                .map(|r| RelatedPlaybook { summary: extract_summary(&r.body), filename: r.identifier })
                .collect(),
        })
    }
}
