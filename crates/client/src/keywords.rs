//! Static service keyword table.
//!
//! Maps an informal service or scenario name to the substrings that identify
//! its playbooks by file name.

/// Service token → identifier substrings, in match order.
pub const SERVICE_KEYWORDS: &[(&str, &[&str])] = &[
    ("s3", &["s3", "public_access"]),
    ("iam", &["iam", "credentials", "compromised"]),
    ("ec2", &["ec2", "ransom_response_ec2"]),
    ("rds", &["rds", "ransom_response_rds"]),
    ("vpc", &["vpc", "network"]),
    ("ses", &["ses"]),
    ("sagemaker", &["sagemaker"]),
    ("bedrock", &["bedrock"]),
    ("ransomware", &["ransom"]),
    ("cryptojacking", &["cryptojacking"]),
];

/// Resolve a service name to its keyword list.
///
/// The name is lower-cased first. Unknown names resolve to themselves.
pub fn resolve_keywords(service_name: &str) -> Vec<String> {
    let normalized = service_name.to_lowercase();
    SERVICE_KEYWORDS
        .iter()
        .find(|(service, _)| *service == normalized)
        .map(|(_, keywords)| keywords.iter().map(|k| k.to_string()).collect())
        .unwrap_or_else(|| vec![normalized])
}
