//! Built-in baseline guidance.
//!
//! Used by `get_prevention_guidance` when no playbook matches the requested
//! service, including when the remote repository is unreachable.

const GENERAL: &str = "## AWS Security Fundamentals

1. **Least privilege**
   - Grant IAM policies only the permissions a task needs
   - Restrict resource-based policies the same way

2. **Defense in depth**
   - Layer multiple security controls
   - Avoid single points of failure

3. **Encryption**
   - Encrypt data at rest (EBS, S3, RDS)
   - Encrypt data in transit (TLS)

4. **Logging and monitoring**
   - Record API calls with CloudTrail
   - Watch metrics and logs with CloudWatch

5. **Consistency through automation**
   - Manage configuration as Infrastructure as Code
   - Check compliance continuously with AWS Config";

const S3: &str = "## S3 Security Best Practices

1. **Block public access**
   - Enable Block Public Access on every bucket
   - Enforce it at the account level too

2. **Encryption**
   - Enable default encryption (SSE-S3 or SSE-KMS)
   - Require HTTPS in bucket policies

3. **Access logging**
   - Deliver server access logs to a separate bucket
   - Protect the log bucket itself

4. **Versioning and MFA delete**
   - Enable versioning to recover from deletion
   - Require MFA delete on critical buckets

5. **Lifecycle policies**
   - Archive or expire old data automatically
   - Balance cost with retention requirements";

const IAM: &str = "## IAM Security Best Practices

1. **Multi-factor authentication**
   - Required for the root user
   - Strongly recommended for privileged users

2. **Access key management**
   - Rotate keys regularly (90 days)
   - Delete unused access keys immediately

3. **Use IAM roles**
   - Attach roles to EC2 instances
   - Use roles for cross-account access

4. **Least-privilege policies**
   - Grant only required actions
   - Keep wildcards (*) to a minimum

5. **Regular permission reviews**
   - Use IAM Access Analyzer
   - Remove unused permissions";

const EC2: &str = "## EC2 Security Best Practices

1. **Minimal security groups**
   - Open only the ports you need
   - Restrict source addresses wherever possible

2. **Current AMIs**
   - Patch regularly
   - Rebuild custom AMIs on a schedule

3. **Systems Manager Session Manager**
   - Use it instead of SSH keys
   - Sessions are audited automatically

4. **Enforce IMDSv2**
   - Prevents metadata service abuse
   - Configure it per instance

5. **EBS encryption**
   - Enable encryption by default
   - Snapshots inherit encryption";

const VPC: &str = "## VPC Security Best Practices

1. **Private subnets**
   - Place databases and internal services in private subnets
   - Route outbound traffic through a NAT gateway

2. **NACLs and security groups**
   - Control subnets with NACLs
   - Control instances with security groups

3. **VPC Flow Logs**
   - Record all traffic
   - Use them to detect unusual patterns

4. **VPC endpoints**
   - Reach AWS services privately
   - Keep traffic off the internet

5. **Multiple Availability Zones**
   - Improves availability and resilience
   - Removes single points of failure";

/// Service sections in selection order.
const SERVICE_SECTIONS: &[(&str, &str)] = &[("s3", S3), ("iam", IAM), ("ec2", EC2), ("vpc", VPC)];

/// Baseline guidance for `service`, optionally prefixed with the question.
///
/// The general principles always come first. The first service whose token
/// occurs in the lower-cased name adds its section; `all` (or `全部`)
/// returns every section separated by rules.
pub fn baseline_guidance(service: &str, question: Option<&str>) -> String {
    let normalized = service.to_lowercase();

    let guidance = match SERVICE_SECTIONS.iter().find(|(token, _)| normalized.contains(token)) {
        Some((_, section)) => format!("{GENERAL}\n\n{section}"),
        None if matches!(normalized.as_str(), "all" | "全部") => std::iter::once(GENERAL)
            .chain(SERVICE_SECTIONS.iter().map(|(_, section)| *section))
            .collect::<Vec<_>>()
            .join("\n\n---\n\n"),
        None => GENERAL.to_string(),
    };

    match question {
        Some(question) => format!("### Question: {question}\n\n{guidance}"),
        None => guidance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_only() {
        let guidance = baseline_guidance("Lambda", None);
        assert_eq!(guidance, GENERAL);
    }

    #[test]
    fn test_service_section_appended() {
        let guidance = baseline_guidance("S3", None);
        assert!(guidance.starts_with("## AWS Security Fundamentals"));
        assert!(guidance.ends_with(S3));
        assert!(!guidance.contains("## IAM Security"));
    }

    #[test]
    fn test_substring_match_in_order() {
        // "s3" is checked before "iam"
        let guidance = baseline_guidance("s3-iam-audit", None);
        assert!(guidance.contains("## S3 Security"));
        assert!(!guidance.contains("## IAM Security"));

        let guidance = baseline_guidance("amazon-vpc", None);
        assert!(guidance.contains("## VPC Security"));
    }

    #[test]
    fn test_all_sections() {
        let guidance = baseline_guidance("ALL", None);
        assert_eq!(guidance.matches("\n\n---\n\n").count(), 4);
        for heading in ["Fundamentals", "## S3", "## IAM", "## EC2", "## VPC"] {
            assert!(guidance.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_all_alias() {
        assert_eq!(baseline_guidance("全部", None), baseline_guidance("all", None));
    }

    #[test]
    fn test_question_prefix() {
        let guidance = baseline_guidance("ec2", Some("Is SSH safe?"));
        assert!(guidance.starts_with("### Question: Is SSH safe?\n\n## AWS Security Fundamentals"));
        assert!(guidance.contains("## EC2 Security"));
    }
}
