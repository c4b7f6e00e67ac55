/// One defect found while turning a spec into a client.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

pub fn print_issues(issues: &[ValidationIssue]) {
    eprintln!(
        "\n❌ Spec validation failed. {} issue(s) found:\n",
        issues.len()
    );
    for issue in issues {
        eprintln!("[{}] {}: {}", issue.kind, issue.location, issue.message);
    }
    eprintln!("\nPlease fix the issues in the API description before generating.\n");
}

/// Generation is all-or-nothing: any collected issue aborts the run
/// before output is written.
pub fn fail_if_issues(issues: Vec<ValidationIssue>) -> anyhow::Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    print_issues(&issues);
    anyhow::bail!("spec validation failed with {} issue(s)", issues.len())
}
