//! Core types for ghissue

use std::fmt;

/// The repository issues are created in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// One issue to create
///
/// `None` means the field was absent from the input. Present lists are never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Issue title (never blank)
    pub title: String,
    /// Issue body, byline included when enabled
    pub body: Option<String>,
    /// Label names
    pub labels: Option<Vec<String>>,
    /// Assignee logins
    pub assignees: Option<Vec<String>>,
}

impl IssueRecord {
    /// Create a record with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            labels: None,
            assignees: None,
        }
    }
}

/// Result of parsing an input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Repository to create issues in
    pub target: Target,
    /// Issues in input order
    pub records: Vec<IssueRecord>,
}

/// An issue as returned by the issue service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreatedIssue {
    /// Issue number, if the service reported one
    pub number: Option<u64>,
    /// Web URL for the issue
    pub html_url: Option<String>,
}

impl CreatedIssue {
    /// Identifier printed for this issue (the issue number)
    pub fn identifier(&self) -> Option<String> {
        self.number.map(|n| n.to_string())
    }
}

/// What a call to [`create_issues`](crate::create::create_issues) did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationOutcome {
    /// Parsed target
    pub target: Target,
    /// Parsed records, in submission order
    pub records: Vec<IssueRecord>,
    /// Identifiers of created issues, in submission order (empty for dry runs)
    pub identifiers: Vec<String>,
    /// Search URL for the freshly created issues (`None` for dry runs)
    pub search_url: Option<String>,
}
