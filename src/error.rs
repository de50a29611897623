//! Error types for ghissue

use thiserror::Error;

/// Structural problems with the input text
///
/// These are never retried: the input has to be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input has no segment separator, so there is no target or no issue
    #[error("issues file must contain a target and at least one issue")]
    MissingSegments,

    /// First segment is blank
    #[error("couldn't find a target repo in input")]
    MissingTarget,

    /// Target is not exactly `owner/repo`
    #[error("parse target: couldn't parse target '{0}' to 'owner/repo'")]
    InvalidTarget(String),

    /// Target owner is blank
    #[error("parse target: owner can't be empty")]
    EmptyOwner,

    /// Target repo is blank
    #[error("parse target: repo can't be empty")]
    EmptyRepo,

    /// An issue segment has no title on its first line
    #[error("parse issue {index}: title can't be empty")]
    MissingTitle {
        /// 1-based position of the issue segment
        index: usize,
    },
}

/// Errors that can occur in ghissue operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input text
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Input is well-formed but every issue segment is blank
    #[error("found no issues to create")]
    NoIssues,

    /// Creating a single issue failed; earlier issues were already created
    #[error("create issue {index} ('{title}'){}", created_suffix(created))]
    CreateIssue {
        /// 1-based position of the failing record
        index: usize,
        /// Title of the failing record
        title: String,
        /// Identifiers of issues created before the failure
        created: Vec<String>,
        /// Underlying service error
        source: Box<Error>,
    },

    /// Opening the browser failed
    #[error("open browser: {0}")]
    BrowserOpen(String),

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// GitHub client construction or API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Generic issue service error
    #[error("issue service error: {0}")]
    Platform(String),
}

fn created_suffix(created: &[String]) -> String {
    if created.is_empty() {
        String::new()
    } else {
        format!(" after creating {}", created.join(","))
    }
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result type alias for ghissue operations
pub type Result<T> = std::result::Result<T, Error>;
