//! Issue service for GitHub
//!
//! The orchestrator only needs one capability from the remote tracker:
//! create a single issue and report its number.

mod factory;
mod github;

pub use factory::{DeferredIssueService, create_issue_service};
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{CreatedIssue, IssueRecord, Target};
use async_trait::async_trait;

/// Default web host for search URLs
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

/// Issue service trait
///
/// Abstracts the remote tracker so creation can be tested without network
/// access.
#[async_trait]
pub trait IssueService: Send + Sync {
    /// Create one issue in `target`
    async fn create_issue(&self, target: &Target, record: &IssueRecord) -> Result<CreatedIssue>;

    /// Base URL of the web UI, used to build issue search links
    fn web_base(&self) -> String {
        DEFAULT_WEB_BASE.to_string()
    }
}
