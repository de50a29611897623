//! Issue service factory
//!
//! Creates the issue service for a live run.

use crate::auth::get_github_auth;
use crate::config::Config;
use crate::error::Result;
use crate::platform::github::web_base_for;
use crate::platform::{GitHubService, IssueService};
use crate::types::{CreatedIssue, IssueRecord, Target};
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

/// Create an issue service from configuration
///
/// Uses the configured token when present, otherwise falls back to the
/// environment and the `gh` CLI.
pub async fn create_issue_service(config: &Config) -> Result<Box<dyn IssueService>> {
    let auth = get_github_auth(config.token.as_deref()).await?;
    debug!("Using GitHub token from {:?}", auth.source);
    Ok(Box::new(GitHubService::new(&auth.token, config.host.clone())?))
}

/// Issue service that authenticates on first use
///
/// Dry runs never create an issue, so they never need a token.
pub struct DeferredIssueService {
    config: Config,
    inner: OnceCell<Box<dyn IssueService>>,
}

impl DeferredIssueService {
    /// Wrap `config`; nothing is resolved until the first issue is created
    pub fn new(config: Config) -> Self {
        Self {
            config,
            inner: OnceCell::new(),
        }
    }

    /// Whether credentials have been resolved yet
    pub fn is_resolved(&self) -> bool {
        self.inner.initialized()
    }
}

#[async_trait]
impl IssueService for DeferredIssueService {
    async fn create_issue(&self, target: &Target, record: &IssueRecord) -> Result<CreatedIssue> {
        let service = self
            .inner
            .get_or_try_init(|| create_issue_service(&self.config))
            .await?;
        service.create_issue(target, record).await
    }

    fn web_base(&self) -> String {
        web_base_for(self.config.host.as_deref())
    }
}
