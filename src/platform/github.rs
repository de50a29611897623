//! GitHub issue service implementation

use crate::error::{Error, Result};
use crate::platform::{DEFAULT_WEB_BASE, IssueService};
use crate::types::{CreatedIssue, IssueRecord, Target};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    host: Option<String>,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance; `None` means github.com.
    pub fn new(token: &str, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, host })
    }
}

/// Web UI base URL for an optional Enterprise host
pub(crate) fn web_base_for(host: Option<&str>) -> String {
    host.map_or_else(|| DEFAULT_WEB_BASE.to_string(), |h| format!("https://{h}"))
}

#[async_trait]
impl IssueService for GitHubService {
    async fn create_issue(&self, target: &Target, record: &IssueRecord) -> Result<CreatedIssue> {
        debug!("Creating issue '{}' in {target}", record.title);

        let handler = self.client.issues(&target.owner, &target.repo);
        let mut builder = handler.create(&record.title);

        if let Some(body) = &record.body {
            builder = builder.body(body.clone());
        }
        if let Some(labels) = &record.labels {
            builder = builder.labels(labels.clone());
        }
        if let Some(assignees) = &record.assignees {
            builder = builder.assignees(assignees.clone());
        }

        let issue = builder.send().await?;

        Ok(CreatedIssue {
            number: Some(issue.number),
            html_url: Some(issue.html_url.to_string()),
        })
    }

    fn web_base(&self) -> String {
        web_base_for(self.host.as_deref())
    }
}
