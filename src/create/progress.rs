//! Progress callback trait for interface-agnostic updates
//!
//! Everything the orchestrator would print goes through this trait, so the
//! CLI decides where it lands and tests can record it.

use crate::types::{CreatedIssue, IssueRecord};
use async_trait::async_trait;
use std::fmt;

/// Creation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Parsing the input
    Parsing,
    /// Creating issues on the service
    Creating,
    /// Waiting for the search index to catch up
    WaitingForIndex,
    /// Opening the search URL in a browser
    OpeningBrowser,
    /// Run complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsing => write!(f, "Parsing"),
            Self::Creating => write!(f, "Creating issues"),
            Self::WaitingForIndex => write!(f, "Waiting for search index"),
            Self::OpeningBrowser => write!(f, "Opening browser"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Progress callback trait
///
/// `on_output` carries the command's primary output (preview, identifiers,
/// search URL). The other callbacks are diagnostics.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called right after each issue is created
    ///
    /// `index` is the 1-based position of the record.
    async fn on_issue_created(&self, index: usize, record: &IssueRecord, issue: &CreatedIssue);

    /// Called with primary output, one logical block per call
    async fn on_output(&self, output: &str);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_issue_created(&self, _index: usize, _record: &IssueRecord, _issue: &CreatedIssue) {}
    async fn on_output(&self, _output: &str) {}
    async fn on_message(&self, _message: &str) {}
}
