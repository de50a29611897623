//! Issue creation: dry-run preview and live submission

use crate::browser::BrowserOpener;
use crate::config::Config;
use crate::create::{Phase, ProgressCallback, render_preview, search_url};
use crate::error::{Error, Result};
use crate::platform::IssueService;
use crate::types::{CreationOutcome, ParsedInput};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Report what would be created without contacting the service
pub async fn preview_issues(
    config: &Config,
    parsed: ParsedInput,
    progress: &dyn ProgressCallback,
) -> CreationOutcome {
    let count = parsed.records.len();
    progress
        .on_message(&format!("Would create the following {count} issue(s)"))
        .await;
    progress
        .on_output(&render_preview(
            &parsed.target,
            &parsed.records,
            &config.separators,
        ))
        .await;

    CreationOutcome {
        target: parsed.target,
        records: parsed.records,
        identifiers: Vec::new(),
        search_url: None,
    }
}

/// Create every record in order, stopping at the first failure
///
/// Issues created before a failure are left in place; the error names the
/// failing record and lists what was already created.
pub async fn submit_issues(
    config: &Config,
    parsed: ParsedInput,
    service: &dyn IssueService,
    browser: &dyn BrowserOpener,
    progress: &dyn ProgressCallback,
) -> Result<CreationOutcome> {
    let total = parsed.records.len();
    let mut identifiers = Vec::with_capacity(total);

    progress.on_phase(Phase::Creating).await;

    for (idx, record) in parsed.records.iter().enumerate() {
        let index = idx + 1;
        info!("Creating issue {index}/{total}: {}", record.title);

        let issue = service
            .create_issue(&parsed.target, record)
            .await
            .map_err(|e| Error::CreateIssue {
                index,
                title: record.title.clone(),
                created: identifiers.clone(),
                source: Box::new(e),
            })?;

        progress.on_issue_created(index, record, &issue).await;

        match issue.identifier() {
            Some(id) => identifiers.push(id),
            None => warn!("Issue '{}' was created without a number", record.title),
        }
    }

    progress.on_output(&identifiers.join(",")).await;

    let url = search_url(
        &service.web_base(),
        &parsed.target,
        Utc::now(),
        config.search_lookback,
    );
    if config.verbose {
        progress.on_output(&url).await;
    }

    if config.open_after {
        progress.on_phase(Phase::WaitingForIndex).await;
        debug!("Waiting {:?} before opening browser", config.index_wait);
        tokio::time::sleep(config.index_wait).await;

        progress.on_phase(Phase::OpeningBrowser).await;
        browser.open(&url).await.map_err(|e| match e {
            Error::BrowserOpen(_) => e,
            other => Error::BrowserOpen(other.to_string()),
        })?;
    }

    progress.on_phase(Phase::Complete).await;

    Ok(CreationOutcome {
        target: parsed.target,
        records: parsed.records,
        identifiers,
        search_url: Some(url),
    })
}
