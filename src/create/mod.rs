//! Issue creation engine
//!
//! Parses the input, then either previews it (dry run) or creates every issue
//! through an [`IssueService`], one at a time and in input order.

mod execute;
mod preview;
mod progress;
mod search;

pub use execute::{preview_issues, submit_issues};
pub use preview::{render_preview, render_record};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use search::search_url;

use crate::browser::BrowserOpener;
use crate::config::Config;
use crate::error::Result;
use crate::parse::parse;
use crate::platform::IssueService;
use crate::types::{CreationOutcome, ParsedInput};

/// Parse `input` with the options carried by `config`
pub fn prepare(config: &Config, input: &str) -> Result<ParsedInput> {
    parse(input, &config.parse_options())
}

/// Parse `input` and create its issues
///
/// In dry-run mode `service` and `browser` are never called.
pub async fn create_issues(
    config: &Config,
    input: &str,
    service: &dyn IssueService,
    browser: &dyn BrowserOpener,
    progress: &dyn ProgressCallback,
) -> Result<CreationOutcome> {
    progress.on_phase(Phase::Parsing).await;
    let parsed = prepare(config, input)?;

    if config.dry_run {
        return Ok(preview_issues(config, parsed, progress).await);
    }

    submit_issues(config, parsed, service, browser, progress).await
}
