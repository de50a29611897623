//! Create command - create issues from a file

use crate::cli::progress::CliProgress;
use anyhow::{Context, Result};
use ghissue::auth::read_token_file;
use ghissue::browser::SystemBrowser;
use ghissue::config::Config;
use ghissue::create::create_issues;
use ghissue::parse::trim_input;
use ghissue::platform::DeferredIssueService;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Options collected from the command line
pub struct CreateOptions {
    /// Issues file, `-` for stdin
    pub file: PathBuf,
    /// Token passed with `--token`
    pub token: Option<String>,
    /// Token file passed with `--token-file`
    pub token_file: Option<PathBuf>,
    /// GitHub Enterprise host
    pub host: Option<String>,
    /// Preview only
    pub dry_run: bool,
    /// Print the search URL
    pub verbose: bool,
    /// Open the search URL in a browser
    pub open_after: bool,
    /// Append the byline to bodies
    pub append_byline: bool,
}

/// Run the create command
pub async fn run_create(options: CreateOptions) -> Result<()> {
    let input = read_input(&options.file)?;

    let token = match (&options.token, &options.token_file) {
        (Some(token), _) => Some(token.clone()),
        (None, Some(path)) => Some(read_token_file(path)?),
        (None, None) => None,
    };

    let config = Config {
        token,
        host: options.host,
        dry_run: options.dry_run,
        verbose: options.verbose,
        open_after: options.open_after,
        append_byline: options.append_byline,
        ..Config::default()
    };

    let progress = CliProgress::new(config.verbose);
    // Credentials are only resolved once the first issue is created
    let service = DeferredIssueService::new(config.clone());

    create_issues(
        &config,
        trim_input(&input),
        &service,
        &SystemBrowser,
        &progress,
    )
    .await?;

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("could not read issues from stdin")?;
        return Ok(input);
    }

    std::fs::read_to_string(path).with_context(|| format!("could not read from {}", path.display()))
}
