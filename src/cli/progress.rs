//! CLI progress callback
//!
//! Primary output (preview, issue numbers, search URL) goes to stdout
//! unstyled so it can be piped. Diagnostics go to stderr, colored when the
//! terminal supports it (`NO_COLOR` and `CLICOLOR` are honored by
//! `owo-colors`).

use anstream::{eprintln, println};
use async_trait::async_trait;
use ghissue::create::{Phase, ProgressCallback};
use ghissue::types::{CreatedIssue, IssueRecord};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::sync::Mutex;
use std::time::Duration;

/// Label for a created issue: `#<number>`, or its position when the
/// service reported no number
pub fn issue_label(index: usize, issue: &CreatedIssue) -> String {
    issue
        .number
        .map_or_else(|| format!("{index}."), |n| format!("#{n}"))
}

/// Green checkmark shown next to each created issue
pub fn created_marker() -> String {
    "✓".if_supports_color(Stream::Stderr, |t| t.green()).to_string()
}

/// Red `error` prefix for fatal errors
pub fn error_prefix() -> String {
    "error".if_supports_color(Stream::Stderr, |t| t.red()).to_string()
}

/// Issue URL, as an OSC 8 hyperlink where the terminal supports one
fn issue_link(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stderr) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

fn index_wait_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// CLI progress callback
pub struct CliProgress {
    /// Verbose mode reports each created issue
    verbose: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    /// Create a progress reporter
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: Mutex::new(None),
        }
    }

    fn finish_spinner(&self) {
        let spinner = self.spinner.lock().ok().and_then(|mut guard| guard.take());
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::WaitingForIndex => {
                let spinner = index_wait_spinner(format!("{phase}..."));
                if let Ok(mut guard) = self.spinner.lock() {
                    *guard = Some(spinner);
                }
            }
            Phase::OpeningBrowser | Phase::Complete => self.finish_spinner(),
            Phase::Creating if self.verbose => {
                eprintln!(
                    "{}...",
                    phase.if_supports_color(Stream::Stderr, |t| t.bold())
                );
            }
            _ => {}
        }
    }

    async fn on_issue_created(&self, index: usize, record: &IssueRecord, issue: &CreatedIssue) {
        if !self.verbose {
            return;
        }
        eprintln!(
            "  {} Created {} {}",
            created_marker(),
            issue_label(index, issue).if_supports_color(Stream::Stderr, |t| t.cyan()),
            record.title.if_supports_color(Stream::Stderr, |t| t.bold())
        );
        if let Some(url) = &issue.html_url {
            eprintln!("    {}", issue_link(url));
        }
    }

    async fn on_output(&self, output: &str) {
        println!("{output}");
    }

    async fn on_message(&self, message: &str) {
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |t| t.dimmed())
        );
    }
}
