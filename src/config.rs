//! Run configuration
//!
//! A [`Config`] is built once by the caller and passed by reference for the
//! whole run.

use crate::parse::{ParseOptions, Separators};
use std::time::Duration;

/// Attribution appended to issue bodies when the byline is enabled
pub const BYLINE: &str = "> 🙌 Bulk-uploaded by https://github.com/hcgatewood/ghissue";

/// How long to wait after creating issues before opening the search URL,
/// so the search index has caught up
pub const DEFAULT_INDEX_WAIT: Duration = Duration::from_secs(3);

/// How far back from now the search URL looks for created issues
pub const DEFAULT_SEARCH_LOOKBACK: Duration = Duration::from_secs(30);

/// Immutable configuration for one `create_issues` run
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub token (required for live runs only)
    pub token: Option<String>,
    /// Custom GitHub Enterprise host (None for github.com)
    pub host: Option<String>,
    /// Print a preview instead of creating issues
    pub dry_run: bool,
    /// Print the search URL after creating issues
    pub verbose: bool,
    /// Open the search URL in a browser after creating issues
    pub open_after: bool,
    /// Append [`BYLINE`] to every non-empty body
    pub append_byline: bool,
    /// Delay before opening the browser
    pub index_wait: Duration,
    /// Lookback window of the search URL
    pub search_lookback: Duration,
    /// Input separators
    pub separators: Separators,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            host: None,
            dry_run: false,
            verbose: false,
            open_after: false,
            append_byline: false,
            index_wait: DEFAULT_INDEX_WAIT,
            search_lookback: DEFAULT_SEARCH_LOOKBACK,
            separators: Separators::default(),
        }
    }
}

impl Config {
    /// Parser options derived from this config
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            separators: self.separators.clone(),
            append_byline: self.append_byline,
        }
    }
}
