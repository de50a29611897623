//! Authentication for GitHub
//!
//! Supports an explicit token, environment variables and the `gh` CLI.

mod github;

pub use github::{GitHubAuthConfig, get_github_auth, read_token_file, resolve_token};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed in by the caller (flag or token file)
    Explicit,
    /// Token from environment variable
    EnvVar,
    /// Token from the `gh` CLI
    Cli,
}
