//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::env;
use std::path::Path;
use tokio::process::Command;

/// Environment variables checked for a token, in order
const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Get GitHub authentication
///
/// Priority:
/// 1. `explicit` token (from `--token` or `--token-file`)
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
/// 4. gh CLI (`gh auth token`)
pub async fn get_github_auth(explicit: Option<&str>) -> Result<GitHubAuthConfig> {
    if let Some(config) = resolve_token(explicit, |name| env::var(name).ok()) {
        return Ok(config);
    }

    if let Some(token) = get_gh_cli_token().await {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "Must provide a GitHub personal access token. Pass --token, set GITHUB_TOKEN, or run `gh auth login`".to_string(),
    ))
}

/// Resolve a token from an explicit value or the environment
///
/// Blank values are skipped. Tokens are trimmed.
pub fn resolve_token(
    explicit: Option<&str>,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> Option<GitHubAuthConfig> {
    if let Some(token) = non_blank(explicit) {
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::Explicit,
        });
    }

    TOKEN_ENV_VARS.iter().find_map(|name| {
        non_blank(lookup_env(name).as_deref()).map(|token| GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        })
    })
}

/// Read a token from a file, trimming surrounding whitespace
pub fn read_token_file(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::Auth(format!("could not read from {}: {e}", path.display())))?;
    non_blank(Some(contents.as_str()))
        .ok_or_else(|| Error::Auth(format!("token file {} is empty", path.display())))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

async fn get_gh_cli_token() -> Option<String> {
    // Check gh is available
    Command::new("gh")
        .arg("--version")
        .output()
        .await
        .ok()?;

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    non_blank(Some(String::from_utf8_lossy(&output.stdout).as_ref()))
}
