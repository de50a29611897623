//! Opening URLs in the user's browser

use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Opens a URL in a browser
#[async_trait]
pub trait BrowserOpener: Send + Sync {
    /// Open `url`, failing if the OS refuses
    async fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default handler
/// (`open` on macOS, `start` on Windows, `xdg-open` elsewhere)
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

#[async_trait]
impl BrowserOpener for SystemBrowser {
    async fn open(&self, url: &str) -> Result<()> {
        debug!("Opening {url}");

        let output = Self::command(url)
            .output()
            .await
            .map_err(|e| Error::BrowserOpen(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::BrowserOpen(format!(
                "{} ({})",
                stderr.trim(),
                output.status
            )))
        }
    }
}
