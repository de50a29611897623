//! ghissue - bulk-create GitHub issues
//!
//! CLI binary for creating GitHub issues from a plain-text file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

const CREATE_LONG_ABOUT: &str = "\
Create GitHub issues from a file.

Prints the created issue numbers to stdout, comma-separated.

File format:

repo_owner/repo_name
---
Issue title 0 | labelX,labelY | assigneeA,assigneeB
Body can span
multiple lines.
A line holding only three hyphens is the divider.
---
Issue title 1 | labelZ | assigneeC
Labels, assignees and body are optional
---
Smallest possible issue (just the title)
";

#[derive(Parser)]
#[command(name = "ghissue")]
#[command(about = "Bulk-upload GitHub issues")]
#[command(after_help = "Example: GITHUB_TOKEN='...' ghissue create ./issues.txt")]
#[command(version)]
struct Cli {
    /// GitHub personal access token (defaults to GITHUB_TOKEN, GH_TOKEN, then `gh auth token`)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Read the GitHub token from a file
    #[arg(long, global = true, conflicts_with = "token")]
    token_file: Option<PathBuf>,

    /// GitHub Enterprise hostname
    #[arg(long, global = true, env = "GH_HOST")]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create issues from file
    #[command(long_about = CREATE_LONG_ABOUT)]
    Create {
        /// Issues file (`-` for stdin)
        file: PathBuf,

        /// Don't actually create the issues, print them instead
        #[arg(long, alias = "dryrun")]
        dry_run: bool,

        /// Print more info about the created issues
        #[arg(long, alias = "verbose")]
        info: bool,

        /// Open a browser to view the new issues
        #[arg(long)]
        open: bool,

        /// Append an attribution byline to every issue body
        #[arg(long)]
        byline: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        cli::report_error(&err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            file,
            dry_run,
            info,
            open,
            byline,
        } => {
            let options = cli::CreateOptions {
                file,
                token: cli.token,
                token_file: cli.token_file,
                host: cli.host,
                dry_run,
                verbose: info,
                open_after: open,
                append_byline: byline,
            };
            cli::run_create(options).await?;
        }
    }

    Ok(())
}
