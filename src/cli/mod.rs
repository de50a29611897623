//! CLI commands
//!
//! Command implementations for the `ghissue` binary.

mod create;
mod progress;

pub use create::{CreateOptions, run_create};

use anstream::eprintln;

/// Print an error and its cause chain to stderr
pub fn report_error(err: &anyhow::Error) {
    eprintln!("{}: {err:#}", progress::error_prefix());
}
