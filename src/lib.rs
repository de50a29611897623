//! ghissue - bulk-create GitHub issues from plain text
//!
//! Parses a small text format describing a target repository and one or more
//! issues, then creates them one at a time through an [`platform::IssueService`].

pub mod auth;
pub mod browser;
pub mod config;
pub mod create;
pub mod error;
pub mod parse;
pub mod platform;
pub mod types;
