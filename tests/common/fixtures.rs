//! Test data factories for ghissue types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use ghissue::config::Config;
use ghissue::types::{IssueRecord, Target};
use std::time::Duration;

/// Three issues: full metadata with body, labels only, title only
pub const THREE_ISSUES: &str = "\
acme/widgets
---
Fix bug | bug,urgent | alice
Steps to reproduce
Including some triple hyphens --- mid-line
--- and at line start
--
And only two hyphens on their own line
---
Second issue | docs
Short body
---
Add feature
";

/// Target of [`THREE_ISSUES`]
pub fn acme_target() -> Target {
    Target {
        owner: "acme".to_string(),
        repo: "widgets".to_string(),
    }
}

/// Records of [`THREE_ISSUES`]
pub fn three_records() -> Vec<IssueRecord> {
    vec![
        IssueRecord {
            title: "Fix bug".to_string(),
            body: Some(
                "Steps to reproduce\nIncluding some triple hyphens --- mid-line\n--- and at line start\n--\nAnd only two hyphens on their own line"
                    .to_string(),
            ),
            labels: Some(vec!["bug".to_string(), "urgent".to_string()]),
            assignees: Some(vec!["alice".to_string()]),
        },
        IssueRecord {
            title: "Second issue".to_string(),
            body: Some("Short body".to_string()),
            labels: Some(vec!["docs".to_string()]),
            assignees: None,
        },
        IssueRecord::titled("Add feature"),
    ]
}

/// Live-mode config with no waiting
pub fn live_config() -> Config {
    Config {
        index_wait: Duration::ZERO,
        ..Config::default()
    }
}

/// Dry-run config
pub fn dry_run_config() -> Config {
    Config {
        dry_run: true,
        ..live_config()
    }
}
