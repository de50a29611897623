//! Dry-run preview rendering
//!
//! The preview uses the input grammar itself, so it can be fed back to the
//! parser.

use crate::parse::Separators;
use crate::types::{IssueRecord, Target};

/// Render the target and records as an input document
pub fn render_preview(target: &Target, records: &[IssueRecord], separators: &Separators) -> String {
    let mut segments = Vec::with_capacity(records.len() + 1);
    segments.push(format!("{}{}{}", target.owner, separators.target, target.repo));
    segments.extend(records.iter().map(|r| render_record(r, separators)));
    segments.join(&separators.segment)
}

/// Render one record as an issue segment
///
/// Trailing empty metadata fields are left out.
pub fn render_record(record: &IssueRecord, separators: &Separators) -> String {
    let join = |list: &Option<Vec<String>>| {
        list.as_ref()
            .map(|items| items.join(&separators.list))
            .unwrap_or_default()
    };

    let mut metadata = vec![record.title.clone(), join(&record.labels), join(&record.assignees)];
    while metadata.last().is_some_and(String::is_empty) {
        metadata.pop();
    }

    let metadata_sep = format!(" {} ", separators.metadata);
    let mut out = metadata.join(&metadata_sep);
    if let Some(body) = &record.body {
        out.push('\n');
        out.push_str(body);
    }
    out
}
