//! Issue segment parsing

use crate::config::BYLINE;
use crate::error::{ParseError, Result};
use crate::parse::{ParseOptions, split_fields, split_list};
use crate::types::IssueRecord;

/// Parse one issue segment
///
/// The first line is `title | labels | assignees`; the rest is the body.
/// Metadata fields past the third are ignored. `index` is the 1-based
/// position of the segment, used in error messages.
pub fn parse_issue(segment: &str, index: usize, options: &ParseOptions) -> Result<IssueRecord> {
    let segment = segment.trim();
    let (metadata, body) = segment.split_once('\n').unwrap_or((segment, ""));

    let mut fields = split_fields(metadata, &options.separators.metadata).into_iter();
    let title = fields.next().unwrap_or_default();
    let labels = fields.next().unwrap_or_default();
    let assignees = fields.next().unwrap_or_default();

    if title.is_empty() {
        return Err(ParseError::MissingTitle { index }.into());
    }

    let list_sep = &options.separators.list;
    Ok(IssueRecord {
        title,
        body: build_body(body, options.append_byline),
        labels: split_list(&labels, list_sep),
        assignees: split_list(&assignees, list_sep),
    })
}

fn build_body(raw: &str, append_byline: bool) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if append_byline {
        Some(format!("{trimmed}\n\n\n{BYLINE}"))
    } else {
        Some(trimmed.to_string())
    }
}
