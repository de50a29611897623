//! Input text parser
//!
//! Turns a document like
//!
//! ```text
//! owner/repo
//! ---
//! Issue title | label0,label1 | assignee0
//! Body lines...
//! ---
//! Title only
//! ```
//!
//! into a [`ParsedInput`]. The first segment names the target repository; each
//! following segment is one issue. Cosmetic problems (extra whitespace, blank
//! trailing segments, extra metadata fields) are tolerated. A missing target or
//! title is not.

mod fields;
mod issue;

pub use fields::{split_fields, split_list};
pub use issue::parse_issue;

use crate::error::{Error, ParseError, Result};
use crate::types::{ParsedInput, Target};
use tracing::debug;

/// Separators of the input grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    /// Between the target and each issue (a line holding only `---`)
    pub segment: String,
    /// Between title, labels and assignees on an issue's first line
    pub metadata: String,
    /// Between items of the labels and assignees lists
    pub list: String,
    /// Between owner and repo
    pub target: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            segment: "\n---\n".to_string(),
            metadata: "|".to_string(),
            list: ",".to_string(),
            target: "/".to_string(),
        }
    }
}

/// Options controlling how issues are built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Input separators
    pub separators: Separators,
    /// Append the attribution byline to non-empty bodies
    pub append_byline: bool,
}

/// Strip leading whitespace from raw input
///
/// Trailing whitespace is left for the segment parser, which trims each
/// segment on its own.
pub fn trim_input(input: &str) -> &str {
    input.trim_start()
}

/// Parse an input document into its target and issue records
///
/// Fails without partial results: either every non-blank issue segment parses
/// or nothing is returned.
pub fn parse(input: &str, options: &ParseOptions) -> Result<ParsedInput> {
    let segments = split_fields(input, &options.separators.segment);

    let Some((target_segment, issue_segments)) = segments.split_first() else {
        return Err(ParseError::MissingSegments.into());
    };
    if issue_segments.is_empty() {
        return Err(ParseError::MissingSegments.into());
    }
    if target_segment.is_empty() {
        return Err(ParseError::MissingTarget.into());
    }

    let target = parse_target(target_segment, &options.separators)?;

    let mut records = Vec::with_capacity(issue_segments.len());
    for (idx, segment) in issue_segments.iter().enumerate() {
        // Blank segments come from trailing separators
        if segment.is_empty() {
            continue;
        }
        records.push(parse_issue(segment, idx + 1, options)?);
    }

    if records.is_empty() {
        return Err(Error::NoIssues);
    }

    debug!("Parsed {} issue(s) for {target}", records.len());

    Ok(ParsedInput { target, records })
}

/// Parse the `owner/repo` target segment
pub fn parse_target(segment: &str, separators: &Separators) -> Result<Target> {
    let parts = split_fields(segment, &separators.target);
    let [owner, repo] = parts.as_slice() else {
        return Err(ParseError::InvalidTarget(segment.to_string()).into());
    };

    if owner.is_empty() {
        return Err(ParseError::EmptyOwner.into());
    }
    if repo.is_empty() {
        return Err(ParseError::EmptyRepo.into());
    }

    Ok(Target {
        owner: owner.clone(),
        repo: repo.clone(),
    })
}
