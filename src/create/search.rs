//! Search URL for freshly created issues

use crate::types::Target;
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use std::time::Duration;

/// Build an issue search URL covering issues created in the last `lookback`
///
/// The query is form-urlencoded the way GitHub's search box does it
/// (spaces become `+`).
pub fn search_url(web_base: &str, target: &Target, now: DateTime<Utc>, lookback: Duration) -> String {
    let lookback = TimeDelta::from_std(lookback).unwrap_or_else(|_| TimeDelta::zero());
    let since = (now - lookback).to_rfc3339_opts(SecondsFormat::Secs, true);

    let query = format!("is:issue is:open sort:updated-desc created:>{since}");
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();

    format!(
        "{}/{}/{}/issues?q={encoded}",
        web_base.trim_end_matches('/'),
        target.owner,
        target.repo
    )
}
