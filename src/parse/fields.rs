//! Separator splitting shared by every level of the grammar

/// Split `input` on `sep`, trimming each field
///
/// An empty input yields no fields rather than a single empty one.
pub fn split_fields(input: &str, sep: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input
        .split(sep)
        .map(|field| field.trim().to_string())
        .collect()
}

/// Split a comma-style list field
///
/// Blank items are dropped. Returns `None` when nothing is left, so an empty
/// field means "absent" rather than "empty list".
pub fn split_list(input: &str, sep: &str) -> Option<Vec<String>> {
    let items: Vec<String> = split_fields(input, sep)
        .into_iter()
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() { None } else { Some(items) }
}
