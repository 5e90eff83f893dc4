//! Email mention parser.

use std::collections::HashSet;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static EMAIL_MENTION_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

/// Iterate over every email address in `text`, repeats included.
pub fn mentions(text: &str) -> impl Iterator<Item = &str> {
    EMAIL_MENTION_RE.find_iter(text).map(|m| m.as_str())
}

/// Extract the distinct email addresses mentioned in `text`.
///
/// Addresses are returned verbatim, in order of first appearance.
#[must_use]
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    mentions(text)
        .filter(|m| seen.insert(*m))
        .map(ToString::to_string)
        .collect()
}
