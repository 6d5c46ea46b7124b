//! Candidate URL extraction: one regex application per provider page.

use std::collections::BTreeSet;

use regex::Regex;

/// Find every non-overlapping match of `pattern` in `page`, collapsed to a
/// set. Duplicates on the page yield one candidate; no match yields an empty
/// set. Purely computational.
pub fn extract_candidates(pattern: &Regex, page: &str) -> BTreeSet<String> {
    pattern
        .find_iter(page)
        .map(|m| m.as_str().to_string())
        .collect()
}
