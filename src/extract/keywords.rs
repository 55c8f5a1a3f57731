//! Seniority / entry-level keyword collection.

use super::AliasMatcher;
use std::collections::HashSet;

/// Keyword-major, text-ordered hits, deduplicated by lowercase form.
///
/// The first casing seen for a phrase is the one reported.
pub(crate) fn collect(keywords: &[AliasMatcher], text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for keyword in keywords {
        for span in keyword.find_iter(text) {
            let value = &text[span.start..span.end];
            if seen.insert(value.to_lowercase()) {
                out.push(value.to_string());
            }
        }
    }

    out
}
