//! Skill detection: existence only, one hit per canonical name is enough.

use crate::vocabulary::Vocabulary;
use std::collections::BTreeSet;

/// Canonical names of every skill with at least one matching alias, sorted.
pub(crate) fn detect(vocab: &Vocabulary, text: &str) -> Vec<String> {
    let mut found: BTreeSet<&str> = BTreeSet::new();

    for skill in vocab.skills() {
        if let Some(m) = skill.matchers.iter().find(|m| m.is_match(text)) {
            tracing::trace!(skill = %skill.canonical, alias = m.alias(), "skill alias matched");
            found.insert(&skill.canonical);
        }
    }

    found.into_iter().map(str::to_string).collect()
}
