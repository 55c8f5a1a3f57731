//! Signal extraction.
//!
//! Turns raw posting text into a [`SignalBundle`]. Every concern is a single
//! scan over the text with patterns owned by a [`Vocabulary`]:
//!
//! ```text
//! text ──┬─ skills::detect     (matcher.rs guards)  -> sorted canonical names
//!        ├─ years::detect      (range, plus, plain) -> min/max + verbatim phrases
//!        └─ keywords::collect  (seniority, entry)   -> deduplicated phrases
//! ```
//!
//! Empty text short-circuits to an empty bundle without evaluating any
//! pattern.

#[path = "extract/keywords.rs"]
mod keywords;
#[path = "extract/matcher.rs"]
mod matcher;
#[path = "extract/skills.rs"]
mod skills;
#[path = "extract/years.rs"]
mod years;

pub(crate) use matcher::AliasMatcher;

use crate::SignalBundle;
use crate::vocabulary::Vocabulary;

/// Extractor bound to one vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'v> {
    vocab: &'v Vocabulary,
}

impl Default for Extractor<'static> {
    fn default() -> Self {
        Extractor::new(Vocabulary::builtin())
    }
}

impl<'v> Extractor<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Extractor { vocab }
    }

    /// Sorted canonical names of every detected skill.
    pub fn skills(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        skills::detect(self.vocab, text)
    }

    /// Years and keyword signals. `skills` is left empty.
    pub fn signals(&self, text: &str) -> SignalBundle {
        if text.is_empty() {
            return SignalBundle::default();
        }

        let years = years::detect(text);
        let bundle = SignalBundle {
            skills: Vec::new(),
            min_years: years.min,
            max_years: years.max,
            year_matches: years.matches,
            senior_signals: keywords::collect(self.vocab.seniority(), text),
            entry_signals: keywords::collect(self.vocab.entry(), text),
        };

        tracing::debug!(
            min_years = ?bundle.min_years,
            max_years = ?bundle.max_years,
            year_matches = bundle.year_matches.len(),
            senior = bundle.senior_signals.len(),
            entry = bundle.entry_signals.len(),
            "extracted signals"
        );
        bundle
    }

    /// Skills and signals together.
    pub fn extract(&self, text: &str) -> SignalBundle {
        let skills = self.skills(text);
        tracing::debug!(count = skills.len(), "extracted skills");
        SignalBundle { skills, ..self.signals(text) }
    }
}
