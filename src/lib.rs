#[macro_use]
mod macros;
mod api;
mod extract;
pub mod logging;
pub mod report;
mod score;
mod vocabulary;

pub use api::{
    Analysis, AnalysisDetails, AnalysisVerbose, RuleTrace, analyze, analyze_verbose_with, analyze_with, extract,
    extract_signals, extract_skills, score,
};
pub use extract::Extractor;
pub use score::{ENTRY_MAX_YEARS, FALLBACK_REASON, MAX_REASONS, MIN_REASONS, SENIOR_MIN_YEARS};
pub use vocabulary::{ENTRY_KEYWORDS, SENIORITY_KEYWORDS, SKILL_ALIASES, Vocabulary, VocabularyError};

use std::fmt;

// --- Signals ----------------------------------------------------------------

/// Everything the extractor found in one posting.
///
/// `skills` is sorted and deduplicated. `min_years <= max_years` whenever
/// both are set; `max_years` is never set without `min_years`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalBundle {
    /// Canonical skill names, lexicographically sorted.
    pub skills: Vec<String>,
    pub min_years: Option<u32>,
    pub max_years: Option<u32>,
    /// Verbatim text of every accepted years phrase (range, then plus, then plain).
    pub year_matches: Vec<String>,
    /// Seniority keywords as they first appeared, deduplicated case-insensitively.
    pub senior_signals: Vec<String>,
    /// Entry-level keywords as they first appeared, deduplicated case-insensitively.
    pub entry_signals: Vec<String>,
}

bitflags::bitflags! {
    /// Signal families present in a [`SignalBundle`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SignalSet: u8 {
        const SKILLS    = 1 << 0;
        const YEARS     = 1 << 1;
        const SENIORITY = 1 << 2;
        const ENTRY     = 1 << 3;
    }
}

impl SignalBundle {
    /// Which signal families this bundle carries.
    pub fn present(&self) -> SignalSet {
        let mut set = SignalSet::empty();
        if !self.skills.is_empty() {
            set |= SignalSet::SKILLS;
        }
        if self.min_years.is_some() || self.max_years.is_some() {
            set |= SignalSet::YEARS;
        }
        if !self.senior_signals.is_empty() {
            set |= SignalSet::SENIORITY;
        }
        if !self.entry_signals.is_empty() {
            set |= SignalSet::ENTRY;
        }
        set
    }
}

// --- Verdict ----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Go,
    NoGo,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Go => "GO",
            Decision::NoGo => "NO-GO",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scorer output: the decision, the rule that made it and 2..=5 reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    /// Name of the deciding rule, e.g. `"seniority"`.
    pub rule: &'static str,
    pub reasons: Vec<String>,
}

// --- Spans ------------------------------------------------------------------

/// Half-open byte range into the analysed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Half-open interval intersection.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Span::new(m.start(), m.end())
    }
}
