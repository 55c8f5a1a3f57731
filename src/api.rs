use crate::extract::Extractor;
use crate::score::score_traced;
use crate::vocabulary::Vocabulary;
use crate::{SignalBundle, SignalSet, Verdict};
use std::time::{Duration, Instant};

/// Skills, years and keyword signals found in `text`, using the built-in vocabulary.
///
/// # Example
/// ```
/// let signals = jobscreen::extract("Junior Rust developer, 0-2 years");
/// assert_eq!(signals.skills, vec!["Rust"]);
/// assert_eq!(signals.min_years, Some(0));
/// ```
pub fn extract(text: &str) -> SignalBundle {
    Extractor::default().extract(text)
}

/// Sorted canonical skill names found in `text`.
pub fn extract_skills(text: &str) -> Vec<String> {
    Extractor::default().skills(text)
}

/// Years and keyword signals found in `text`; `skills` is left empty.
pub fn extract_signals(text: &str) -> SignalBundle {
    Extractor::default().signals(text)
}

/// Score an extracted bundle.
pub fn score(signals: &SignalBundle) -> Verdict {
    crate::score::score(signals)
}

/// Result of [`analyze`] and [`analyze_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub signals: SignalBundle,
    pub verdict: Verdict,
}

/// One scorer rule as seen by the explain trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTrace {
    pub name: &'static str,
    /// Whether this rule decided the verdict.
    pub decided: bool,
}

/// Extra details returned by [`analyze_verbose_with`].
///
/// Meant for the CLI's `--explain` output; the plain [`analyze`] path does
/// not collect it.
#[derive(Debug, Clone)]
pub struct AnalysisDetails {
    pub total: Duration,
    pub extract: Duration,
    pub score: Duration,
    /// Signal families present in the bundle.
    pub present: SignalSet,
    /// Rules evaluated in order; the last one decided.
    pub rules: Vec<RuleTrace>,
}

/// Result of [`analyze_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnalysisVerbose {
    pub signals: SignalBundle,
    pub verdict: Verdict,
    pub details: AnalysisDetails,
}

/// Extract then score `text` with the built-in vocabulary.
///
/// # Example
/// ```
/// use jobscreen::{Decision, analyze};
///
/// let out = analyze("Senior Engineer, 2 years");
/// assert_eq!(out.verdict.decision, Decision::NoGo);
/// ```
pub fn analyze(text: &str) -> Analysis {
    analyze_with(text, Vocabulary::builtin())
}

/// Extract then score `text` with a caller-supplied vocabulary.
pub fn analyze_with(text: &str, vocab: &Vocabulary) -> Analysis {
    let signals = Extractor::new(vocab).extract(text);
    let verdict = crate::score::score(&signals);
    Analysis { signals, verdict }
}

/// Like [`analyze_with`], also timing each stage and recording the rules evaluated.
pub fn analyze_verbose_with(text: &str, vocab: &Vocabulary) -> AnalysisVerbose {
    let start = Instant::now();
    let signals = Extractor::new(vocab).extract(text);
    let extract = start.elapsed();

    let scoring = Instant::now();
    let (verdict, evaluated) = score_traced(&signals);
    let score = scoring.elapsed();

    let last = evaluated.len().saturating_sub(1);
    let rules = evaluated.into_iter().enumerate().map(|(i, name)| RuleTrace { name, decided: i == last }).collect();

    let details = AnalysisDetails { total: start.elapsed(), extract, score, present: signals.present(), rules };
    AnalysisVerbose { signals, verdict, details }
}
