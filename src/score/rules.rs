//! The verdict rule table.
//!
//! Rules are evaluated top to bottom and the first one whose predicate holds
//! decides the verdict and builds the reasons. Nothing accumulates across
//! rules. The last rule always applies.

use super::{ENTRY_MAX_YEARS, SENIOR_MIN_YEARS};
use crate::{Decision, SignalBundle};

/// A (predicate, reason-builder) pair.
pub(crate) struct ScoreRule {
    pub name: &'static str,
    pub decision: Decision,
    pub applies: fn(&SignalBundle) -> bool,
    pub reasons: fn(&SignalBundle) -> Vec<String>,
}

impl std::fmt::Debug for ScoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreRule")
            .field("name", &self.name)
            .field("decision", &self.decision)
            .field("applies", &"<function>")
            .field("reasons", &"<function>")
            .finish()
    }
}

pub(crate) static RULES: &[ScoreRule] = &[
    ScoreRule { name: "seniority", decision: Decision::NoGo, applies: has_seniority, reasons: seniority_reasons },
    ScoreRule {
        name: "experience-threshold",
        decision: Decision::NoGo,
        applies: exceeds_threshold,
        reasons: threshold_reasons,
    },
    ScoreRule { name: "entry-level", decision: Decision::Go, applies: is_entry_level, reasons: entry_reasons },
    ScoreRule { name: "default", decision: Decision::NoGo, applies: always, reasons: default_reasons },
];

/// First two signals, comma-joined.
fn head(signals: &[String]) -> String {
    signals.iter().take(2).map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn has_seniority(s: &SignalBundle) -> bool {
    !s.senior_signals.is_empty()
}

fn seniority_reasons(s: &SignalBundle) -> Vec<String> {
    vec![
        format!("Seniority signal detected: {}.", head(&s.senior_signals)),
        match s.min_years {
            Some(n) => format!("Minimum years required: {n}."),
            None => "Senior roles are not entry-level by default.".to_string(),
        },
    ]
}

fn exceeds_threshold(s: &SignalBundle) -> bool {
    s.min_years.is_some_and(|n| n >= SENIOR_MIN_YEARS)
}

fn threshold_reasons(s: &SignalBundle) -> Vec<String> {
    vec![
        format!("Experience requirement exceeds entry-level threshold (>={SENIOR_MIN_YEARS} years)."),
        if s.entry_signals.is_empty() {
            "No strong entry-level signals to offset experience.".to_string()
        } else {
            "Entry-level signals present, but years requirement is too high.".to_string()
        },
    ]
}

fn is_entry_level(s: &SignalBundle) -> bool {
    !s.entry_signals.is_empty() && s.min_years.is_none_or(|n| n <= ENTRY_MAX_YEARS)
}

fn entry_reasons(s: &SignalBundle) -> Vec<String> {
    vec![
        format!("Entry-level signal detected: {}.", head(&s.entry_signals)),
        match s.min_years {
            Some(n) => format!("Years requirement within entry-level range: {n}."),
            None => "No explicit years requirement found.".to_string(),
        },
    ]
}

fn always(_: &SignalBundle) -> bool {
    true
}

fn default_reasons(s: &SignalBundle) -> Vec<String> {
    vec![
        match s.min_years {
            Some(n) => format!("Minimum years required: {n}."),
            None => "No explicit years requirement found.".to_string(),
        },
        if s.entry_signals.is_empty() {
            "No entry-level signals detected; conservative default applies.".to_string()
        } else {
            "Entry-level signals are insufficient to be decisive.".to_string()
        },
    ]
}
