//! Verdict scoring.
//!
//! A pure function from [`SignalBundle`] to [`Verdict`]: walk the ordered
//! rule table in `rules.rs`, let the first matching rule decide, then
//! normalize the reason list to `MIN_REASONS..=MAX_REASONS` entries.

#[path = "score/rules.rs"]
mod rules;
#[cfg(test)]
#[path = "score/tests.rs"]
mod tests;

use crate::{Decision, SignalBundle, Verdict};
use rules::{RULES, ScoreRule};

/// Minimum years at or above which a posting is no longer entry-level.
pub const SENIOR_MIN_YEARS: u32 = 3;
/// Highest minimum-years bound still accepted alongside entry signals.
pub const ENTRY_MAX_YEARS: u32 = 2;
pub const MIN_REASONS: usize = 2;
pub const MAX_REASONS: usize = 5;
/// Padding used when a rule produced fewer than `MIN_REASONS` reasons.
pub const FALLBACK_REASON: &str = "Conservative default: treat as non-entry-level unless clearly signaled.";

/// Score `signals` and return the verdict of the first applicable rule.
pub fn score(signals: &SignalBundle) -> Verdict {
    score_traced(signals).0
}

/// Like [`score`], also returning the names of every rule evaluated, the
/// deciding one last.
pub(crate) fn score_traced(signals: &SignalBundle) -> (Verdict, Vec<&'static str>) {
    let mut evaluated = Vec::new();

    for rule in RULES {
        evaluated.push(rule.name);
        if (rule.applies)(signals) {
            let verdict = decide(rule, signals);
            tracing::debug!(rule = rule.name, decision = %verdict.decision, reasons = verdict.reasons.len(), "verdict");
            return (verdict, evaluated);
        }
        tracing::trace!(rule = rule.name, "rule skipped");
    }

    // The table ends with a catch-all, so this is only reached if it is edited away.
    let verdict = Verdict { decision: Decision::NoGo, rule: "none", reasons: cap_reasons(Vec::new()) };
    (verdict, evaluated)
}

fn decide(rule: &ScoreRule, signals: &SignalBundle) -> Verdict {
    Verdict { decision: rule.decision, rule: rule.name, reasons: cap_reasons((rule.reasons)(signals)) }
}

/// Pad to `MIN_REASONS` with the fallback reason and truncate to `MAX_REASONS`.
pub(crate) fn cap_reasons(mut reasons: Vec<String>) -> Vec<String> {
    while reasons.len() < MIN_REASONS {
        reasons.push(FALLBACK_REASON.to_string());
    }
    reasons.truncate(MAX_REASONS);
    reasons
}
