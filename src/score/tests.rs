use super::{FALLBACK_REASON, MAX_REASONS, MIN_REASONS, cap_reasons, score, score_traced};
use crate::{Decision, SignalBundle};

fn bundle(min: Option<u32>, senior: &[&str], entry: &[&str]) -> SignalBundle {
    SignalBundle {
        min_years: min,
        max_years: min,
        senior_signals: senior.iter().map(|s| s.to_string()).collect(),
        entry_signals: entry.iter().map(|s| s.to_string()).collect(),
        ..SignalBundle::default()
    }
}

#[test]
fn seniority_wins_over_everything() {
    let v = score(&bundle(Some(1), &["Senior", "Lead", "Staff"], &["Junior"]));
    assert_eq!(v.decision, Decision::NoGo);
    assert_eq!(v.rule, "seniority");
    assert_eq!(v.reasons, vec!["Seniority signal detected: Senior, Lead.", "Minimum years required: 1."]);

    let v = score(&bundle(None, &["Principal"], &[]));
    assert_eq!(v.reasons[1], "Senior roles are not entry-level by default.");
}

#[test]
fn experience_threshold() {
    let v = score(&bundle(Some(3), &[], &[]));
    assert_eq!((v.decision, v.rule), (Decision::NoGo, "experience-threshold"));
    assert_eq!(v.reasons[0], "Experience requirement exceeds entry-level threshold (>=3 years).");
    assert_eq!(v.reasons[1], "No strong entry-level signals to offset experience.");

    let v = score(&bundle(Some(7), &[], &["Graduate"]));
    assert_eq!(v.reasons[1], "Entry-level signals present, but years requirement is too high.");
}

#[test]
fn entry_level_goes() {
    let v = score(&bundle(None, &[], &["Junior", "intern", "trainee"]));
    assert_eq!((v.decision, v.rule), (Decision::Go, "entry-level"));
    assert_eq!(v.reasons, vec!["Entry-level signal detected: Junior, intern.", "No explicit years requirement found."]);

    let v = score(&bundle(Some(2), &[], &["Junior"]));
    assert_eq!(v.decision, Decision::Go);
    assert_eq!(v.reasons[1], "Years requirement within entry-level range: 2.");
}

#[test]
fn default_is_conservative() {
    let v = score(&SignalBundle::default());
    assert_eq!((v.decision, v.rule), (Decision::NoGo, "default"));
    assert_eq!(
        v.reasons,
        vec!["No explicit years requirement found.", "No entry-level signals detected; conservative default applies."]
    );

    let v = score(&bundle(Some(1), &[], &[]));
    assert_eq!(v.reasons[0], "Minimum years required: 1.");
}

#[test]
fn trace_lists_rules_up_to_the_decider() {
    let (_, evaluated) = score_traced(&bundle(None, &[], &["Junior"]));
    assert_eq!(evaluated, vec!["seniority", "experience-threshold", "entry-level"]);

    let (_, evaluated) = score_traced(&bundle(None, &["Senior"], &[]));
    assert_eq!(evaluated, vec!["seniority"]);
}

#[test]
fn reason_count_is_always_bounded() {
    let mins = [None, Some(0), Some(2), Some(3), Some(u32::MAX)];
    let seniors: [&[&str]; 3] = [&[], &["Senior"], &["Senior", "Lead", "Director"]];
    let entries: [&[&str]; 3] = [&[], &["Junior"], &["Junior", "Intern", "Trainee"]];

    for min in mins {
        for senior in seniors {
            for entry in entries {
                let v = score(&bundle(min, senior, entry));
                assert!((MIN_REASONS..=MAX_REASONS).contains(&v.reasons.len()), "{v:?}");
            }
        }
    }
}

#[test]
fn cap_reasons_pads_and_truncates() {
    assert_eq!(cap_reasons(Vec::new()), vec![FALLBACK_REASON, FALLBACK_REASON]);
    assert_eq!(cap_reasons(vec!["a".into()]), vec!["a", FALLBACK_REASON]);
    let many: Vec<String> = (0..8).map(|i| i.to_string()).collect();
    assert_eq!(cap_reasons(many), vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn scoring_is_deterministic() {
    let b = bundle(Some(2), &[], &["Apprentice"]);
    assert_eq!(score(&b), score(&b));
}
