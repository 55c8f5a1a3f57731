//! Plain-text report rendering.
//!
//! ```text
//! Skills detected: <skills, or None>
//! Experience signals: <experience line, or None>
//! VERDICT: <GO|NO-GO>
//! Reasons:
//! - <reason>
//! ```

use crate::{SignalBundle, SignalSet, Verdict};

/// Years bound plus seniority/entry phrases, `" | "`-separated, or `"None"`.
pub fn format_experience(signals: &SignalBundle) -> String {
    if !signals.present().intersects(SignalSet::YEARS | SignalSet::SENIORITY | SignalSet::ENTRY) {
        return "None".to_string();
    }

    let mut parts = Vec::new();
    if let Some(min) = signals.min_years {
        parts.push(match signals.max_years {
            Some(max) if max != min => format!("Years required: {min}-{max}"),
            Some(_) => format!("Years required: {min}"),
            None => format!("Years required: {min}+"),
        });
    }
    if !signals.senior_signals.is_empty() {
        parts.push(format!("Seniority signals: {}", signals.senior_signals.join("; ")));
    }
    if !signals.entry_signals.is_empty() {
        parts.push(format!("Entry-level signals: {}", signals.entry_signals.join("; ")));
    }

    if parts.is_empty() { "None".to_string() } else { parts.join(" | ") }
}

/// The full multi-line report, without a trailing newline.
pub fn format_report(signals: &SignalBundle, verdict: &Verdict) -> String {
    let skills = if signals.skills.is_empty() { "None".to_string() } else { signals.skills.join(", ") };

    let mut lines = vec![
        format!("Skills detected: {skills}"),
        format!("Experience signals: {}", format_experience(signals)),
        format!("VERDICT: {}", verdict.decision),
        "Reasons:".to_string(),
    ];
    lines.extend(verdict.reasons.iter().map(|r| format!("- {r}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decision, analyze};

    fn years(min: Option<u32>, max: Option<u32>) -> SignalBundle {
        SignalBundle { min_years: min, max_years: max, ..SignalBundle::default() }
    }

    #[test]
    fn experience_line_shapes() {
        let cases = vec![
            ("Years required: 3-5", years(Some(3), Some(5))),
            ("Years required: 2", years(Some(2), Some(2))),
            ("Years required: 5+", years(Some(5), None)),
            ("None", years(None, None)),
        ];
        for (expected, bundle) in cases {
            assert_eq!(format_experience(&bundle), expected);
        }
    }

    #[test]
    fn experience_line_segments() {
        let bundle = SignalBundle {
            min_years: Some(1),
            senior_signals: vec!["Lead".into()],
            entry_signals: vec!["Junior".into(), "Intern".into()],
            ..SignalBundle::default()
        };
        assert_eq!(
            format_experience(&bundle),
            "Years required: 1+ | Seniority signals: Lead | Entry-level signals: Junior; Intern"
        );
    }

    #[test]
    fn skills_alone_do_not_make_an_experience_line() {
        let bundle = SignalBundle { skills: vec!["Rust".into()], ..SignalBundle::default() };
        assert_eq!(format_experience(&bundle), "None");
    }

    #[test]
    fn full_report() {
        let out = analyze("Junior Python Developer. 0-1 years. Git basics.");
        assert_eq!(out.verdict.decision, Decision::Go);
        let expected = "\
Skills detected: Git, Python
Experience signals: Years required: 0-1 | Entry-level signals: Junior
VERDICT: GO
Reasons:
- Entry-level signal detected: Junior.
- Years requirement within entry-level range: 0.";
        assert_eq!(format_report(&out.signals, &out.verdict), expected);
    }

    #[test]
    fn empty_report() {
        let out = analyze("");
        let report = format_report(&out.signals, &out.verdict);
        assert!(report.starts_with("Skills detected: None\nExperience signals: None\nVERDICT: NO-GO\nReasons:\n- "));
    }
}
