use jobscreen::{AnalysisVerbose, Decision, SignalSet};
use std::fmt::Write;

/// What a piece of the trace means; each maps to one SGR code.
#[derive(Clone, Copy)]
enum Tone {
    Heading,
    Present,
    Go,
    NoGo,
    Phrase,
    Rule,
    Quiet,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Heading => "90",
            Tone::Present | Tone::Go => "32",
            Tone::NoGo => "1;31",
            Tone::Phrase => "33",
            Tone::Rule => "34",
            Tone::Quiet => "2",
        }
    }
}

/// Wraps text in ANSI escapes when color is on.
struct Styler {
    color: bool,
}

impl Styler {
    fn tone(&self, text: impl AsRef<str>, tone: Tone) -> String {
        if self.color { format!("\x1b[{}m{}\x1b[0m", tone.sgr(), text.as_ref()) } else { text.as_ref().to_string() }
    }
}

/// Render the `--explain` trace that follows the report.
pub fn render(run: &AnalysisVerbose, color: bool) -> String {
    let style = Styler { color };
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", style.tone("━━━ Signals ━━━", Tone::Heading));
    for (flag, label) in [
        (SignalSet::SKILLS, "skills"),
        (SignalSet::YEARS, "years"),
        (SignalSet::SENIORITY, "seniority"),
        (SignalSet::ENTRY, "entry"),
    ] {
        let mark = if run.details.present.contains(flag) {
            style.tone("✓", Tone::Present)
        } else {
            style.tone("✗", Tone::Quiet)
        };
        let _ = writeln!(out, "  {mark} {label}");
    }

    if !run.signals.year_matches.is_empty() {
        let _ = writeln!(out, "\n{}", style.tone("━━━ Years phrases ━━━", Tone::Heading));
        for (idx, phrase) in run.signals.year_matches.iter().enumerate() {
            let _ = writeln!(out, "  {} {}", style.tone(format!("[{idx}]"), Tone::Quiet), style.tone(phrase, Tone::Phrase));
        }
    }

    let _ = writeln!(out, "\n{}", style.tone("━━━ Rules ━━━", Tone::Heading));
    for rule in &run.details.rules {
        let status = if rule.decided {
            let tone = if run.verdict.decision == Decision::Go { Tone::Go } else { Tone::NoGo };
            style.tone(format!("→ {}", run.verdict.decision), tone)
        } else {
            style.tone("skipped", Tone::Quiet)
        };
        let _ = writeln!(out, "  {} {}", style.tone(rule.name, Tone::Rule), status);
    }

    let _ = writeln!(out, "\n{}", style.tone("━━━ Timing ━━━", Tone::Heading));
    let _ = write!(
        out,
        "  Total: {:?}  │  Extract: {}  │  Score: {}",
        run.details.total,
        style.tone(format!("{:?}", run.details.extract), Tone::Quiet),
        style.tone(format!("{:?}", run.details.score), Tone::Quiet),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscreen::{Vocabulary, analyze_verbose_with};

    #[test]
    fn plain_trace_lists_rules_and_phrases() {
        let run = analyze_verbose_with("Junior analyst, 1-2 years", Vocabulary::builtin());
        let text = render(&run, false);

        assert!(!text.contains('\x1b'));
        assert!(text.contains("  ✓ years"));
        assert!(text.contains("  ✗ seniority"));
        assert!(text.contains("[0] 1-2 years"));
        assert!(text.contains("  seniority skipped"));
        assert!(text.contains("  entry-level → GO"));
        assert!(!text.contains("default"));
    }

    #[test]
    fn colored_trace_uses_ansi() {
        let run = analyze_verbose_with("Staff engineer", Vocabulary::builtin());
        let text = render(&run, true);
        assert!(text.contains("\x1b[1;31m→ NO-GO\x1b[0m"));
    }
}
