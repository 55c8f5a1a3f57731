//! Years-of-experience detection.
//!
//! Three passes over the text, in priority order:
//!
//! ```text
//! (1) range  "3-5 years"   -> low into min, high into max
//! (2) plus   "5+ years"    -> n into min
//! (3) plain  "2 years"     -> n into min and max, unless its span overlaps
//!                             a span already consumed
//! ```
//!
//! Only the plain pass is filtered. Range and plus matches are always
//! accepted, even when they overlap each other.

use crate::Span;
use regex::{Captures, Regex};

/// Result of the years passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct YearsSignal {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub matches: Vec<String>,
}

impl YearsSignal {
    fn lower(&mut self, n: u32) {
        self.min = Some(self.min.map_or(n, |m| m.min(n)));
    }

    fn raise(&mut self, n: u32) {
        self.max = Some(self.max.map_or(n, |m| m.max(n)));
    }
}

fn range_re() -> &'static Regex {
    regex!(r"(?i)(\d+)\s*-\s*(\d+)\s*years")
}

fn plus_re() -> &'static Regex {
    regex!(r"(?i)(\d+)\s*\+\s*years")
}

fn plain_re() -> &'static Regex {
    regex!(r"(?i)(\d+)\s*years")
}

/// Numbers beyond `u32` saturate.
fn number(caps: &Captures<'_>, group: usize) -> u32 {
    let Some(digits) = caps.get(group) else { return 0 };
    digits
        .as_str()
        .chars()
        .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(digit_value(c)))
        .unwrap_or(u32::MAX)
}

/// Decimal value of a `\d` (Unicode `Nd`) character.
///
/// Every decimal digit set is a contiguous 0..=9 run and adjacent sets start
/// on a zero, so the value is the offset from the start of the surrounding
/// run of digits, modulo ten.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    let mut offset = 0;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    offset % 10
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    regex!(r"^\d$").is_match(c.encode_utf8(&mut buf))
}

pub(crate) fn detect(text: &str) -> YearsSignal {
    let mut out = YearsSignal::default();
    let mut used: Vec<Span> = Vec::new();

    for caps in range_re().captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.lower(number(&caps, 1));
        out.raise(number(&caps, 2));
        out.matches.push(whole.as_str().to_string());
        used.push(whole.into());
    }

    for caps in plus_re().captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.lower(number(&caps, 1));
        out.matches.push(whole.as_str().to_string());
        used.push(whole.into());
    }

    for caps in plain_re().captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let span = Span::from(whole);
        if used.iter().any(|u| span.overlaps(u)) {
            tracing::trace!(phrase = whole.as_str(), "plain years phrase overlaps a consumed span");
            continue;
        }
        let n = number(&caps, 1);
        out.lower(n);
        out.raise(n);
        out.matches.push(whole.as_str().to_string());
        used.push(span);
    }

    out
}
