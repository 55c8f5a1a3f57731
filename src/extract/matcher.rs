//! Whole-word alias matching.
//!
//! The `regex` crate has no look-around, so boundary checks are done by hand:
//! the regex finds the literal alias (case-insensitively) and the
//! [`Boundary`] guard inspects the characters on either side.
//!
//! Two aliases collide with ordinary word characters and get their own guard:
//!
//! ```text
//! "c"  -> no word char before, no word char / '#' / '+' after
//! "r"  -> no word char before, no word char after
//! *    -> no word char before, no word char after
//! ```
//!
//! A rejected occurrence does not consume its text: the search resumes one
//! character after the rejected start, so "c++ and c" still finds the second
//! `c`.

use crate::Span;
use regex::{Regex, RegexBuilder};

bitflags::bitflags! {
    /// What may *not* touch an alias occurrence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Boundary: u8 {
        /// A word character immediately before the match.
        const WORD_BEFORE  = 1 << 0;
        /// A word character immediately after the match.
        const WORD_AFTER   = 1 << 1;
        /// `#` or `+` immediately after the match (C#, C++).
        const SIGIL_AFTER  = 1 << 2;
    }
}

impl Boundary {
    pub const WHOLE_WORD: Boundary = Boundary::WORD_BEFORE.union(Boundary::WORD_AFTER);

    /// Guard used for `alias`.
    pub fn for_alias(alias: &str) -> Boundary {
        match alias.to_lowercase().as_str() {
            "c" => Boundary::WHOLE_WORD | Boundary::SIGIL_AFTER,
            // "r" needs nothing beyond the whole-word guard.
            _ => Boundary::WHOLE_WORD,
        }
    }

    fn admits(self, before: Option<char>, after: Option<char>) -> bool {
        if self.contains(Boundary::WORD_BEFORE) && before.is_some_and(is_word_char) {
            return false;
        }
        if self.contains(Boundary::WORD_AFTER) && after.is_some_and(is_word_char) {
            return false;
        }
        if self.contains(Boundary::SIGIL_AFTER) && matches!(after, Some('#' | '+')) {
            return false;
        }
        true
    }
}

/// Unicode word character: alphanumeric or underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A compiled, case-insensitive, boundary-guarded alias.
#[derive(Debug, Clone)]
pub(crate) struct AliasMatcher {
    alias: String,
    regex: Regex,
    boundary: Boundary,
}

impl AliasMatcher {
    pub fn new(alias: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&regex::escape(alias)).case_insensitive(true).build()?;
        Ok(AliasMatcher { alias: alias.to_string(), regex, boundary: Boundary::for_alias(alias) })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Does the alias occur anywhere in `text`?
    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Non-overlapping guarded occurrences, in text order.
    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        Matches { matcher: self, text, pos: 0 }
    }
}

/// Iterator returned by [`AliasMatcher::find_iter`].
pub(crate) struct Matches<'m, 't> {
    matcher: &'m AliasMatcher,
    text: &'t str,
    pos: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while self.pos <= self.text.len() {
            let m = self.matcher.regex.find_at(self.text, self.pos)?;
            let before = self.text[..m.start()].chars().next_back();
            let after = self.text[m.end()..].chars().next();

            if self.matcher.boundary.admits(before, after) {
                self.pos = m.end();
                return Some(m.into());
            }

            // Step past the first char of the rejected occurrence.
            let step = self.text[m.start()..].chars().next().map_or(1, char::len_utf8);
            self.pos = m.start() + step;
        }
        None
    }
}
