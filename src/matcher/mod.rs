//! Incremental keystroke matcher.
//!
//! One [`Matcher`] per target string. Each accepted keystroke either narrows
//! the current candidate set by one prefix character or consumes it outright,
//! advancing the cursor; a rejected keystroke changes nothing and may be
//! retried. The rendering layer polls [`Matcher::completed`],
//! [`Matcher::hint`], and the cursor accessors after every call.


use tracing::trace;

use crate::rules::{Candidate, RuleTable};
use crate::unicode::fold_case;

#[derive(Debug)]
pub struct Matcher {
    target: Vec<char>,
    cursor: usize,
    keystrokes: String,
    candidates: Vec<Candidate>,
    last_input_ascii: bool,
}

impl Matcher {
    /// Build a matcher over `target`. ASCII and full-width Latin capitals are
    /// case-folded once here; construction cannot fail, and an empty target
    /// yields an immediately completed matcher.
    pub fn new(target: &str) -> Self {
        let target: Vec<char> = target.chars().map(fold_case).collect();
        let candidates = RuleTable::global().candidates(&target);
        Matcher {
            target,
            cursor: 0,
            keystrokes: String::new(),
            candidates,
            last_input_ascii: true,
        }
    }

    /// Return to the state of a fresh construction on the same target.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.keystrokes.clear();
        self.last_input_ascii = true;
        self.candidates = RuleTable::global().candidates(&self.target);
    }

    /// Feed one keystroke. Returns `true` if it was accepted.
    ///
    /// A rejected keystroke leaves the cursor, candidate set, and keystroke
    /// log untouched; only the script preference used by [`Matcher::hint`] is
    /// recorded before matching, as the rejected character still tells us
    /// which script the learner is typing in.
    pub fn input(&mut self, ch: char) -> bool {
        let ch = fold_case(ch);
        self.last_input_ascii = ch.is_ascii();

        let mut buf = [0u8; 4];
        let key: &str = ch.encode_utf8(&mut buf);

        // keystroke completes a candidate outright: consume the grapheme(s)
        // e.g. candidates=["a"] input='a'
        if let Some(hit) = self.candidates.iter().position(|c| c.keys == key) {
            let span = self.candidates[hit].span;
            self.cursor += span;
            self.keystrokes.push(ch);
            if self.cursor < self.target.len() {
                self.candidates = RuleTable::global().candidates(&self.target[self.cursor..]);
            } else {
                self.candidates.clear();
            }
            trace!(cursor = self.cursor, span, "keystroke consumed a grapheme");
            return true;
        }

        // keystroke prefixes one or more candidates: narrow them
        // e.g. candidates=["ti", "chi"] input='t' => ["i"]
        let narrowed: Vec<Candidate> = self
            .candidates
            .iter()
            .filter_map(|c| {
                c.keys
                    .strip_prefix(ch)
                    .map(|rest| Candidate::new(rest, c.span))
            })
            .collect();

        // e.g. candidates=["ma"] input='h'
        if narrowed.is_empty() {
            trace!(cursor = self.cursor, "keystroke rejected");
            return false;
        }

        self.candidates = narrowed;
        self.keystrokes.push(ch);
        true
    }

    /// First keystroke of the preferred candidate, `None` once completed.
    ///
    /// Prefers a candidate in the script the learner last typed in (ASCII
    /// after a Latin keystroke, kana otherwise), falling back to the first
    /// candidate overall when none matches the preference.
    pub fn hint(&self) -> Option<char> {
        self.candidates
            .iter()
            .find_map(|c| {
                let first = c.keys.chars().next()?;
                (first.is_ascii() == self.last_input_ascii).then_some(first)
            })
            .or_else(|| self.candidates.first().and_then(|c| c.keys.chars().next()))
    }

    pub fn completed(&self) -> bool {
        self.cursor == self.target.len()
    }

    /// Cursor position, in target characters.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Target length, in characters.
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Every accepted keystroke so far, in order.
    pub fn keystrokes(&self) -> &str {
        &self.keystrokes
    }

    /// The case-folded target text up to the cursor.
    pub fn matched_text(&self) -> String {
        self.target[..self.cursor].iter().collect()
    }

    /// The current candidate set, in resolution order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}
