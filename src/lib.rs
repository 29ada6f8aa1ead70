//! Incremental input matching for Japanese typing practice.
//!
//! [`Matcher`] owns one target string and decides, one keystroke at a time,
//! whether a typed character is an acceptable continuation of it. Romaji
//! transliteration and direct kana entry are both accepted at every step:
//! hiragana and katakana are interchangeable, and a voiced kana may be typed
//! as its base kana followed by the independent dakuten or han-dakuten mark.

pub mod matcher;
pub mod rules;
pub mod unicode;

pub use matcher::Matcher;
pub use rules::{Candidate, RuleTable, RulesConfigError};
