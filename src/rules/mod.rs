//! Keystroke rule table and candidate resolution.
//!
//! [`RuleTable`] combines an ordered romaji rule list (first match wins) with a
//! procedurally generated kana-normalization map, and resolves any remaining
//! target suffix into the ordered set of keystroke sequences that legally
//! continue input. Lookup never fails: an unmapped character still yields
//! itself (and its width counterpart where one exists) as a literal candidate.

mod config;
mod table;


use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::unicode::{decompose_voiced, hiragana_to_katakana, width_counterpart};

use config::RuleDef;
pub use config::RulesConfigError;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Exact codepoint range the kana-normalization scan covers, ぁ..ゖ.
const HIRAGANA_FIRST: u32 = 0x3041;
const HIRAGANA_LAST: u32 = 0x3096;

/// One still-viable keystroke sequence. `keys` is what remains to be typed;
/// `span` is how many target characters typing all of it consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub(crate) keys: String,
    pub(crate) span: usize,
}

impl Candidate {
    pub(crate) fn new(keys: impl Into<String>, span: usize) -> Self {
        Candidate {
            keys: keys.into(),
            span,
        }
    }

    pub fn keys(&self) -> &str {
        &self.keys
    }

    pub fn span(&self) -> usize {
        self.span
    }
}

struct CompiledRule {
    heads: String,
    before: Option<String>,
    before2: Option<String>,
    span: usize,
    inputs: Vec<String>,
}

impl CompiledRule {
    fn matches(&self, suffix: &[char]) -> bool {
        let Some(&head) = suffix.first() else {
            return false;
        };
        if !self.heads.contains(head) {
            return false;
        }
        for (offset, class) in [(1, &self.before), (2, &self.before2)] {
            if let Some(class) = class {
                match suffix.get(offset) {
                    Some(&c) if class.contains(c) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Immutable, process-wide rule table shared by all matchers.
pub struct RuleTable {
    rules: Vec<CompiledRule>,
    kana_forms: HashMap<char, String>,
}

impl RuleTable {
    /// Install a replacement rule table from TOML before the first
    /// [`RuleTable::global`] call. Validated eagerly.
    pub fn init_custom(toml_content: String) -> Result<(), RulesConfigError> {
        config::parse_rules_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RulesConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleTable {
        static INSTANCE: OnceLock<RuleTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(table::DEFAULT_TOML);
            let defs = config::parse_rules_toml(toml_str).expect("rule TOML must be valid");
            RuleTable::build(defs)
        })
    }

    fn build(defs: Vec<RuleDef>) -> Self {
        let rules: Vec<CompiledRule> = defs
            .into_iter()
            .map(|def| CompiledRule {
                heads: def.kana,
                before: def.before,
                before2: def.before2,
                span: def.span,
                inputs: def.inputs,
            })
            .collect();
        let kana_forms = build_kana_forms();
        debug!(
            rule_count = rules.len(),
            kana_form_count = kana_forms.len(),
            "rule table built"
        );
        RuleTable { rules, kana_forms }
    }

    /// Resolve the remaining target suffix into the ordered candidate set:
    /// the first matching romaji rule's keystroke strings in table order, then
    /// the normalized kana form of the head character, then the head character
    /// itself, then its width counterpart where one exists. Pure per suffix;
    /// an empty suffix yields an empty set, a non-empty suffix never does.
    pub fn candidates(&self, suffix: &[char]) -> Vec<Candidate> {
        let Some(&head) = suffix.first() else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for rule in &self.rules {
            if rule.matches(suffix) {
                let hits = rule.inputs.iter().map(|k| Candidate::new(k.clone(), rule.span));
                out.extend(hits);
                break;
            }
        }
        if let Some(form) = self.kana_forms.get(&head) {
            out.push(Candidate::new(form.clone(), 1));
        }
        out.push(Candidate::new(head, 1));
        if let Some(wide) = width_counterpart(head) {
            out.push(Candidate::new(wide, 1));
        }
        out
    }
}

/// Scan the hiragana range once and map every kana, plus its fixed-offset
/// katakana counterpart, to its normalized hiragana form: the base kana plus
/// the independent voicing mark for voiced kana, the kana itself otherwise.
fn build_kana_forms() -> HashMap<char, String> {
    let mut forms = HashMap::new();
    for cp in HIRAGANA_FIRST..=HIRAGANA_LAST {
        let Some(hira) = char::from_u32(cp) else {
            continue;
        };
        let form = match decompose_voiced(hira) {
            Some((base, mark)) => {
                let mut s = String::with_capacity(6);
                s.push(base);
                s.push(mark);
                s
            }
            None => hira.to_string(),
        };
        forms.insert(hira, form.clone());
        forms.insert(hiragana_to_katakana(hira), form);
    }
    forms
}
