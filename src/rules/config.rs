use serde::Deserialize;

#[derive(Deserialize)]
struct RulesConfig {
    rules: Vec<RuleDef>,
}

/// One rule as written in TOML. `kana` is the class of head characters the
/// rule applies to; `before`/`before2` are optional lookahead classes over the
/// next one or two target characters; `span` is how many target characters an
/// exactly-typed candidate consumes.
#[derive(Debug, Deserialize)]
pub(crate) struct RuleDef {
    pub kana: String,
    pub before: Option<String>,
    pub before2: Option<String>,
    #[serde(default = "default_span")]
    pub span: usize,
    pub inputs: Vec<String>,
}

fn default_span() -> usize {
    1
}

#[derive(Debug, thiserror::Error)]
pub enum RulesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("rules list is empty")]
    Empty,
    #[error("rule {0}: empty kana class")]
    EmptyKanaClass(usize),
    #[error("rule {0}: no keystroke candidates")]
    NoInputs(usize),
    #[error("rule {0}: empty keystroke candidate")]
    EmptyInput(usize),
    #[error("rule {0}: empty lookahead class")]
    EmptyLookahead(usize),
    #[error("rule {0}: before2 without before")]
    DanglingLookahead(usize),
    #[error("rule {0}: span {1} out of range (expected 1 or 2)")]
    SpanOutOfRange(usize, usize),
    #[error("rule {0}: span 2 requires a lookahead class")]
    SpanWithoutLookahead(usize),
    #[error("rule table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into the ordered rule list. Order is significant: the
/// resolver scans linearly and stops at the first matching rule, so
/// context-specific entries must precede general entries for the same kana.
pub(crate) fn parse_rules_toml(toml_str: &str) -> Result<Vec<RuleDef>, RulesConfigError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RulesConfigError::Parse(e.to_string()))?;

    if config.rules.is_empty() {
        return Err(RulesConfigError::Empty);
    }

    for (idx, rule) in config.rules.iter().enumerate() {
        if rule.kana.is_empty() {
            return Err(RulesConfigError::EmptyKanaClass(idx));
        }
        if rule.inputs.is_empty() {
            return Err(RulesConfigError::NoInputs(idx));
        }
        // candidates are keyboard input, mostly ASCII, but non-ASCII analogues
        // (« ») are legitimate; only the empty string is ruled out
        for input in &rule.inputs {
            if input.is_empty() {
                return Err(RulesConfigError::EmptyInput(idx));
            }
        }
        if rule.before.as_deref() == Some("") || rule.before2.as_deref() == Some("") {
            return Err(RulesConfigError::EmptyLookahead(idx));
        }
        if rule.before2.is_some() && rule.before.is_none() {
            return Err(RulesConfigError::DanglingLookahead(idx));
        }
        if !(1..=2).contains(&rule.span) {
            return Err(RulesConfigError::SpanOutOfRange(idx, rule.span));
        }
        if rule.span == 2 && rule.before.is_none() {
            return Err(RulesConfigError::SpanWithoutLookahead(idx));
        }
    }

    Ok(config.rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
rules = [
    { kana = "しシ", before = "ゃャ", inputs = ["sh", "sy"] },
    { kana = "しシ", inputs = ["si", "shi"] },
]
"#;
        let rules = parse_rules_toml(toml).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].inputs, vec!["sh", "sy"]);
        assert_eq!(rules[0].before.as_deref(), Some("ゃャ"));
        assert_eq!(rules[0].span, 1);
        assert!(rules[1].before.is_none());
    }

    #[test]
    fn parse_default_toml() {
        let rules = parse_rules_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(rules.len() > 120, "expected 120+ rules, got {}", rules.len());
    }

    #[test]
    fn error_empty_rules() {
        let err = parse_rules_toml("rules = []\n").unwrap_err();
        assert!(matches!(err, RulesConfigError::Empty));
    }

    #[test]
    fn error_empty_kana_class() {
        let toml = r#"rules = [{ kana = "", inputs = ["a"] }]"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::EmptyKanaClass(0)));
    }

    #[test]
    fn error_no_inputs() {
        let toml = r#"rules = [{ kana = "あ", inputs = [] }]"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::NoInputs(0)));
    }

    #[test]
    fn error_empty_input() {
        let toml = r#"rules = [{ kana = "あ", inputs = ["a", ""] }]"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::EmptyInput(0)));
    }

    #[test]
    fn error_dangling_lookahead() {
        let toml = r#"rules = [{ kana = "っ", before2 = "ゃ", inputs = ["t"] }]"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::DanglingLookahead(0)));
    }

    #[test]
    fn error_span_out_of_range() {
        let toml = r#"rules = [{ kana = "ん", before = "な", span = 3, inputs = ["n"] }]"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::SpanOutOfRange(0, 3)));
    }

    #[test]
    fn error_span_without_lookahead() {
        let toml = r#"rules = [{ kana = "ん", span = 2, inputs = ["nn"] }]"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RulesConfigError::SpanWithoutLookahead(0)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_rules_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RulesConfigError::Parse(_)));
    }
}
