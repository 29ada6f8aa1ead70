//! Character-level Unicode classification and conversions for Japanese text.

/// Independent (spacing) form of the voicing mark, ゛.
pub const DAKUTEN: char = '\u{309B}';
/// Independent (spacing) form of the semi-voicing mark, ゜.
pub const HANDAKUTEN: char = '\u{309C}';

/// Offset between a hiragana and its katakana counterpart ('ぁ' → 'ァ').
const KATAKANA_OFFSET: u32 = 0x60;

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in typing targets, so
/// the simpler block-level check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Convert a hiragana character to its katakana counterpart.
/// Non-hiragana characters are passed through unchanged.
pub fn hiragana_to_katakana(c: char) -> char {
    if is_hiragana(c) {
        char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Fold ASCII capitals and full-width Latin capitals (U+FF21..U+FF3A) to
/// lower case. Everything else is passed through unchanged.
pub fn fold_case(c: char) -> char {
    match c {
        'A'..='Z' => c.to_ascii_lowercase(),
        '\u{FF21}'..='\u{FF3A}' => char::from_u32(c as u32 + 0x20).unwrap_or(c),
        _ => c,
    }
}

/// Width counterpart of a character under the single uniform range test
/// U+FF01..U+FF5E ↔ U+0021..U+007E: full-width forms map to half-width and
/// vice versa. Characters outside both ranges have no counterpart.
pub fn width_counterpart(c: char) -> Option<char> {
    match c as u32 {
        cp @ 0xFF01..=0xFF5E => char::from_u32(cp - 0xFEE0),
        cp @ 0x21..=0x7E => char::from_u32(cp + 0xFEE0),
        _ => None,
    }
}

/// Canonical decomposition of a voiced hiragana into its base kana plus the
/// independent form of the voicing mark. Returns `None` for unvoiced kana.
pub fn decompose_voiced(c: char) -> Option<(char, char)> {
    match c {
        // dakuten rows: the voiced codepoint directly follows its base
        'が' | 'ぎ' | 'ぐ' | 'げ' | 'ご' | 'ざ' | 'じ' | 'ず' | 'ぜ' | 'ぞ' | 'だ' | 'ぢ'
        | 'づ' | 'で' | 'ど' | 'ば' | 'び' | 'ぶ' | 'べ' | 'ぼ' => {
            Some((offset_back(c, 1), DAKUTEN))
        }
        'ゔ' => Some(('う', DAKUTEN)),
        // han-dakuten row: base is two codepoints back (は ば ぱ)
        'ぱ' | 'ぴ' | 'ぷ' | 'ぺ' | 'ぽ' => Some((offset_back(c, 2), HANDAKUTEN)),
        _ => None,
    }
}

fn offset_back(c: char, n: u32) -> char {
    char::from_u32(c as u32 - n).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana('あ'), 'ア');
        assert_eq!(hiragana_to_katakana('ゔ'), 'ヴ');
        assert_eq!(hiragana_to_katakana('ー'), 'ー');
        assert_eq!(hiragana_to_katakana('a'), 'a');
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('z'), 'z');
        assert_eq!(fold_case('Ａ'), 'ａ');
        assert_eq!(fold_case('あ'), 'あ');
        assert_eq!(fold_case('！'), '！');
    }

    #[test]
    fn test_width_counterpart() {
        assert_eq!(width_counterpart('a'), Some('ａ'));
        assert_eq!(width_counterpart('ａ'), Some('a'));
        assert_eq!(width_counterpart('!'), Some('！'));
        assert_eq!(width_counterpart('～'), Some('~'));
        assert_eq!(width_counterpart('あ'), None);
        // space is just below the convertible range
        assert_eq!(width_counterpart(' '), None);
        assert_eq!(width_counterpart('ー'), None);
    }

    #[test]
    fn test_decompose_voiced() {
        assert_eq!(decompose_voiced('が'), Some(('か', DAKUTEN)));
        assert_eq!(decompose_voiced('ど'), Some(('と', DAKUTEN)));
        assert_eq!(decompose_voiced('ぱ'), Some(('は', HANDAKUTEN)));
        assert_eq!(decompose_voiced('ぽ'), Some(('ほ', HANDAKUTEN)));
        assert_eq!(decompose_voiced('ゔ'), Some(('う', DAKUTEN)));
        assert_eq!(decompose_voiced('あ'), None);
        assert_eq!(decompose_voiced('っ'), None);
        assert_eq!(decompose_voiced('ア'), None);
    }
}
