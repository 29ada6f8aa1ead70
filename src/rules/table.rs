//! Built-in keystroke rule table.
//!
//! An ordered, first-match-wins list: entries with lookahead classes
//! (`before`, `before2`) must precede general entries for the same head kana,
//! e.g. しゃ resolves to "sh"/"sy" only because the lookahead entry for し
//! is listed before the plain し entry.

pub(crate) const DEFAULT_TOML: &str = r##"
rules = [
    # palatalized rows: the y-glide spelling applies before a small y/i kana
    { kana = "きキ", before = "ゃャぃィゅュぇェょョ", inputs = ["ky"] },
    { kana = "ぎギ", before = "ゃャぃィゅュぇェょョ", inputs = ["gy"] },
    { kana = "にニ", before = "ゃャぃィゅュぇェょョ", inputs = ["ny"] },
    { kana = "みミ", before = "ゃャぃィゅュぇェょョ", inputs = ["my"] },
    { kana = "りリ", before = "ゃャぃィゅュぇェょョ", inputs = ["ry"] },
    { kana = "ひヒ", before = "ゃャぃィゅュぇェょョ", inputs = ["hy"] },
    { kana = "びビ", before = "ゃャぃィゅュぇェょョ", inputs = ["by"] },
    { kana = "ぴピ", before = "ゃャぃィゅュぇェょョ", inputs = ["py"] },

    # foreign-sound extensions
    { kana = "ふフ", before = "ぃィぇェ", inputs = ["f", "fy"] },
    { kana = "ふフ", before = "ぁァぉォ", inputs = ["f"] },
    { kana = "ふフ", before = "ゃャゅュょョ", inputs = ["fy"] },
    { kana = "うウ", before = "ゃャゅュょョ", inputs = ["wy"] },
    { kana = "しシ", before = "ゃャゅュぇェょョ", inputs = ["sh", "sy"] },
    { kana = "しシ", before = "ぃィ", inputs = ["sy"] },
    { kana = "じジ", before = "ゃャゅュぇェょョ", inputs = ["j", "zy", "jy"] },
    { kana = "じジ", before = "ぃィ", inputs = ["zy", "jy"] },
    { kana = "ちチ", before = "ゃャゅュぇェょョ", inputs = ["ch", "ty", "cy"] },
    { kana = "ちチ", before = "ぃィ", inputs = ["ty", "cy"] },
    { kana = "ぢヂ", before = "ゃャぃィゅュぇェょョ", inputs = ["dy"] },
    { kana = "うウ", before = "ぃィぇェ", inputs = ["w", "wh"] },
    { kana = "うウ", before = "ぁァぉォ", inputs = ["wh"] },
    { kana = "ヴ", before = "ぁァぃィぇェぉォ", inputs = ["v"] },
    { kana = "ヴ", before = "ゃャゅュょョ", inputs = ["vy"] },
    { kana = "てテ", before = "ゃャぃィゅュぇェょョ", inputs = ["th"] },
    { kana = "でデ", before = "ゃャぃィゅュぇェょョ", inputs = ["dh"] },
    { kana = "つツ", before = "ぁァぃィぇェぉォ", inputs = ["ts"] },
    { kana = "つツ", before = "ゃャゅュょョ", inputs = ["tsy"] },
    { kana = "づヅ", before = "ぁァぃィぇェぉォ", inputs = ["dz"] },
    { kana = "づヅ", before = "ゃャゅュょョ", inputs = ["dzy"] },
    { kana = "とト", before = "ぅゥ", inputs = ["tw"] },
    { kana = "どド", before = "ぅゥ", inputs = ["dw"] },

    # plain vowels and syllable rows
    { kana = "あア", inputs = ["a"] },
    { kana = "いイ", inputs = ["i"] },
    { kana = "うウ", inputs = ["u"] },
    { kana = "えエ", inputs = ["e"] },
    { kana = "おオ", inputs = ["o"] },

    { kana = "かカ", inputs = ["ka"] },
    { kana = "がガ", inputs = ["ga"] },
    { kana = "きキ", inputs = ["ki"] },
    { kana = "ぎギ", inputs = ["gi"] },
    { kana = "くク", inputs = ["ku"] },
    { kana = "ぐグ", inputs = ["gu"] },
    { kana = "けケ", inputs = ["ke"] },
    { kana = "げゲ", inputs = ["ge"] },
    { kana = "こコ", inputs = ["ko"] },
    { kana = "ごゴ", inputs = ["go"] },

    { kana = "さサ", inputs = ["sa"] },
    { kana = "ざザ", inputs = ["za"] },
    { kana = "しシ", inputs = ["si", "shi"] },
    { kana = "じジ", inputs = ["ji", "zi"] },
    { kana = "すス", inputs = ["su"] },
    { kana = "ずズ", inputs = ["zu"] },
    { kana = "せセ", inputs = ["se"] },
    { kana = "ぜゼ", inputs = ["ze"] },
    { kana = "そソ", inputs = ["so"] },
    { kana = "ぞゾ", inputs = ["zo"] },

    { kana = "たタ", inputs = ["ta"] },
    { kana = "だダ", inputs = ["da"] },
    { kana = "ちチ", inputs = ["ti", "chi"] },
    { kana = "ぢヂ", inputs = ["di"] },
    { kana = "つツ", inputs = ["tu", "tsu"] },
    { kana = "づヅ", inputs = ["du", "dzu"] },
    { kana = "てテ", inputs = ["te"] },
    { kana = "でデ", inputs = ["de"] },
    { kana = "とト", inputs = ["to"] },
    { kana = "どド", inputs = ["do"] },

    { kana = "なナ", inputs = ["na"] },
    { kana = "にニ", inputs = ["ni"] },
    { kana = "ぬヌ", inputs = ["nu"] },
    { kana = "ねネ", inputs = ["ne"] },
    { kana = "のノ", inputs = ["no"] },

    { kana = "はハ", inputs = ["ha"] },
    { kana = "ばバ", inputs = ["ba"] },
    { kana = "ぱパ", inputs = ["pa"] },
    { kana = "ひヒ", inputs = ["hi"] },
    { kana = "びビ", inputs = ["bi"] },
    { kana = "ぴピ", inputs = ["pi"] },
    { kana = "ふフ", inputs = ["fu", "hu"] },
    { kana = "ぶブ", inputs = ["bu"] },
    { kana = "ぷプ", inputs = ["pu"] },
    { kana = "へヘ", inputs = ["he"] },
    { kana = "べベ", inputs = ["be"] },
    { kana = "ぺペ", inputs = ["pe"] },
    { kana = "ほホ", inputs = ["ho"] },
    { kana = "ぼボ", inputs = ["bo"] },
    { kana = "ぽポ", inputs = ["po"] },

    { kana = "まマ", inputs = ["ma"] },
    { kana = "みミ", inputs = ["mi"] },
    { kana = "むム", inputs = ["mu"] },
    { kana = "めメ", inputs = ["me"] },
    { kana = "もモ", inputs = ["mo"] },

    { kana = "やヤ", inputs = ["ya"] },
    { kana = "ゆユ", inputs = ["yu"] },
    { kana = "よヨ", inputs = ["yo"] },

    { kana = "らラ", inputs = ["ra"] },
    { kana = "りリ", inputs = ["ri"] },
    { kana = "るル", inputs = ["ru"] },
    { kana = "れレ", inputs = ["re"] },
    { kana = "ろロ", inputs = ["ro"] },

    { kana = "わワ", inputs = ["wa"] },
    { kana = "ゐヰ", inputs = ["wyi"] },
    { kana = "ゑヱ", inputs = ["wye"] },
    { kana = "をヲ", inputs = ["wo"] },

    { kana = "ヴ", inputs = ["vu"] },

    # moraic nasal: before a na-row syllable the short, doubled, and
    # apostrophe-qualified spellings are all open until the keystroke after
    # the first n picks one; the pair rules span both characters
    { kana = "んン", before = "なナ", span = 2, inputs = ["nna", "nnna", "n'na"] },
    { kana = "んン", before = "にニ", span = 2, inputs = ["nni", "nnni", "n'ni"] },
    { kana = "んン", before = "ぬヌ", span = 2, inputs = ["nnu", "nnnu", "n'nu"] },
    { kana = "んン", before = "ねネ", span = 2, inputs = ["nne", "nnne", "n'ne"] },
    { kana = "んン", before = "のノ", span = 2, inputs = ["nno", "nnno", "n'no"] },
    { kana = "んン", inputs = ["n"] },

    # long-vowel mark
    { kana = "ー", inputs = ["-"] },

    # geminate marker borrows the initial consonant of the next syllable
    { kana = "っッ", before = "かきくけこカキクケコ", inputs = ["k"] },
    { kana = "っッ", before = "がぎぐげごガギグゲゴ", inputs = ["g"] },
    { kana = "っッ", before = "さしすせそサシスセソ", inputs = ["s"] },
    { kana = "っッ", before = "ざずぜぞザズゼゾ", inputs = ["z"] },
    { kana = "っッ", before = "たつてとタツテト", inputs = ["t"] },
    { kana = "っッ", before = "だぢづでどダヂヅデド", inputs = ["d"] },
    { kana = "っッ", before = "なにぬねのナニヌネノ", inputs = ["n"] },
    { kana = "っッ", before = "はひへほハヒヘホ", inputs = ["h"] },
    { kana = "っッ", before = "ばびぶべぼバビブベボ", inputs = ["b"] },
    { kana = "っッ", before = "ぱぴぷぺぽパピプペポ", inputs = ["p"] },
    { kana = "っッ", before = "まみむめもマミムメモ", inputs = ["m"] },
    { kana = "っッ", before = "やゆよヤユヨ", inputs = ["y"] },
    { kana = "っッ", before = "らりるれろラリルレロ", inputs = ["r"] },
    { kana = "っッ", before = "わワゐヰうウゑヱをヲ", inputs = ["w"] },
    { kana = "っッ", before = "ちチ", before2 = "ゃャゅュぇェょョ", inputs = ["c", "t"] },
    { kana = "っッ", before = "ちチ", inputs = ["t", "c"] },
    { kana = "っッ", before = "ふフ", inputs = ["f", "h"] },
    { kana = "っッ", before = "じジ", inputs = ["j"] },
    { kana = "っッ", before = "ヴ", inputs = ["v"] },

    # small kana on their own
    { kana = "ぁァ", inputs = ["a", "xa", "la"] },
    { kana = "ぃィ", inputs = ["i", "xi", "li"] },
    { kana = "ぅゥ", inputs = ["u", "xu", "lu"] },
    { kana = "ぇェ", inputs = ["e", "xe", "le"] },
    { kana = "ぉォ", inputs = ["o", "xo", "lo"] },
    { kana = "ゃャ", inputs = ["a", "xya", "lya"] },
    { kana = "ゅュ", inputs = ["u", "xyu", "lyu"] },
    { kana = "ょョ", inputs = ["o", "xyo", "lyo"] },
    { kana = "ゎヮ", inputs = ["xwa", "lwa"] },
    { kana = "っッ", inputs = ["xtu", "ltu", "xtsu", "ltsu"] },
    { kana = "ヵ", inputs = ["xka", "lka"] },
    { kana = "ヶ", inputs = ["xke", "lke"] },

    # punctuation (best effort)
    { kana = "、，,", inputs = [","] },
    { kana = "。．.", inputs = ["."] },
    { kana = "：:", inputs = [":"] },
    { kana = "；;", inputs = [";"] },
    { kana = "？?", inputs = ["?"] },
    { kana = "！!", inputs = ["!"] },
    { kana = "—―-", inputs = ["-"] },
    { kana = "…", inputs = ["..."] },
    { kana = "・", inputs = [".", "/"] },
    { kana = "〜~", inputs = ["~"] },
    { kana = "／", inputs = ["/", ";"] },

    # lenient quotes and brackets
    { kana = '「｢『（”"', inputs = ['"', "«", "[", "(", "{"] },
    { kana = '」｣』）"', inputs = ['"', "»", "]", ")", "}"] },
]
"##;
