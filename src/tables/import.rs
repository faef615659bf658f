//! Source character to canonical codepoint, per format.
//!
//! `COMMON` is merged under every format table; a format entry wins over a
//! common entry for the same character.

use super::ImportEntry;
use crate::Pseudo;

const fn raw(ch: char) -> Pseudo {
    Pseudo::from_char(ch)
}

pub(crate) const COMMON: &[ImportEntry] = &[
    ('ï', Pseudo::SMALL_I_WITH_DIAERESIS),
    ('Ï', Pseudo::CAPITAL_I_WITH_DIAERESIS),
    ('.', Pseudo::DOT),
    (':', Pseudo::COLON),
    ('=', Pseudo::SUFFIX_PRONOUN_SEPARATOR),
    ('b', Pseudo::SMALL_B),
    ('d', Pseudo::SMALL_D),
    ('f', Pseudo::SMALL_F),
    ('g', Pseudo::SMALL_G),
    ('h', Pseudo::SMALL_H),
    ('j', Pseudo::SMALL_YOD),
    ('k', Pseudo::SMALL_K),
    ('l', Pseudo::SMALL_L),
    ('m', Pseudo::SMALL_M),
    ('n', Pseudo::SMALL_N),
    ('p', Pseudo::SMALL_P),
    ('q', Pseudo::SMALL_Q),
    ('r', Pseudo::SMALL_R),
    ('s', Pseudo::SMALL_S),
    ('t', Pseudo::SMALL_T),
    ('w', Pseudo::SMALL_W),
    ('y', Pseudo::SMALL_Y),
    ('z', Pseudo::SMALL_Z),
    ('B', Pseudo::CAPITAL_B),
    ('F', Pseudo::CAPITAL_F),
    ('G', Pseudo::CAPITAL_G),
    ('J', Pseudo::CAPITAL_YOD),
    ('K', Pseudo::CAPITAL_K),
    ('L', Pseudo::CAPITAL_L),
    ('M', Pseudo::CAPITAL_M),
    ('N', Pseudo::CAPITAL_N),
    ('P', Pseudo::CAPITAL_P),
    ('Q', Pseudo::CAPITAL_Q),
    ('R', Pseudo::CAPITAL_R),
    ('W', Pseudo::CAPITAL_W),
    ('Y', Pseudo::CAPITAL_Y),
    ('Z', Pseudo::CAPITAL_Z),
];

// Umschrift_TTn is laid out on Windows-1252, so some glyphs arrive as the
// Unicode counterparts of that code page (‰, †, ™, Š, U+008D).
pub(crate) const UMSCHRIFT_TTN: &[ImportEntry] = &[
    ('#', Pseudo::SMALL_ALEPH),
    ('™', Pseudo::SMALL_ALEPH),
    ('\u{8D}', Pseudo::SMALL_ALEPH),
    ('|', Pseudo::SMALL_YOD),
    ('¦', Pseudo::SMALL_YOD),
    ('Ï', Pseudo::SMALL_YOD),
    ('Ê', Pseudo::CAPITAL_YOD),
    ('¥', Pseudo::SMALL_E),
    ('ê', Pseudo::SMALL_E),
    ('\u{B5}', Pseudo::CAPITAL_E),
    ('\u{3BC}', Pseudo::CAPITAL_E),
    ('~', Pseudo::SMALL_I_WITH_DIAERESIS),
    ('+', Pseudo::SMALL_I_WITH_INVERTED_BREVE),
    ('A', Pseudo::RIGHT_HALF_RING),
    ('\'', Pseudo::RIGHT_HALF_RING),
    ('o', Pseudo::SMALL_AIN),
    ('_', Pseudo::SMALL_U_WITH_INVERTED_BREVE),
    ('!', Pseudo::CAPITAL_H),
    ('H', Pseudo::SMALL_H_WITH_DOT),
    ('O', Pseudo::CAPITAL_H_WITH_DOT),
    ('"', Pseudo::CAPITAL_H_WITH_DOT),
    ('X', Pseudo::SMALL_H_WITH_BREVE),
    ('%', Pseudo::CAPITAL_H_WITH_BREVE),
    ('§', Pseudo::SMALL_H_WITH_CIRCUMFLEX),
    ('©', Pseudo::SMALL_H_WITH_CIRCUMFLEX),
    ('x', Pseudo::SMALL_H_WITH_LINE),
    ('$', Pseudo::CAPITAL_H_WITH_LINE),
    ('È', Pseudo::SMALL_S),
    ('c', Pseudo::CAPITAL_S),
    ('Ü', Pseudo::CAPITAL_S),
    ('S', Pseudo::SMALL_S_WITH_CARON),
    ('C', Pseudo::CAPITAL_S_WITH_CARON),
    ('û', Pseudo::SMALL_Q),
    ('Q', Pseudo::CAPITAL_Q),
    ('Ä', Pseudo::CAPITAL_Q),
    ('Ö', Pseudo::CAPITAL_Q),
    ('v', Pseudo::CAPITAL_T),
    ('‰', Pseudo::CAPITAL_T),
    ('ß', Pseudo::SMALL_T_WITH_CIRCUMFLEX),
    ('£', Pseudo::CAPITAL_T_WITH_CIRCUMFLEX),
    ('T', Pseudo::SMALL_T_WITH_LINE),
    ('²', Pseudo::SMALL_T_WITH_LINE),
    ('ç', Pseudo::SMALL_T_WITH_LINE),
    ('V', Pseudo::CAPITAL_T_WITH_LINE),
    ('Ç', Pseudo::CAPITAL_T_WITH_LINE),
    ('³', Pseudo::SMALL_D),
    ('Æ', Pseudo::SMALL_D),
    ('ô', Pseudo::SMALL_D),
    ('e', Pseudo::CAPITAL_D),
    ('æ', Pseudo::CAPITAL_D),
    ('D', Pseudo::SMALL_D_WITH_LINE),
    ('@', Pseudo::SMALL_D_WITH_LINE),
    ('E', Pseudo::CAPITAL_D_WITH_LINE),
    ('Ù', Pseudo::CAPITAL_D_WITH_LINE),
    ('=', Pseudo::SUFFIX_PRONOUN_SEPARATOR),
    ('&', Pseudo::TOP_LEFT_HALF_BRACKET),
    ('\\', Pseudo::TOP_RIGHT_HALF_BRACKET),
    // glyphs standing in for the ASCII characters the font reassigns
    ('À', raw('A')),
    ('†', raw('c')),
    ('¡', raw('_')),
    ('Ë', raw('+')),
    ('Ò', raw('O')),
    ('Ó', raw('o')),
    ('Š', raw('~')),
    ('^', raw('(')),
    ('½', raw('(')),
];

pub(crate) const TRANSLITERATION: &[ImportEntry] = &[
    ('A', Pseudo::SMALL_ALEPH),
    ('i', Pseudo::SMALL_YOD),
    ('I', Pseudo::CAPITAL_YOD),
    ('e', Pseudo::SMALL_E),
    ('E', Pseudo::CAPITAL_E),
    ('a', Pseudo::SMALL_AIN),
    ('!', Pseudo::CAPITAL_H),
    ('H', Pseudo::SMALL_H_WITH_DOT),
    ('@', Pseudo::CAPITAL_H_WITH_DOT),
    ('x', Pseudo::SMALL_H_WITH_BREVE),
    ('#', Pseudo::CAPITAL_H_WITH_BREVE),
    ('V', Pseudo::SMALL_H_WITH_CIRCUMFLEX),
    ('X', Pseudo::SMALL_H_WITH_LINE),
    ('$', Pseudo::CAPITAL_H_WITH_LINE),
    ('c', Pseudo::SMALL_S),
    ('%', Pseudo::CAPITAL_S),
    ('C', Pseudo::CAPITAL_S),
    ('S', Pseudo::SMALL_S_WITH_CARON),
    ('^', Pseudo::CAPITAL_S_WITH_CARON),
    ('¥', Pseudo::CAPITAL_S_WITH_CARON),
    ('q', Pseudo::SMALL_Q),
    ('o', Pseudo::SMALL_Q),
    ('Q', Pseudo::CAPITAL_Q),
    ('O', Pseudo::CAPITAL_Q),
    ('&', Pseudo::CAPITAL_T),
    ('v', Pseudo::SMALL_T_WITH_CIRCUMFLEX),
    ('T', Pseudo::SMALL_T_WITH_LINE),
    ('*', Pseudo::CAPITAL_T_WITH_LINE),
    ('§', Pseudo::CAPITAL_T_WITH_LINE),
    ('_', Pseudo::CAPITAL_D),
    ('D', Pseudo::SMALL_D_WITH_LINE),
    ('+', Pseudo::CAPITAL_D_WITH_LINE),
    ('=', Pseudo::SUFFIX_PRONOUN_SEPARATOR),
];

pub(crate) const TRLIT_CG_TIMES: &[ImportEntry] = &[
    ('A', Pseudo::SMALL_ALEPH),
    ('i', Pseudo::SMALL_YOD),
    ('I', Pseudo::CAPITAL_YOD),
    ('e', Pseudo::SMALL_E),
    ('E', Pseudo::CAPITAL_E),
    ('a', Pseudo::SMALL_AIN),
    ('0', Pseudo::CAPITAL_H),
    ('H', Pseudo::SMALL_H_WITH_DOT),
    ('1', Pseudo::CAPITAL_H_WITH_DOT),
    ('x', Pseudo::SMALL_H_WITH_BREVE),
    ('2', Pseudo::CAPITAL_H_WITH_BREVE),
    ('X', Pseudo::SMALL_H_WITH_LINE),
    ('3', Pseudo::CAPITAL_H_WITH_LINE),
    ('c', Pseudo::SMALL_S),
    ('4', Pseudo::CAPITAL_S),
    ('C', Pseudo::CAPITAL_S),
    ('S', Pseudo::SMALL_S_WITH_CARON),
    ('5', Pseudo::CAPITAL_S_WITH_CARON),
    ('q', Pseudo::SMALL_Q),
    ('o', Pseudo::SMALL_Q),
    ('Q', Pseudo::CAPITAL_Q),
    ('O', Pseudo::CAPITAL_Q),
    ('6', Pseudo::CAPITAL_T),
    ('v', Pseudo::SMALL_T_WITH_CIRCUMFLEX),
    ('V', Pseudo::CAPITAL_T_WITH_CIRCUMFLEX),
    ('T', Pseudo::SMALL_T_WITH_LINE),
    ('7', Pseudo::CAPITAL_T_WITH_LINE),
    ('8', Pseudo::CAPITAL_D),
    ('D', Pseudo::SMALL_D_WITH_LINE),
    ('9', Pseudo::CAPITAL_D_WITH_LINE),
    ('=', Pseudo::SUFFIX_PRONOUN_SEPARATOR),
    ('L', raw('⸥')),
];

pub(crate) const TRLIT_CG_TIMES_2023: &[ImportEntry] = &[
    ('A', Pseudo::SMALL_ALEPH),
    ('i', Pseudo::SMALL_YOD),
    ('I', Pseudo::CAPITAL_YOD),
    ('e', Pseudo::SMALL_E),
    ('E', Pseudo::CAPITAL_E),
    ('Y', Pseudo::SMALL_I_WITH_DIAERESIS),
    ('*', Pseudo::RIGHT_HALF_RING),
    ('a', Pseudo::SMALL_AIN),
    ('0', Pseudo::CAPITAL_H),
    ('H', Pseudo::SMALL_H_WITH_DOT),
    ('1', Pseudo::CAPITAL_H_WITH_DOT),
    ('x', Pseudo::SMALL_H_WITH_BREVE),
    ('2', Pseudo::CAPITAL_H_WITH_BREVE),
    ('u', Pseudo::SMALL_H_WITH_CIRCUMFLEX),
    ('^', Pseudo::CAPITAL_H_WITH_CIRCUMFLEX),
    ('X', Pseudo::SMALL_H_WITH_LINE),
    ('3', Pseudo::CAPITAL_H_WITH_LINE),
    ('c', Pseudo::SMALL_S),
    ('4', Pseudo::CAPITAL_S),
    ('C', Pseudo::CAPITAL_S),
    ('S', Pseudo::SMALL_S_WITH_CARON),
    ('5', Pseudo::CAPITAL_S_WITH_CARON),
    ('q', Pseudo::SMALL_Q),
    ('o', Pseudo::SMALL_Q),
    ('Q', Pseudo::CAPITAL_Q),
    ('O', Pseudo::CAPITAL_Q),
    ('6', Pseudo::CAPITAL_T),
    ('v', Pseudo::SMALL_T_WITH_CIRCUMFLEX),
    ('V', Pseudo::CAPITAL_T_WITH_CIRCUMFLEX),
    ('T', Pseudo::SMALL_T_WITH_LINE),
    ('@', Pseudo::SMALL_T_WITH_LINE),
    ('7', Pseudo::CAPITAL_T_WITH_LINE),
    ('!', Pseudo::SMALL_D),
    ('8', Pseudo::CAPITAL_D),
    ('D', Pseudo::SMALL_D_WITH_LINE),
    ('$', Pseudo::SMALL_D_WITH_LINE),
    ('9', Pseudo::CAPITAL_D_WITH_LINE),
    ('=', Pseudo::SUFFIX_PRONOUN_SEPARATOR),
    ('~', Pseudo::TOP_LEFT_HALF_BRACKET),
    ('#', Pseudo::TOP_RIGHT_HALF_BRACKET),
    ('<', Pseudo::LEFT_ANGLE_BRACKET),
    ('>', Pseudo::RIGHT_ANGLE_BRACKET),
    ('L', raw('⸥')),
];

// Private-use code points in U+EC40..U+EC84 come from older Egyptological
// Unicode fonts.
pub(crate) const UNICODE: &[ImportEntry] = &[
    ('ꜣ', Pseudo::SMALL_ALEPH),
    ('Ꜣ', Pseudo::CAPITAL_ALEPH),
    ('ȝ', Pseudo::SMALL_ALEPH),
    ('Ȝ', Pseudo::CAPITAL_ALEPH),
    ('\u{EC42}', Pseudo::SMALL_ALEPH),
    ('ꞽ', Pseudo::SMALL_YOD),
    ('Ꞽ', Pseudo::CAPITAL_YOD),
    ('ỉ', Pseudo::SMALL_YOD),
    ('Ỉ', Pseudo::CAPITAL_YOD),
    ('\u{EC46}', Pseudo::SMALL_YOD),
    ('\u{EC49}', Pseudo::CAPITAL_YOD),
    ('e', Pseudo::SMALL_E),
    ('E', Pseudo::CAPITAL_E),
    ('\u{EC44}', Pseudo::SMALL_I_WITH_INVERTED_BREVE),
    ('\u{EC83}', Pseudo::CAPITAL_I_WITH_INVERTED_BREVE),
    ('ʾ', Pseudo::RIGHT_HALF_RING),
    ('ꜥ', Pseudo::SMALL_AIN),
    ('Ꜥ', Pseudo::CAPITAL_AIN),
    ('ʿ', Pseudo::SMALL_AIN),
    ('\u{EC43}', Pseudo::SMALL_AIN),
    ('\u{EC45}', Pseudo::SMALL_U_WITH_INVERTED_BREVE),
    ('\u{EC84}', Pseudo::CAPITAL_U_WITH_INVERTED_BREVE),
    ('H', Pseudo::CAPITAL_H),
    ('ḥ', Pseudo::SMALL_H_WITH_DOT),
    ('Ḥ', Pseudo::CAPITAL_H_WITH_DOT),
    ('ḫ', Pseudo::SMALL_H_WITH_BREVE),
    ('Ḫ', Pseudo::CAPITAL_H_WITH_BREVE),
    ('\u{EC47}', Pseudo::SMALL_H_WITH_CIRCUMFLEX),
    ('\u{EC48}', Pseudo::CAPITAL_H_WITH_CIRCUMFLEX),
    ('ẖ', Pseudo::SMALL_H_WITH_LINE),
    ('\u{EC40}', Pseudo::CAPITAL_H_WITH_LINE),
    ('S', Pseudo::CAPITAL_S),
    ('ś', Pseudo::SMALL_S),
    ('Ś', Pseudo::CAPITAL_S),
    ('š', Pseudo::SMALL_S_WITH_CARON),
    ('Š', Pseudo::CAPITAL_S_WITH_CARON),
    ('q', Pseudo::SMALL_Q),
    ('Q', Pseudo::CAPITAL_Q),
    ('ḳ', Pseudo::SMALL_Q),
    ('Ḳ', Pseudo::CAPITAL_Q),
    ('T', Pseudo::CAPITAL_T),
    ('ṱ', Pseudo::SMALL_T_WITH_CIRCUMFLEX),
    ('Ṱ', Pseudo::CAPITAL_T_WITH_CIRCUMFLEX),
    ('ṯ', Pseudo::SMALL_T_WITH_LINE),
    ('Ṯ', Pseudo::CAPITAL_T_WITH_LINE),
    ('č', Pseudo::SMALL_T_WITH_LINE),
    ('Č', Pseudo::CAPITAL_T_WITH_LINE),
    ('D', Pseudo::CAPITAL_D),
    ('ṭ', Pseudo::SMALL_D),
    ('Ṭ', Pseudo::CAPITAL_D),
    ('ḏ', Pseudo::SMALL_D_WITH_LINE),
    ('Ḏ', Pseudo::CAPITAL_D_WITH_LINE),
    ('\u{EC41}', Pseudo::SMALL_D_WITH_LINE),
    ('.', Pseudo::DOT),
    ('·', Pseudo::MIDDLE_DOT),
    (':', Pseudo::COLON),
    ('⸗', Pseudo::SUFFIX_PRONOUN_SEPARATOR),
    ('⸢', Pseudo::TOP_LEFT_HALF_BRACKET),
    ('⸣', Pseudo::TOP_RIGHT_HALF_BRACKET),
    ('⟨', Pseudo::LEFT_ANGLE_BRACKET),
    ('⟩', Pseudo::RIGHT_ANGLE_BRACKET),
];

pub(crate) const UNICODE_S_FOR_Z: &[ImportEntry] = &[
    ('s', Pseudo::SMALL_Z),
    ('S', Pseudo::CAPITAL_Z),
    ('ś', Pseudo::SMALL_S),
    ('Ś', Pseudo::CAPITAL_S),
];

pub(crate) const UMSCHRIFT_TTN_S_FOR_Z: &[ImportEntry] = &[
    ('s', Pseudo::SMALL_Z),
    ('c', Pseudo::CAPITAL_Z),
    ('Ü', Pseudo::CAPITAL_Z),
];

pub(crate) const TRANSLITERATION_S_FOR_Z: &[ImportEntry] = &[
    ('s', Pseudo::SMALL_Z),
    ('%', Pseudo::CAPITAL_Z),
];

/// Shared by both Trlit_CG Times revisions.
pub(crate) const TRLIT_CG_TIMES_S_FOR_Z: &[ImportEntry] = &[
    ('s', Pseudo::SMALL_Z),
    ('4', Pseudo::CAPITAL_Z),
];
