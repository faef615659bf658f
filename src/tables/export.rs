//! Canonical codepoint to output character, per format.
//!
//! Format tables are layered over `COMMON`. The option tables are consulted
//! before either, and only when their option is set.

use super::{ExportEntry, MultiEntry};
use crate::Pseudo;

const fn raw(ch: char) -> Pseudo {
    Pseudo::from_char(ch)
}

pub(crate) const COMMON: &[ExportEntry] = &[
    (Pseudo::SMALL_I_WITH_DIAERESIS, 'ï'),
    (Pseudo::CAPITAL_I_WITH_DIAERESIS, 'Ï'),
    (Pseudo::DOT, '.'),
    (Pseudo::COLON, ':'),
    (Pseudo::SUFFIX_PRONOUN_SEPARATOR, '='),
    (Pseudo::SMALL_B, 'b'),
    (Pseudo::SMALL_D, 'd'),
    (Pseudo::SMALL_F, 'f'),
    (Pseudo::SMALL_G, 'g'),
    (Pseudo::SMALL_H, 'h'),
    (Pseudo::SMALL_K, 'k'),
    (Pseudo::SMALL_L, 'l'),
    (Pseudo::SMALL_M, 'm'),
    (Pseudo::SMALL_N, 'n'),
    (Pseudo::SMALL_P, 'p'),
    (Pseudo::SMALL_Q, 'q'),
    (Pseudo::SMALL_R, 'r'),
    (Pseudo::SMALL_S, 's'),
    (Pseudo::SMALL_T, 't'),
    (Pseudo::SMALL_W, 'w'),
    (Pseudo::SMALL_Y, 'y'),
    (Pseudo::SMALL_Z, 'z'),
    (Pseudo::CAPITAL_B, 'B'),
    (Pseudo::CAPITAL_F, 'F'),
    (Pseudo::CAPITAL_G, 'G'),
    (Pseudo::CAPITAL_K, 'K'),
    (Pseudo::CAPITAL_L, 'L'),
    (Pseudo::CAPITAL_M, 'M'),
    (Pseudo::CAPITAL_N, 'N'),
    (Pseudo::CAPITAL_P, 'P'),
    (Pseudo::CAPITAL_Q, 'Q'),
    (Pseudo::CAPITAL_R, 'R'),
    (Pseudo::CAPITAL_W, 'W'),
    (Pseudo::CAPITAL_Y, 'Y'),
    (Pseudo::CAPITAL_Z, 'Z'),
];

/// Applies to every format when `J_FOR_YOD` is set.
pub(crate) const J_FOR_YOD: &[ExportEntry] = &[
    (Pseudo::SMALL_YOD, 'j'),
    (Pseudo::CAPITAL_YOD, 'J'),
];

pub(crate) const UNICODE: &[ExportEntry] = &[
    (Pseudo::SMALL_ALEPH, 'ꜣ'),
    (Pseudo::CAPITAL_ALEPH, 'Ꜣ'),
    (Pseudo::SMALL_YOD, 'ꞽ'),
    (Pseudo::CAPITAL_YOD, 'Ꞽ'),
    (Pseudo::SMALL_E, 'e'),
    (Pseudo::CAPITAL_E, 'E'),
    (Pseudo::SMALL_Y, 'y'),
    (Pseudo::CAPITAL_Y, 'Y'),
    (Pseudo::SMALL_I_WITH_DIAERESIS, 'ï'),
    (Pseudo::CAPITAL_I_WITH_DIAERESIS, 'Ï'),
    (Pseudo::RIGHT_HALF_RING, 'ʾ'),
    (Pseudo::SMALL_AIN, 'ꜥ'),
    (Pseudo::CAPITAL_AIN, 'Ꜥ'),
    (Pseudo::SMALL_W, 'w'),
    (Pseudo::CAPITAL_W, 'W'),
    (Pseudo::SMALL_B, 'b'),
    (Pseudo::CAPITAL_B, 'B'),
    (Pseudo::SMALL_P, 'p'),
    (Pseudo::CAPITAL_P, 'P'),
    (Pseudo::SMALL_F, 'f'),
    (Pseudo::CAPITAL_F, 'F'),
    (Pseudo::SMALL_M, 'm'),
    (Pseudo::CAPITAL_M, 'M'),
    (Pseudo::SMALL_N, 'n'),
    (Pseudo::CAPITAL_N, 'N'),
    (Pseudo::SMALL_R, 'r'),
    (Pseudo::CAPITAL_R, 'R'),
    (Pseudo::SMALL_L, 'l'),
    (Pseudo::CAPITAL_L, 'L'),
    (Pseudo::SMALL_H, 'h'),
    (Pseudo::CAPITAL_H, 'H'),
    (Pseudo::SMALL_H_WITH_DOT, 'ḥ'),
    (Pseudo::CAPITAL_H_WITH_DOT, 'Ḥ'),
    (Pseudo::SMALL_H_WITH_BREVE, 'ḫ'),
    (Pseudo::CAPITAL_H_WITH_BREVE, 'Ḫ'),
    (Pseudo::SMALL_H_WITH_LINE, 'ẖ'),
    (Pseudo::SMALL_Z, 'z'),
    (Pseudo::CAPITAL_Z, 'Z'),
    (Pseudo::SMALL_S, 's'),
    (Pseudo::CAPITAL_S, 'S'),
    (Pseudo::SMALL_S_WITH_CARON, 'š'),
    (Pseudo::CAPITAL_S_WITH_CARON, 'Š'),
    (Pseudo::SMALL_Q, 'q'),
    (Pseudo::CAPITAL_Q, 'Q'),
    (Pseudo::SMALL_K, 'k'),
    (Pseudo::CAPITAL_K, 'K'),
    (Pseudo::SMALL_G, 'g'),
    (Pseudo::CAPITAL_G, 'G'),
    (Pseudo::SMALL_T, 't'),
    (Pseudo::CAPITAL_T, 'T'),
    (Pseudo::SMALL_T_WITH_CIRCUMFLEX, 'ṱ'),
    (Pseudo::CAPITAL_T_WITH_CIRCUMFLEX, 'Ṱ'),
    (Pseudo::SMALL_T_WITH_LINE, 'ṯ'),
    (Pseudo::CAPITAL_T_WITH_LINE, 'Ṯ'),
    (Pseudo::SMALL_D, 'd'),
    (Pseudo::CAPITAL_D, 'D'),
    (Pseudo::SMALL_D_WITH_LINE, 'ḏ'),
    (Pseudo::CAPITAL_D_WITH_LINE, 'Ḏ'),
    (Pseudo::DOT, '.'),
    (Pseudo::MIDDLE_DOT, '·'),
    (Pseudo::COLON, ':'),
    (Pseudo::SUFFIX_PRONOUN_SEPARATOR, '⸗'),
    (Pseudo::TOP_LEFT_HALF_BRACKET, '⸢'),
    (Pseudo::TOP_RIGHT_HALF_BRACKET, '⸣'),
    (Pseudo::LEFT_ANGLE_BRACKET, '⟨'),
    (Pseudo::RIGHT_ANGLE_BRACKET, '⟩'),
];

// Letters without a precomposed form are written as a base letter followed
// by a combining mark.
pub(crate) const UNICODE_MULTI: &[MultiEntry] = &[
    (Pseudo::SMALL_I_WITH_INVERTED_BREVE, &['i', '\u{32F}']),
    (Pseudo::CAPITAL_I_WITH_INVERTED_BREVE, &['I', '\u{32F}']),
    (Pseudo::SMALL_U_WITH_INVERTED_BREVE, &['u', '\u{32F}']),
    (Pseudo::CAPITAL_U_WITH_INVERTED_BREVE, &['U', '\u{32F}']),
    (Pseudo::CAPITAL_H_WITH_LINE, &['H', '\u{331}']),
    (Pseudo::SMALL_H_WITH_CIRCUMFLEX, &['h', '\u{32D}']),
    (Pseudo::CAPITAL_H_WITH_CIRCUMFLEX, &['H', '\u{32D}']),
];

pub(crate) const UNICODE_K_WITH_DOT: &[ExportEntry] = &[
    (Pseudo::SMALL_Q, 'ḳ'),
    (Pseudo::CAPITAL_Q, 'Ḳ'),
];

pub(crate) const UNICODE_Z_FOR_S: &[ExportEntry] = &[
    (Pseudo::SMALL_S, 'ś'),
    (Pseudo::CAPITAL_S, 'Ś'),
    (Pseudo::SMALL_Z, 's'),
    (Pseudo::CAPITAL_Z, 'S'),
];

pub(crate) const TRANSLITERATION: &[ExportEntry] = &[
    (Pseudo::SMALL_ALEPH, 'A'),
    (Pseudo::SMALL_YOD, 'i'),
    (Pseudo::CAPITAL_YOD, 'I'),
    (Pseudo::SMALL_E, 'e'),
    (Pseudo::CAPITAL_E, 'E'),
    (Pseudo::SMALL_AIN, 'a'),
    (Pseudo::CAPITAL_H, '!'),
    (Pseudo::SMALL_H_WITH_DOT, 'H'),
    (Pseudo::CAPITAL_H_WITH_DOT, '@'),
    (Pseudo::SMALL_H_WITH_BREVE, 'x'),
    (Pseudo::CAPITAL_H_WITH_BREVE, '#'),
    (Pseudo::SMALL_H_WITH_CIRCUMFLEX, 'V'),
    (Pseudo::SMALL_H_WITH_LINE, 'X'),
    (Pseudo::CAPITAL_H_WITH_LINE, '$'),
    (Pseudo::CAPITAL_S, '%'),
    (Pseudo::SMALL_S_WITH_CARON, 'S'),
    (Pseudo::CAPITAL_S_WITH_CARON, '^'),
    (Pseudo::CAPITAL_T, '&'),
    (Pseudo::SMALL_T_WITH_CIRCUMFLEX, 'v'),
    (Pseudo::SMALL_T_WITH_LINE, 'T'),
    (Pseudo::CAPITAL_T_WITH_LINE, '*'),
    (Pseudo::CAPITAL_D, '_'),
    (Pseudo::SMALL_D_WITH_LINE, 'D'),
    (Pseudo::CAPITAL_D_WITH_LINE, '+'),
];

/// Shared by the Transliteration font and both Trlit_CG Times revisions.
pub(crate) const LEGACY_Z_FOR_S: &[ExportEntry] = &[
    (Pseudo::SMALL_S, 'c'),
    (Pseudo::CAPITAL_S, 'C'),
    (Pseudo::SMALL_Z, 's'),
    (Pseudo::SMALL_Q, 'o'),
    (Pseudo::CAPITAL_Q, 'O'),
];

pub(crate) const TRANSLITERATION_Z_FOR_S: &[ExportEntry] = &[(Pseudo::CAPITAL_Z, '%')];

pub(crate) const TRLIT_CG_TIMES_Z_FOR_S: &[ExportEntry] = &[(Pseudo::CAPITAL_Z, '4')];

pub(crate) const UMSCHRIFT_TTN: &[ExportEntry] = &[
    (Pseudo::SMALL_ALEPH, '#'),
    (Pseudo::SMALL_YOD, '|'),
    (Pseudo::CAPITAL_YOD, 'Ê'),
    (Pseudo::SMALL_E, 'ê'),
    (Pseudo::CAPITAL_E, '\u{B5}'),
    (Pseudo::SMALL_I_WITH_DIAERESIS, '~'),
    (Pseudo::SMALL_I_WITH_INVERTED_BREVE, '+'),
    (Pseudo::RIGHT_HALF_RING, 'A'),
    (Pseudo::SMALL_AIN, 'o'),
    (Pseudo::SMALL_U_WITH_INVERTED_BREVE, '_'),
    (Pseudo::CAPITAL_H, '!'),
    (Pseudo::SMALL_H_WITH_DOT, 'H'),
    (Pseudo::CAPITAL_H_WITH_DOT, 'O'),
    (Pseudo::SMALL_H_WITH_BREVE, 'X'),
    (Pseudo::CAPITAL_H_WITH_BREVE, '%'),
    (Pseudo::SMALL_H_WITH_CIRCUMFLEX, '§'),
    (Pseudo::SMALL_H_WITH_LINE, 'x'),
    (Pseudo::CAPITAL_H_WITH_LINE, '$'),
    (Pseudo::CAPITAL_S, 'c'),
    (Pseudo::SMALL_S_WITH_CARON, 'S'),
    (Pseudo::CAPITAL_S_WITH_CARON, 'C'),
    (Pseudo::CAPITAL_T, 'v'),
    (Pseudo::SMALL_T_WITH_CIRCUMFLEX, 'ß'),
    (Pseudo::CAPITAL_T_WITH_CIRCUMFLEX, '£'),
    (Pseudo::SMALL_T_WITH_LINE, 'T'),
    (Pseudo::CAPITAL_T_WITH_LINE, 'V'),
    (Pseudo::CAPITAL_D, 'e'),
    (Pseudo::SMALL_D_WITH_LINE, 'D'),
    (Pseudo::CAPITAL_D_WITH_LINE, 'E'),
    (Pseudo::TOP_LEFT_HALF_BRACKET, '&'),
    (Pseudo::TOP_RIGHT_HALF_BRACKET, '\\'),
    // ASCII characters whose own slot the font draws as a sign
    (raw('A'), 'À'),
    (raw('c'), '†'),
    (raw('_'), '¡'),
    (raw('+'), 'Ë'),
    (raw('O'), 'Ò'),
    (raw('o'), 'Ó'),
    (raw('~'), 'Š'),
];

pub(crate) const TRLIT_CG_TIMES: &[ExportEntry] = &[
    (Pseudo::SMALL_ALEPH, 'A'),
    (Pseudo::SMALL_YOD, 'i'),
    (Pseudo::CAPITAL_YOD, 'I'),
    (Pseudo::SMALL_E, 'e'),
    (Pseudo::CAPITAL_E, 'E'),
    (Pseudo::SMALL_AIN, 'a'),
    (Pseudo::CAPITAL_H, '0'),
    (Pseudo::SMALL_H_WITH_DOT, 'H'),
    (Pseudo::CAPITAL_H_WITH_DOT, '1'),
    (Pseudo::SMALL_H_WITH_BREVE, 'x'),
    (Pseudo::CAPITAL_H_WITH_BREVE, '2'),
    (Pseudo::SMALL_H_WITH_LINE, 'X'),
    (Pseudo::CAPITAL_H_WITH_LINE, '3'),
    (Pseudo::CAPITAL_S, '4'),
    (Pseudo::SMALL_S_WITH_CARON, 'S'),
    (Pseudo::CAPITAL_S_WITH_CARON, '5'),
    (Pseudo::CAPITAL_T, '6'),
    (Pseudo::SMALL_T_WITH_CIRCUMFLEX, 'v'),
    (Pseudo::CAPITAL_T_WITH_CIRCUMFLEX, 'V'),
    (Pseudo::SMALL_T_WITH_LINE, 'T'),
    (Pseudo::CAPITAL_T_WITH_LINE, '7'),
    (Pseudo::CAPITAL_D, '8'),
    (Pseudo::SMALL_D_WITH_LINE, 'D'),
    (Pseudo::CAPITAL_D_WITH_LINE, '9'),
    (raw('⸥'), 'L'),
];

/// Signs added in the 2023 revision, layered over [`TRLIT_CG_TIMES`].
pub(crate) const TRLIT_CG_TIMES_2023: &[ExportEntry] = &[
    (Pseudo::SMALL_I_WITH_DIAERESIS, 'Y'),
    (Pseudo::RIGHT_HALF_RING, '*'),
    (Pseudo::SMALL_H_WITH_CIRCUMFLEX, 'u'),
    (Pseudo::CAPITAL_H_WITH_CIRCUMFLEX, '^'),
    (Pseudo::TOP_LEFT_HALF_BRACKET, '~'),
    (Pseudo::TOP_RIGHT_HALF_BRACKET, '#'),
    (Pseudo::LEFT_ANGLE_BRACKET, '<'),
    (Pseudo::RIGHT_ANGLE_BRACKET, '>'),
];
