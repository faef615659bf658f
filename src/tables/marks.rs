//! Combining marks that fold into the letter before them.

use crate::Pseudo;

pub(crate) const COMBINING_MACRON_BELOW: char = '\u{331}';
pub(crate) const COMBINING_CIRCUMFLEX_BELOW: char = '\u{32D}';
pub(crate) const COMBINING_INVERTED_BREVE_BELOW: char = '\u{32F}';
pub(crate) const COMBINING_RIGHT_HALF_RING_ABOVE: char = '\u{357}';
// Fonts of the Cyrillic range draw the psili like the half ring.
pub(crate) const COMBINING_CYRILLIC_PSILI_PNEUMATA: char = '\u{486}';
pub(crate) const COMBINING_DOT_BELOW: char = '\u{323}';

pub(crate) fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch,
        COMBINING_MACRON_BELOW
            | COMBINING_CIRCUMFLEX_BELOW
            | COMBINING_INVERTED_BREVE_BELOW
            | COMBINING_RIGHT_HALF_RING_ABOVE
            | COMBINING_CYRILLIC_PSILI_PNEUMATA
            | COMBINING_DOT_BELOW
    )
}

/// Returns the letter that `base` followed by `mark` stands for.
///
/// `None` means `mark` is not a known mark, or that it does not combine
/// with `base`.
pub(crate) fn compose(base: char, mark: char) -> Option<Pseudo> {
    let letter = match (mark, base) {
        (COMBINING_MACRON_BELOW, 'h') => Pseudo::SMALL_H_WITH_LINE,
        (COMBINING_MACRON_BELOW, 'H') => Pseudo::CAPITAL_H_WITH_LINE,
        (COMBINING_MACRON_BELOW, 't') => Pseudo::SMALL_T_WITH_LINE,
        (COMBINING_MACRON_BELOW, 'T') => Pseudo::CAPITAL_T_WITH_LINE,
        (COMBINING_MACRON_BELOW, 'd') => Pseudo::SMALL_D_WITH_LINE,
        (COMBINING_MACRON_BELOW, 'D') => Pseudo::CAPITAL_D_WITH_LINE,

        (COMBINING_CIRCUMFLEX_BELOW, 'h') => Pseudo::SMALL_H_WITH_CIRCUMFLEX,
        (COMBINING_CIRCUMFLEX_BELOW, 'H') => Pseudo::CAPITAL_H_WITH_CIRCUMFLEX,
        (COMBINING_CIRCUMFLEX_BELOW, 't') => Pseudo::SMALL_T_WITH_CIRCUMFLEX,
        (COMBINING_CIRCUMFLEX_BELOW, 'T') => Pseudo::CAPITAL_T_WITH_CIRCUMFLEX,

        (COMBINING_INVERTED_BREVE_BELOW, 'i') => Pseudo::SMALL_I_WITH_INVERTED_BREVE,
        (COMBINING_INVERTED_BREVE_BELOW, 'I') => Pseudo::CAPITAL_I_WITH_INVERTED_BREVE,
        (COMBINING_INVERTED_BREVE_BELOW, 'u') => Pseudo::SMALL_U_WITH_INVERTED_BREVE,
        (COMBINING_INVERTED_BREVE_BELOW, 'U') => Pseudo::CAPITAL_U_WITH_INVERTED_BREVE,

        (COMBINING_RIGHT_HALF_RING_ABOVE | COMBINING_CYRILLIC_PSILI_PNEUMATA, 'i' | 'ı') => {
            Pseudo::SMALL_YOD
        }
        (COMBINING_RIGHT_HALF_RING_ABOVE | COMBINING_CYRILLIC_PSILI_PNEUMATA, 'I') => {
            Pseudo::CAPITAL_YOD
        }

        (COMBINING_DOT_BELOW, 'k') => Pseudo::SMALL_Q,
        (COMBINING_DOT_BELOW, 'K') => Pseudo::CAPITAL_Q,
        (COMBINING_DOT_BELOW, 'h') => Pseudo::SMALL_H_WITH_DOT,
        (COMBINING_DOT_BELOW, 'H') => Pseudo::CAPITAL_H_WITH_DOT,
        (COMBINING_DOT_BELOW, 't') => Pseudo::SMALL_D,
        (COMBINING_DOT_BELOW, 'T') => Pseudo::CAPITAL_D,
        (COMBINING_DOT_BELOW, 'č') => Pseudo::SMALL_D_WITH_LINE,
        (COMBINING_DOT_BELOW, 'Č') => Pseudo::CAPITAL_D_WITH_LINE,

        _ => return None,
    };
    Some(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_known_pairs() {
        assert_eq!(Some(Pseudo::CAPITAL_H_WITH_LINE), compose('H', COMBINING_MACRON_BELOW));
        assert_eq!(Some(Pseudo::SMALL_YOD), compose('ı', COMBINING_CYRILLIC_PSILI_PNEUMATA));
        assert_eq!(Some(Pseudo::SMALL_D_WITH_LINE), compose('č', COMBINING_DOT_BELOW));
    }

    #[test]
    fn test_compose_rejects_other_bases() {
        assert!(is_combining_mark(COMBINING_INVERTED_BREVE_BELOW));
        assert_eq!(None, compose('x', COMBINING_INVERTED_BREVE_BELOW));
        assert_eq!(None, compose('h', '\u{301}'));
        assert!(!is_combining_mark('\u{301}'));
    }
}
