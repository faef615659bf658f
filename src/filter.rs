//! Normalization of canonical sequences for comparison and search.

use crate::{FilterFlags, Pseudo, UmschStr, UmschString};

const OPENING_PARENTHESIS: Pseudo = Pseudo::from_char('(');
const CLOSING_PARENTHESIS: Pseudo = Pseudo::from_char(')');
const SPACE: Pseudo = Pseudo::from_char(' ');

fn is_hyphen(p: Pseudo) -> bool {
    matches!(p.into_inner(), 0x2D | 0x2010..=0x2015 | 0x2212)
}

fn is_bracket(p: Pseudo) -> bool {
    matches!(
        p,
        Pseudo::TOP_LEFT_HALF_BRACKET
            | Pseudo::TOP_RIGHT_HALF_BRACKET
            | Pseudo::LEFT_ANGLE_BRACKET
            | Pseudo::RIGHT_ANGLE_BRACKET
    ) || matches!(
        p.into_inner(),
        0x28 | 0x29 | 0x5B | 0x5D | 0x3C | 0x3E | 0x7B | 0x7D | 0x7C
    )
}

fn substitute(p: Pseudo, flags: FilterFlags) -> Option<Pseudo> {
    if flags.contains(FilterFlags::HYPHENS) && is_hyphen(p) {
        return Some(SPACE);
    }
    if flags.contains(FilterFlags::REPLACE_Z) {
        match p {
            Pseudo::SMALL_Z => return Some(Pseudo::SMALL_S),
            Pseudo::CAPITAL_Z => return Some(Pseudo::CAPITAL_S),
            _ => {}
        }
    }
    if flags.contains(FilterFlags::REPLACE_I_WITH_DIAERESIS) {
        match p {
            Pseudo::SMALL_I_WITH_DIAERESIS => return Some(Pseudo::SMALL_Y),
            Pseudo::CAPITAL_I_WITH_DIAERESIS => return Some(Pseudo::CAPITAL_Y),
            _ => {}
        }
    }
    if flags.contains(FilterFlags::REPLACE_INVERTED_BREVES) {
        match p {
            Pseudo::SMALL_I_WITH_INVERTED_BREVE => return Some(Pseudo::SMALL_YOD),
            Pseudo::CAPITAL_I_WITH_INVERTED_BREVE => return Some(Pseudo::CAPITAL_YOD),
            Pseudo::SMALL_U_WITH_INVERTED_BREVE => return Some(Pseudo::SMALL_W),
            Pseudo::CAPITAL_U_WITH_INVERTED_BREVE => return Some(Pseudo::CAPITAL_W),
            _ => {}
        }
    }
    if flags.contains(FilterFlags::REPLACE_UNCERTAIN_CONSONANT) && p == Pseudo::RIGHT_HALF_RING {
        return Some(Pseudo::SMALL_ALEPH);
    }
    None
}

fn is_removed(p: Pseudo, flags: FilterFlags) -> bool {
    let morph = matches!(p, Pseudo::DOT | Pseudo::COLON | Pseudo::MIDDLE_DOT);
    let punct = p == Pseudo::DOT || matches!(p.into_inner(), 0x2C | 0x3F | 0x21 | 0x22);
    (flags.contains(FilterFlags::MORPH) && morph)
        || (flags.contains(FilterFlags::SUFF_PRON) && p == Pseudo::SUFFIX_PRONOUN_SEPARATOR)
        || (flags.contains(FilterFlags::BRACKETS) && is_bracket(p))
        || (flags.contains(FilterFlags::PUNCT) && punct)
        || (flags.contains(FilterFlags::DIGITS) && matches!(p.into_inner(), 0x30..=0x39))
}

pub(crate) fn filter(seq: &UmschStr, flags: FilterFlags) -> UmschString {
    let facultative = flags.contains(FilterFlags::FACULTATIVE);
    let mut inside = false;
    let mut filtered = UmschString::with_capacity(seq.len());

    for p in seq.iter() {
        if facultative && inside {
            // the closing parenthesis goes too
            inside = p != CLOSING_PARENTHESIS;
        } else if facultative && p == OPENING_PARENTHESIS {
            inside = true;
        } else if let Some(substitute) = substitute(p, flags) {
            filtered.push(substitute);
        } else if !is_removed(p, flags) {
            filtered.push(p);
        }
    }

    if flags.contains(FilterFlags::LOWER) {
        filtered = filtered.to_lower();
    }
    tracing::trace!(?flags, input = seq.len(), output = filtered.len(), "filtered");
    filtered
}
