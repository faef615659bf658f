use std::{convert::TryFrom, fmt};

/// The `Pseudo` type represents one canonical Egyptological symbol.
///
/// A `Pseudo` holds a Unicode scalar value taken from one of three ranges:
/// plain ASCII, the private-use "pseudo" bands reserved for transliteration
/// letters and punctuation, or any other character passed through unchanged
/// from the source text. See [`Band`].
///
/// Cased letters live in a contiguous part of the letter band, with each
/// uppercase letter on an even value directly followed by its lowercase
/// counterpart. Sorting by the numeric value therefore sorts by the
/// Egyptological alphabet, with the uppercase form first.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Pseudo(u32);

/// The range a [`Pseudo`] value belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Band {
    /// `U+0000..=U+007F`, used for plain letters, digits and punctuation.
    Ascii,
    /// `U+F000..=U+F0FF`, morphological markers and editorial brackets.
    Punctuation,
    /// `U+F100..=U+F1FF`, transliteration letters.
    Letter,
    /// Any other character, kept verbatim from the source text.
    PassThrough,
}

pub(crate) const PUNCTUATION_BAND_START: u32 = 0xF000;
pub(crate) const PUNCTUATION_BAND_END: u32 = 0xF0FF;
pub(crate) const LETTER_BAND_START: u32 = 0xF100;
pub(crate) const LETTER_BAND_END: u32 = 0xF1FF;

const FIRST_CASED: u32 = 0xF100;
const LAST_CASED: u32 = 0xF143;
const CASE_BIT: u32 = 1;

#[allow(missing_docs)]
impl Pseudo {
    pub const CAPITAL_ALEPH: Pseudo = Pseudo(0xF100);
    pub const SMALL_ALEPH: Pseudo = Pseudo(0xF101);
    pub const CAPITAL_YOD: Pseudo = Pseudo(0xF102);
    pub const SMALL_YOD: Pseudo = Pseudo(0xF103);
    pub const CAPITAL_E: Pseudo = Pseudo(0xF104);
    pub const SMALL_E: Pseudo = Pseudo(0xF105);
    /// Long vowel written `Y`, the collapsed form of `Jj`.
    pub const CAPITAL_Y: Pseudo = Pseudo(0xF106);
    /// Long vowel written `y`, the collapsed form of `jj`.
    pub const SMALL_Y: Pseudo = Pseudo(0xF107);
    pub const CAPITAL_I_WITH_DIAERESIS: Pseudo = Pseudo(0xF108);
    pub const SMALL_I_WITH_DIAERESIS: Pseudo = Pseudo(0xF109);
    pub const CAPITAL_I_WITH_INVERTED_BREVE: Pseudo = Pseudo(0xF10A);
    pub const SMALL_I_WITH_INVERTED_BREVE: Pseudo = Pseudo(0xF10B);
    /// The uncertain consonant `ʾ`. It sits inside the letter band but has no case.
    pub const RIGHT_HALF_RING: Pseudo = Pseudo(0xF10C);
    pub const CAPITAL_AIN: Pseudo = Pseudo(0xF10E);
    pub const SMALL_AIN: Pseudo = Pseudo(0xF10F);
    pub const CAPITAL_W: Pseudo = Pseudo(0xF112);
    pub const SMALL_W: Pseudo = Pseudo(0xF113);
    pub const CAPITAL_U_WITH_INVERTED_BREVE: Pseudo = Pseudo(0xF114);
    pub const SMALL_U_WITH_INVERTED_BREVE: Pseudo = Pseudo(0xF115);
    pub const CAPITAL_B: Pseudo = Pseudo(0xF116);
    pub const SMALL_B: Pseudo = Pseudo(0xF117);
    pub const CAPITAL_P: Pseudo = Pseudo(0xF118);
    pub const SMALL_P: Pseudo = Pseudo(0xF119);
    pub const CAPITAL_F: Pseudo = Pseudo(0xF11A);
    pub const SMALL_F: Pseudo = Pseudo(0xF11B);
    pub const CAPITAL_M: Pseudo = Pseudo(0xF11C);
    pub const SMALL_M: Pseudo = Pseudo(0xF11D);
    pub const CAPITAL_N: Pseudo = Pseudo(0xF11E);
    pub const SMALL_N: Pseudo = Pseudo(0xF11F);
    pub const CAPITAL_R: Pseudo = Pseudo(0xF120);
    pub const SMALL_R: Pseudo = Pseudo(0xF121);
    pub const CAPITAL_L: Pseudo = Pseudo(0xF122);
    pub const SMALL_L: Pseudo = Pseudo(0xF123);
    pub const CAPITAL_H: Pseudo = Pseudo(0xF124);
    pub const SMALL_H: Pseudo = Pseudo(0xF125);
    pub const CAPITAL_H_WITH_DOT: Pseudo = Pseudo(0xF126);
    pub const SMALL_H_WITH_DOT: Pseudo = Pseudo(0xF127);
    pub const CAPITAL_H_WITH_BREVE: Pseudo = Pseudo(0xF128);
    pub const SMALL_H_WITH_BREVE: Pseudo = Pseudo(0xF129);
    /// `H̭`, with the circumflex below.
    pub const CAPITAL_H_WITH_CIRCUMFLEX: Pseudo = Pseudo(0xF12A);
    /// `h̭`, with the circumflex below.
    pub const SMALL_H_WITH_CIRCUMFLEX: Pseudo = Pseudo(0xF12B);
    /// `H̱`, with the line below.
    pub const CAPITAL_H_WITH_LINE: Pseudo = Pseudo(0xF12C);
    /// `ẖ`, with the line below.
    pub const SMALL_H_WITH_LINE: Pseudo = Pseudo(0xF12D);
    pub const CAPITAL_Z: Pseudo = Pseudo(0xF12E);
    pub const SMALL_Z: Pseudo = Pseudo(0xF12F);
    pub const CAPITAL_S: Pseudo = Pseudo(0xF130);
    pub const SMALL_S: Pseudo = Pseudo(0xF131);
    pub const CAPITAL_S_WITH_CARON: Pseudo = Pseudo(0xF132);
    pub const SMALL_S_WITH_CARON: Pseudo = Pseudo(0xF133);
    pub const CAPITAL_Q: Pseudo = Pseudo(0xF134);
    pub const SMALL_Q: Pseudo = Pseudo(0xF135);
    pub const CAPITAL_K: Pseudo = Pseudo(0xF136);
    pub const SMALL_K: Pseudo = Pseudo(0xF137);
    pub const CAPITAL_G: Pseudo = Pseudo(0xF138);
    pub const SMALL_G: Pseudo = Pseudo(0xF139);
    pub const CAPITAL_T: Pseudo = Pseudo(0xF13A);
    pub const SMALL_T: Pseudo = Pseudo(0xF13B);
    /// `Ṱ`, with the circumflex below.
    pub const CAPITAL_T_WITH_CIRCUMFLEX: Pseudo = Pseudo(0xF13C);
    /// `ṱ`, with the circumflex below.
    pub const SMALL_T_WITH_CIRCUMFLEX: Pseudo = Pseudo(0xF13D);
    /// `Ṯ`, with the line below.
    pub const CAPITAL_T_WITH_LINE: Pseudo = Pseudo(0xF13E);
    /// `ṯ`, with the line below.
    pub const SMALL_T_WITH_LINE: Pseudo = Pseudo(0xF13F);
    pub const CAPITAL_D: Pseudo = Pseudo(0xF140);
    pub const SMALL_D: Pseudo = Pseudo(0xF141);
    /// `Ḏ`, with the line below.
    pub const CAPITAL_D_WITH_LINE: Pseudo = Pseudo(0xF142);
    /// `ḏ`, with the line below.
    pub const SMALL_D_WITH_LINE: Pseudo = Pseudo(0xF143);

    /// Morphological dot `.`.
    pub const DOT: Pseudo = Pseudo(0xF020);
    /// Morphological middle dot `·`.
    pub const MIDDLE_DOT: Pseudo = Pseudo(0xF021);
    /// Morphological colon `:`.
    pub const COLON: Pseudo = Pseudo(0xF022);
    /// Suffix pronoun separator `⸗`.
    pub const SUFFIX_PRONOUN_SEPARATOR: Pseudo = Pseudo(0xF023);
    pub const TOP_LEFT_HALF_BRACKET: Pseudo = Pseudo(0xF0A0);
    pub const TOP_RIGHT_HALF_BRACKET: Pseudo = Pseudo(0xF0A1);
    pub const LEFT_ANGLE_BRACKET: Pseudo = Pseudo(0xF0A2);
    pub const RIGHT_ANGLE_BRACKET: Pseudo = Pseudo(0xF0A3);
}

impl Pseudo {
    /// Wraps a `char` without translating it.
    pub const fn from_char(ch: char) -> Self {
        Pseudo(ch as u32)
    }

    /// Constructs a `Pseudo` from its raw value, returning `None` if the value
    /// is not a Unicode scalar value.
    pub fn from_u32(v: u32) -> Option<Self> {
        char::from_u32(v).map(Self::from_char)
    }

    /// Retrieves the raw value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Retrieves the raw value as a `char`.
    ///
    /// This is the internal representation, not a rendering: pseudo letters come out
    /// as private-use characters. Use one of the encoders for readable text.
    pub fn into_char(self) -> char {
        // every constructor checks for a scalar value
        char::from_u32(self.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Returns the band this value falls into.
    pub fn band(self) -> Band {
        match self.0 {
            0..=0x7F => Band::Ascii,
            PUNCTUATION_BAND_START..=PUNCTUATION_BAND_END => Band::Punctuation,
            LETTER_BAND_START..=LETTER_BAND_END => Band::Letter,
            _ => Band::PassThrough,
        }
    }

    /// Returns whether this is one of the pseudo values, as opposed to ASCII or
    /// pass-through text.
    pub fn is_pseudo(self) -> bool {
        matches!(self.band(), Band::Punctuation | Band::Letter)
    }

    /// Returns whether this is a transliteration letter with an uppercase and a
    /// lowercase form.
    pub fn is_cased(self) -> bool {
        // `ʾ` has no case partner, so the unassigned value next to it has none either
        (FIRST_CASED..=LAST_CASED).contains(&self.0)
            && self.0 | CASE_BIT != Pseudo::RIGHT_HALF_RING.0 | CASE_BIT
    }

    /// Returns the uppercase form of a cased letter, or `self` otherwise.
    ///
    /// Plain ASCII letters are not affected.
    pub fn to_upper(self) -> Self {
        if self.is_cased() {
            Pseudo(self.0 & !CASE_BIT)
        } else {
            self
        }
    }

    /// Returns the lowercase form of a cased letter, or `self` otherwise.
    pub fn to_lower(self) -> Self {
        if self.is_cased() {
            Pseudo(self.0 | CASE_BIT)
        } else {
            self
        }
    }

    /// Returns whether this is the uppercase form of a cased letter.
    pub fn is_upper(self) -> bool {
        self.is_cased() && self.0 & CASE_BIT == 0
    }

    /// Returns whether this is the lowercase form of a cased letter.
    pub fn is_lower(self) -> bool {
        self.is_cased() && self.0 & CASE_BIT != 0
    }
}

impl From<char> for Pseudo {
    fn from(ch: char) -> Self {
        Pseudo::from_char(ch)
    }
}

impl From<Pseudo> for u32 {
    fn from(p: Pseudo) -> Self {
        p.0
    }
}

impl TryFrom<u32> for Pseudo {
    type Error = crate::UmschError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Pseudo::from_u32(value).ok_or(crate::UmschError::InvalidPseudo { value })
    }
}

impl PartialEq<char> for Pseudo {
    fn eq(&self, rhs: &char) -> bool {
        self.0 == *rhs as u32
    }
}

impl PartialEq<Pseudo> for char {
    fn eq(&self, rhs: &Pseudo) -> bool {
        *self as u32 == rhs.0
    }
}

impl fmt::Debug for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.band() {
            Band::Ascii | Band::PassThrough => {
                write!(f, "Pseudo('{}')", self.into_char().escape_debug())
            }
            Band::Punctuation | Band::Letter => write!(f, "Pseudo({:#06X})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Band, Pseudo};

    #[test]
    fn test_case_pairs_are_adjacent() {
        assert_eq!(Pseudo::SMALL_ALEPH, Pseudo::CAPITAL_ALEPH.to_lower());
        assert_eq!(Pseudo::CAPITAL_D_WITH_LINE, Pseudo::SMALL_D_WITH_LINE.to_upper());
        assert_eq!(Pseudo::SMALL_H_WITH_LINE, Pseudo::SMALL_H_WITH_LINE.to_lower());
        assert!(Pseudo::CAPITAL_AIN.is_upper());
        assert!(Pseudo::SMALL_AIN.is_lower());
    }

    #[test]
    fn test_uncased_values() {
        assert!(!Pseudo::RIGHT_HALF_RING.is_cased());
        assert_eq!(Pseudo::RIGHT_HALF_RING, Pseudo::RIGHT_HALF_RING.to_lower());
        assert_eq!(Pseudo::RIGHT_HALF_RING, Pseudo::RIGHT_HALF_RING.to_upper());
        assert_eq!(Pseudo::from_char('A'), Pseudo::from_char('A').to_lower());
        assert_eq!(Pseudo::DOT, Pseudo::DOT.to_upper());
        assert!(!Pseudo::from_char('\u{F144}').is_cased());
    }

    #[test]
    fn test_right_half_ring_partner_is_uncased() {
        let partner = Pseudo::from_u32(0xF10D).unwrap();
        assert!(!partner.is_cased());
        assert_eq!(partner, partner.to_upper());
        assert_eq!(partner, partner.to_upper().to_lower());
        assert_eq!(Pseudo::RIGHT_HALF_RING, Pseudo::RIGHT_HALF_RING.to_upper());
    }

    #[test]
    fn test_bands() {
        assert_eq!(Band::Ascii, Pseudo::from_char('~').band());
        assert_eq!(Band::Punctuation, Pseudo::SUFFIX_PRONOUN_SEPARATOR.band());
        assert_eq!(Band::Letter, Pseudo::RIGHT_HALF_RING.band());
        assert_eq!(Band::PassThrough, Pseudo::from_char('\u{131EF}').band());
        assert!(Pseudo::COLON.is_pseudo());
        assert!(!Pseudo::from_char('ß').is_pseudo());
    }

    #[test]
    fn test_from_u32_rejects_surrogates() {
        assert_eq!(None, Pseudo::from_u32(0xD800));
        assert_eq!(None, Pseudo::from_u32(0x11_0000));
        assert_eq!(Some(Pseudo::SMALL_ALEPH), Pseudo::from_u32(0xF101));
    }

    #[test]
    fn test_debug_fmt_pseudo() {
        assert_eq!("Pseudo(0xF101)", format!("{:?}", Pseudo::SMALL_ALEPH));
        assert_eq!("Pseudo('A')", format!("{:?}", Pseudo::from_char('A')));
    }
}
