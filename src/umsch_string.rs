use crate::{decode, pseudo_bytes, Format, ImportFlags, Pseudo, Result, UmschStr};
use std::{borrow, fmt, hash, iter::FromIterator, ops};

/// A growable sequence of canonical codepoints.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct UmschString(Vec<Pseudo>);

impl hash::Hash for UmschString {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl PartialEq<UmschStr> for UmschString {
    #[inline]
    fn eq(&self, other: &UmschStr) -> bool {
        **self == *other
    }
}

impl PartialEq<&UmschStr> for UmschString {
    #[inline]
    fn eq(&self, other: &&UmschStr) -> bool {
        **self == **other
    }
}

impl fmt::Display for UmschString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &**self)
    }
}

impl fmt::Debug for UmschString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &**self)
    }
}

impl ops::Deref for UmschString {
    type Target = UmschStr;

    fn deref(&self) -> &Self::Target {
        UmschStr::from_pseudos(&self.0[..])
    }
}

impl ops::DerefMut for UmschString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        UmschStr::from_pseudos_mut(&mut self.0[..])
    }
}

impl borrow::Borrow<UmschStr> for UmschString {
    fn borrow(&self) -> &UmschStr {
        self
    }
}

impl borrow::ToOwned for UmschStr {
    type Owned = UmschString;

    #[inline]
    fn to_owned(&self) -> UmschString {
        UmschString(self.0.to_vec())
    }
}

impl AsRef<UmschStr> for UmschString {
    fn as_ref(&self) -> &UmschStr {
        self
    }
}

impl From<Vec<Pseudo>> for UmschString {
    fn from(pseudos: Vec<Pseudo>) -> Self {
        UmschString(pseudos)
    }
}

impl From<&UmschStr> for UmschString {
    fn from(s: &UmschStr) -> Self {
        s.to_owned()
    }
}

impl From<UmschString> for Vec<Pseudo> {
    fn from(s: UmschString) -> Self {
        s.0
    }
}

impl UmschString {
    /// Creates a new empty `UmschString`.
    pub const fn new() -> Self {
        UmschString(Vec::new())
    }

    /// Creates a new empty `UmschString` with room for `capacity` codepoints.
    pub fn with_capacity(capacity: usize) -> Self {
        UmschString(Vec::with_capacity(capacity))
    }

    /// Decodes Unicode text.
    pub fn from_unicode(text: &str, flags: ImportFlags) -> Result<Self> {
        decode(text, Format::Unicode, flags)
    }

    /// Decodes text written for the Transliteration font.
    pub fn from_transliteration(text: &str, flags: ImportFlags) -> Result<Self> {
        decode(text, Format::Transliteration, flags)
    }

    /// Decodes text written for the Umschrift_TTn font.
    pub fn from_umschrift_ttn(text: &str, flags: ImportFlags) -> Result<Self> {
        decode(text, Format::UmschriftTtn, flags)
    }

    /// Decodes text written for the Trlit_CG Times font.
    pub fn from_trlit_cg_times(text: &str, flags: ImportFlags) -> Result<Self> {
        decode(text, Format::TrlitCgTimes, flags)
    }

    /// Decodes text written for the 2023 Trlit_CG Times font.
    pub fn from_trlit_cg_times_2023(text: &str, flags: ImportFlags) -> Result<Self> {
        decode(text, Format::TrlitCgTimes2023, flags)
    }

    /// Reads back the opaque text form written by [`UmschStr::to_pseudo`].
    pub fn from_pseudo(s: &str) -> Self {
        s.chars().map(Pseudo::from_char).collect()
    }

    /// Reads back the opaque byte form written by [`UmschStr::to_pseudo_bytes`].
    ///
    /// # Errors
    ///
    /// [`UmschError::TruncatedPseudo`](crate::UmschError::TruncatedPseudo) if the
    /// length is not a multiple of four, and
    /// [`UmschError::InvalidPseudo`](crate::UmschError::InvalidPseudo) if a value
    /// is not a Unicode scalar value.
    pub fn from_pseudo_bytes(bytes: &[u8]) -> Result<Self> {
        pseudo_bytes::decode_pseudos(bytes).map(UmschString)
    }

    /// Append the given codepoint to the end of the `UmschString`.
    pub fn push(&mut self, p: Pseudo) {
        self.0.push(p);
    }

    /// Append the given `UmschStr` to the end of the `UmschString`.
    pub fn push_umsch_str(&mut self, s: &UmschStr) {
        self.0.extend_from_slice(&s.0)
    }

    /// Removes the last codepoint and returns it.
    pub fn pop(&mut self) -> Option<Pseudo> {
        self.0.pop()
    }

    /// Consumes the string, returning its codepoints.
    pub fn into_pseudos(self) -> Vec<Pseudo> {
        self.0
    }
}

impl Extend<Pseudo> for UmschString {
    fn extend<T: IntoIterator<Item = Pseudo>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Pseudo> for UmschString {
    fn from_iter<T: IntoIterator<Item = Pseudo>>(iter: T) -> Self {
        let mut umsch = Self::default();
        umsch.extend(iter);
        umsch
    }
}

impl<'rhs> ops::AddAssign<&'rhs UmschStr> for UmschString {
    fn add_assign(&mut self, rhs: &'rhs UmschStr) {
        self.0.extend_from_slice(&rhs.0);
    }
}

#[cfg(test)]
mod tests {
    use super::UmschString;
    use crate::{
        ExportFlags, FilterFlags, ImportFlags, Pseudo, UmschError, UmschStr,
    };

    fn unicode(text: &str) -> UmschString {
        UmschString::from_unicode(text, ImportFlags::empty()).unwrap()
    }

    #[test]
    fn test_umsch_string_hash() {
        fn calc_hash<T: std::hash::Hash + ?Sized>(v: &T) -> u64 {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::Hasher;
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }

        let s = unicode("ḥtp-dꞽ-nsw");
        let s_hash1 = calc_hash(&s);
        let s_hash2 = calc_hash(&s);
        let s_hash3 = calc_hash(&*s);
        let s_hash4 = calc_hash(&*s);
        assert_eq!(s_hash1, s_hash2);
        assert_eq!(s_hash1, s_hash3);
        assert_eq!(s_hash1, s_hash4);
    }

    #[test]
    fn test_pseudo_round_trip() {
        let s = unicode("Ḥꜣ.tꞽ-ꜥ-yꜣ ⸢nṯr⸣ 𓇯");
        let opaque = s.to_pseudo();
        assert_eq!(s.len(), opaque.chars().count());
        assert_eq!(s, UmschString::from_pseudo(&opaque));
        assert_eq!(s, UmschString::from_pseudo_bytes(&s.to_pseudo_bytes()).unwrap());
    }

    #[test]
    fn test_from_pseudo_bytes_rejects_bad_input() {
        assert_eq!(
            Err(UmschError::TruncatedPseudo { len: 5 }),
            UmschString::from_pseudo_bytes(&[0, 0, 0xF1, 0x01, 0])
        );
        assert_eq!(
            Err(UmschError::InvalidPseudo { value: 0xD800 }),
            UmschString::from_pseudo_bytes(&[0, 0, 0xD8, 0x00])
        );
    }

    // Sorting the opaque forms must agree with sorting the sequences.
    #[test]
    fn test_sort_by_pseudo() {
        let words = ["nfr-Htp", "aA-ptH", "DHw.tj-nfr", "Aw-jb"];
        let expected = vec!["ꜣw-ꞽb", "ꜥꜣ-ptḥ", "nfr-ḥtp", "ḏḥwtꞽ-nfr"];
        let clean = |w: &&str| {
            UmschString::from_transliteration(w, ImportFlags::empty())
                .unwrap()
                .filter(FilterFlags::CLEAN | FilterFlags::LOWER)
        };

        let mut decoded: Vec<UmschString> = words.iter().map(clean).collect();
        decoded.sort();
        let by_sequence: Vec<String> = decoded.iter().map(|w| w.to_string()).collect();
        assert_eq!(expected, by_sequence);

        let mut opaque: Vec<String> = words.iter().map(clean).map(|w| w.to_pseudo()).collect();
        opaque.sort();
        let by_opaque: Vec<String> = opaque
            .iter()
            .map(|o| UmschString::from_pseudo(o).to_unicode(ExportFlags::empty()))
            .collect();
        assert_eq!(expected, by_opaque);

        let mut raw: Vec<Vec<u8>> = words.iter().map(clean).map(|w| w.to_pseudo_bytes()).collect();
        raw.sort();
        let by_bytes: Vec<String> = raw
            .iter()
            .map(|b| UmschString::from_pseudo_bytes(b).unwrap().to_string())
            .collect();
        assert_eq!(expected, by_bytes);
    }

    #[test]
    fn test_push_and_extend() {
        let mut s = UmschString::new();
        s.push(Pseudo::SMALL_H_WITH_DOT);
        s.push_umsch_str(&unicode("tp"));
        s += &*unicode("⸗f");
        assert_eq!("ḥtp⸗f", s.to_string());
        assert_eq!(Some(Pseudo::SMALL_F), s.pop());
        let view: &UmschStr = s.as_ref();
        assert_eq!(s, view);
        assert_eq!(4, Vec::from(s).len());
    }
}
