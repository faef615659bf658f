use crate::{
    encode, filter, pseudo_bytes, ExportFlags, FilterFlags, Format, Pseudo, Result, UmschError,
    UmschString,
};
use std::{cmp, fmt, hash, mem, ops::Index};

/// A sequence of canonical codepoints.
/// It is usally seen in its borrowed form, `&UmschStr`.
///
/// Equality, ordering and hashing compare the raw codepoint values, so sorting a
/// list of sequences sorts it in Egyptological alphabetical order.
#[repr(transparent)]
pub struct UmschStr(pub(crate) [Pseudo]);

impl PartialEq for UmschStr {
    #[inline]
    fn eq(&self, other: &UmschStr) -> bool {
        self.0 == other.0
    }
}

impl Eq for UmschStr {}

impl PartialOrd for UmschStr {
    #[inline]
    fn partial_cmp(&self, other: &UmschStr) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UmschStr {
    #[inline]
    fn cmp(&self, other: &UmschStr) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl hash::Hash for UmschStr {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Renders as Unicode without export options.
impl fmt::Display for UmschStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_unicode(ExportFlags::empty()))
    }
}

impl fmt::Debug for UmschStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for ch in self.to_unicode(ExportFlags::empty()).chars() {
            write!(f, "{}", ch.escape_debug())?;
        }
        write!(f, "\"")
    }
}

impl<'a> From<&'a [Pseudo]> for &'a UmschStr {
    fn from(pseudos: &'a [Pseudo]) -> Self {
        UmschStr::from_pseudos(pseudos)
    }
}

impl Default for &UmschStr {
    fn default() -> Self {
        UmschStr::from_pseudos(&[])
    }
}

impl<I> Index<I> for UmschStr
where
    [Pseudo]: Index<I, Output = [Pseudo]>,
{
    type Output = UmschStr;

    fn index(&self, index: I) -> &UmschStr {
        UmschStr::from_pseudos(self.0.index(index))
    }
}

/// Resolves a slice bound: negative values count from the end, and everything
/// is clamped to `0..=len`.
fn resolve_bound(bound: Option<isize>, len: usize, open: usize) -> usize {
    match bound {
        None => open,
        Some(i) if i < 0 => len.saturating_sub(i.unsigned_abs()),
        Some(i) => i.unsigned_abs().min(len),
    }
}

impl UmschStr {
    /// Views a slice of codepoints as a sequence.
    pub fn from_pseudos(pseudos: &[Pseudo]) -> &UmschStr {
        // `UmschStr` is a transparent wrapper around `[Pseudo]`
        unsafe { mem::transmute(pseudos) }
    }

    /// Views a mutable slice of codepoints as a sequence.
    pub fn from_pseudos_mut(pseudos: &mut [Pseudo]) -> &mut UmschStr {
        unsafe { mem::transmute(pseudos) }
    }

    /// Returns the underlying codepoints.
    pub fn as_pseudos(&self) -> &[Pseudo] {
        &self.0
    }

    /// Returns the number of codepoints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the codepoint at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Pseudo> {
        self.0.get(index).copied()
    }

    /// Returns an iterator over the codepoints.
    pub fn iter(&self) -> Pseudos<'_> {
        Pseudos { data: &self.0 }
    }

    fn bounds(&self, start: Option<isize>, end: Option<isize>) -> (usize, usize) {
        let len = self.len();
        (resolve_bound(start, len, 0), resolve_bound(end, len, len))
    }

    /// Returns the part between `start` and `end`.
    ///
    /// The bounds may be negative to count from the end, and are clamped to
    /// the sequence, so this never panics.
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> &UmschStr {
        let (start, end) = self.bounds(start, end);
        if start >= end {
            return Default::default();
        }
        &self[start..end]
    }

    fn find_between(&self, sub: &UmschStr, start: usize, end: usize) -> Option<usize> {
        if start > end || end - start < sub.len() {
            return None;
        }
        if sub.is_empty() {
            return Some(start);
        }
        self.0[start..end]
            .windows(sub.len())
            .position(|window| window == &sub.0)
            .map(|pos| pos + start)
    }

    /// Returns the lowest index in `start..end` where `sub` begins.
    ///
    /// Bounds resolve as in [`UmschStr::slice`].
    pub fn find(&self, sub: &UmschStr, start: Option<isize>, end: Option<isize>) -> Option<usize> {
        let (start, end) = self.bounds(start, end);
        self.find_between(sub, start, end)
    }

    /// Like [`UmschStr::find`], but fails with [`UmschError::NotFound`].
    pub fn index(&self, sub: &UmschStr, start: Option<isize>, end: Option<isize>) -> Result<usize> {
        self.find(sub, start, end).ok_or(UmschError::NotFound)
    }

    /// Returns every index in `start..end` where `sub` begins.
    ///
    /// The search resumes one past each match, so overlapping occurrences are
    /// all reported.
    pub fn find_all(&self, sub: &UmschStr, start: Option<isize>, end: Option<isize>) -> Vec<usize> {
        let (mut from, end) = self.bounds(start, end);
        let mut found = Vec::new();
        while let Some(pos) = self.find_between(sub, from, end) {
            found.push(pos);
            from = pos + 1;
        }
        found
    }

    /// Returns whether the part between `start` and `end` begins with `prefix`.
    ///
    /// Bounds resolve as in [`UmschStr::slice`].
    pub fn starts_with(&self, prefix: &UmschStr, start: Option<isize>, end: Option<isize>) -> bool {
        self.slice(start, end).0.starts_with(&prefix.0)
    }

    /// Returns whether the part between `start` and `end` ends with `suffix`.
    pub fn ends_with(&self, suffix: &UmschStr, start: Option<isize>, end: Option<isize>) -> bool {
        self.slice(start, end).0.ends_with(&suffix.0)
    }

    /// Replaces every non-overlapping occurrence of `old`, leftmost first.
    pub fn replace(&self, old: &UmschStr, new: &UmschStr) -> UmschString {
        self.replacen(old, new, usize::MAX)
    }

    /// Replaces the first `count` non-overlapping occurrences of `old`.
    ///
    /// An empty `old` matches before every codepoint and at the end, like
    /// [`str::replacen`].
    pub fn replacen(&self, old: &UmschStr, new: &UmschStr, count: usize) -> UmschString {
        let mut replaced = Vec::with_capacity(self.len());
        let mut done = 0;
        if old.is_empty() {
            for &p in self.0.iter() {
                if done < count {
                    replaced.extend_from_slice(&new.0);
                    done += 1;
                }
                replaced.push(p);
            }
            if done < count {
                replaced.extend_from_slice(&new.0);
            }
            return UmschString::from(replaced);
        }
        let mut rest = &self.0;
        while done < count {
            match UmschStr::from_pseudos(rest).find_between(old, 0, rest.len()) {
                Some(pos) => {
                    replaced.extend_from_slice(&rest[..pos]);
                    replaced.extend_from_slice(&new.0);
                    rest = &rest[pos + old.len()..];
                    done += 1;
                }
                None => break,
            }
        }
        replaced.extend_from_slice(rest);
        UmschString::from(replaced)
    }

    /// Returns a copy with every cased letter in lowercase.
    pub fn to_lower(&self) -> UmschString {
        self.iter().map(Pseudo::to_lower).collect()
    }

    /// Returns a copy with every cased letter in uppercase.
    pub fn to_upper(&self) -> UmschString {
        self.iter().map(Pseudo::to_upper).collect()
    }

    /// Applies the normalization options in `flags`. See [`FilterFlags`].
    pub fn filter(&self, flags: FilterFlags) -> UmschString {
        filter::filter(self, flags)
    }

    /// Encodes the sequence in `format`.
    pub fn encode(&self, format: Format, flags: ExportFlags) -> String {
        encode(self, format, flags)
    }

    /// Encodes the sequence as Unicode.
    pub fn to_unicode(&self, flags: ExportFlags) -> String {
        encode(self, Format::Unicode, flags)
    }

    /// Encodes the sequence for the Transliteration font.
    pub fn to_transliteration(&self, flags: ExportFlags) -> String {
        encode(self, Format::Transliteration, flags)
    }

    /// Encodes the sequence for the Umschrift_TTn font.
    pub fn to_umschrift_ttn(&self, flags: ExportFlags) -> String {
        encode(self, Format::UmschriftTtn, flags)
    }

    /// Encodes the sequence for the Trlit_CG Times font.
    pub fn to_trlit_cg_times(&self, flags: ExportFlags) -> String {
        encode(self, Format::TrlitCgTimes, flags)
    }

    /// Encodes the sequence for the 2023 Trlit_CG Times font.
    pub fn to_trlit_cg_times_2023(&self, flags: ExportFlags) -> String {
        encode(self, Format::TrlitCgTimes2023, flags)
    }

    /// Returns the opaque text form, one `char` per codepoint.
    ///
    /// The text is not meant for display. Comparing two of these strings byte by
    /// byte orders them the same way as comparing the sequences.
    pub fn to_pseudo(&self) -> String {
        self.iter().map(Pseudo::into_char).collect()
    }

    /// Returns the fixed-width opaque byte form, four big-endian bytes per
    /// codepoint.
    pub fn to_pseudo_bytes(&self) -> Vec<u8> {
        pseudo_bytes::encode_pseudos(&self.0)
    }
}

/// An iterator over the codepoints of a sequence.
#[derive(Clone, Copy)]
pub struct Pseudos<'str> {
    data: &'str [Pseudo],
}

impl<'str> Pseudos<'str> {
    /// Returns the rest of the sequence that has not been yielded yet.
    pub fn as_umsch_str(&self) -> &'str UmschStr {
        UmschStr::from_pseudos(self.data)
    }
}

impl<'str> Iterator for Pseudos<'str> {
    type Item = Pseudo;

    fn next(&mut self) -> Option<Self::Item> {
        match *self.data {
            [] => None,
            [head, ref rest @ ..] => {
                self.data = rest;
                Some(head)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<'str> DoubleEndedIterator for Pseudos<'str> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match *self.data {
            [] => None,
            [ref rest @ .., tail] => {
                self.data = rest;
                Some(tail)
            }
        }
    }
}

impl ExactSizeIterator for Pseudos<'_> {}

impl fmt::Debug for Pseudos<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pseudos(")?;
        f.debug_list().entries(*self).finish()?;
        write!(f, ")")?;
        Ok(())
    }
}

impl<'str> IntoIterator for &'str UmschStr {
    type Item = Pseudo;
    type IntoIter = Pseudos<'str>;

    fn into_iter(self) -> Pseudos<'str> {
        self.iter()
    }
}
