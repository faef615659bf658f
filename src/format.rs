use std::fmt;

/// An encoding of Egyptological transliteration text.
///
/// All but [`Format::Unicode`] are 8-bit font encodings: the text is stored as
/// ordinary characters, and the font draws some of them as transliteration signs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Format {
    /// The Umschrift_TTn v3.0 font.
    UmschriftTtn,
    /// The CCER Transliteration font.
    Transliteration,
    /// The Trlit_CG Times font before its 2023 revision.
    TrlitCgTimes,
    /// The 2023 revision of the Trlit_CG Times font.
    #[cfg_attr(feature = "serde", serde(rename = "trlit_cg_times_2023"))]
    TrlitCgTimes2023,
    /// Unicode encoding of Egyptological transliteration.
    Unicode,
}

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Format; 5] = [
        Format::UmschriftTtn,
        Format::Transliteration,
        Format::TrlitCgTimes,
        Format::TrlitCgTimes2023,
        Format::Unicode,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Returns whether encoding drops codepoints the format cannot represent, instead
    /// of copying them to the output.
    ///
    /// Only the Transliteration font does so; it keeps unmapped ASCII and nothing else.
    pub fn discards_unmapped(self) -> bool {
        matches!(self, Format::Transliteration)
    }

    /// Returns the snake_case name used in profiles.
    pub fn name(self) -> &'static str {
        match self {
            Format::UmschriftTtn => "umschrift_ttn",
            Format::Transliteration => "transliteration",
            Format::TrlitCgTimes => "trlit_cg_times",
            Format::TrlitCgTimes2023 => "trlit_cg_times_2023",
            Format::Unicode => "unicode",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
