//! Property-based tests over whole sequences.

use proptest::prelude::*;

use crate::{decode, ExportFlags, FilterFlags, Format, ImportFlags, Pseudo, UmschError, UmschString};

fn pseudo(value: u32) -> Pseudo {
    Pseudo::from_u32(value).expect("scalar value")
}

/// Codepoints weighted towards the defined bands.
fn arb_pseudo() -> impl Strategy<Value = Pseudo> {
    prop_oneof![
        4 => (0xF100u32..=0xF143).prop_map(pseudo),
        1 => (0xF020u32..=0xF023).prop_map(pseudo),
        1 => (0xF0A0u32..=0xF0A3).prop_map(pseudo),
        3 => (0x20u32..0x7F).prop_map(pseudo),
        1 => any::<char>().prop_map(Pseudo::from_char),
    ]
}

fn arb_umsch_string() -> impl Strategy<Value = UmschString> {
    prop::collection::vec(arb_pseudo(), 0..32).prop_map(UmschString::from)
}

/// Text built from whole glyphs of `format`, one glyph per codepoint of the
/// pseudo bands.
fn arb_glyph_text(format: Format) -> impl Strategy<Value = String> {
    let mut glyphs: Vec<String> = (0xF000u32..=0xF1FF)
        .map(|value| UmschString::from(vec![pseudo(value)]).encode(format, ExportFlags::empty()))
        .filter(|glyph| !glyph.is_empty())
        .collect();
    glyphs.push(" ".to_string());
    glyphs.push("-".to_string());
    prop::collection::vec(prop::sample::select(glyphs), 0..24).prop_map(|units| units.concat())
}

proptest! {
    #[test]
    fn prop_pseudo_round_trip(s in arb_umsch_string()) {
        prop_assert_eq!(&s, &UmschString::from_pseudo(&s.to_pseudo()));
        prop_assert_eq!(Ok(s.clone()), UmschString::from_pseudo_bytes(&s.to_pseudo_bytes()));
    }

    #[test]
    fn prop_opaque_forms_keep_order(a in arb_umsch_string(), b in arb_umsch_string()) {
        prop_assert_eq!(a.cmp(&b), a.to_pseudo().cmp(&b.to_pseudo()));
        prop_assert_eq!(a.cmp(&b), a.to_pseudo_bytes().cmp(&b.to_pseudo_bytes()));
    }

    #[test]
    fn prop_filter_idempotent(s in arb_umsch_string()) {
        for flags in [FilterFlags::MORPH, FilterFlags::PUNCT, FilterFlags::DIGITS, FilterFlags::LOWER] {
            let once = s.filter(flags);
            prop_assert_eq!(&once, &once.filter(flags), "{:?}", flags);
        }
    }

    #[test]
    fn prop_disjoint_flags_compose(s in arb_umsch_string()) {
        prop_assert_eq!(
            s.filter(FilterFlags::DIGITS | FilterFlags::LOWER),
            s.filter(FilterFlags::DIGITS).filter(FilterFlags::LOWER)
        );
        prop_assert_eq!(
            s.filter(FilterFlags::SUFF_PRON | FilterFlags::HYPHENS),
            s.filter(FilterFlags::HYPHENS).filter(FilterFlags::SUFF_PRON)
        );
    }

    #[test]
    fn prop_case_round_trip(s in arb_umsch_string()) {
        prop_assert_eq!(s.to_lower(), s.to_upper().to_lower());
        prop_assert_eq!(s.to_upper(), s.to_lower().to_upper());
        prop_assert_eq!(s.len(), s.to_lower().len());
    }

    #[test]
    fn prop_unicode_round_trip(text in arb_glyph_text(Format::Unicode)) {
        let decoded = decode(&text, Format::Unicode, ImportFlags::empty()).unwrap();
        prop_assert_eq!(text, decoded.to_unicode(ExportFlags::empty()));
    }

    #[test]
    fn prop_transliteration_round_trip(text in arb_glyph_text(Format::Transliteration)) {
        let decoded = decode(&text, Format::Transliteration, ImportFlags::empty()).unwrap();
        prop_assert_eq!(text, decoded.to_transliteration(ExportFlags::empty()));
    }

    #[test]
    fn prop_decode_fails_only_on_marks(text in "\\PC*") {
        for format in Format::ALL {
            match decode(&text, format, ImportFlags::NFC) {
                Ok(_) => {}
                Err(UmschError::UnmappableCombination { .. }) => {}
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
