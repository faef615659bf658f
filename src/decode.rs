use unicode_normalization::UnicodeNormalization;

use crate::{
    tables::{self, marks},
    Format, ImportFlags, Pseudo, Result, UmschError, UmschString,
};

/// Progress through a run of doubling letters `j` / `J`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum YodState {
    Idle,
    PendingSmall,
    PendingCapital,
}

impl YodState {
    fn pending(ch: char) -> Self {
        if ch == 'J' {
            YodState::PendingCapital
        } else {
            YodState::PendingSmall
        }
    }
}

fn is_doubling_letter(ch: char) -> bool {
    matches!(ch, 'j' | 'J')
}

/// Decodes `text`, written in `format`, into canonical codepoints.
///
/// A letter followed by a combining mark decodes to the composed letter, and
/// `jj` / `Jj` decode to `y` / `Y`. Characters the format does not define are
/// kept as they are.
///
/// # Errors
///
/// Fails with [`UmschError::UnmappableCombination`] if a combining mark follows
/// a letter it cannot combine with. No partial result is returned.
pub fn decode(text: &str, format: Format, flags: ImportFlags) -> Result<UmschString> {
    let chars: Vec<char> = if flags.contains(ImportFlags::NFC) {
        text.nfc().collect()
    } else {
        text.chars().collect()
    };
    let table = tables::import_table(format);
    let mut decoded = UmschString::with_capacity(chars.len());
    let mut state = YodState::Idle;

    for (position, &cur) in chars.iter().enumerate() {
        let next = chars.get(position + 1).copied();
        if marks::is_combining_mark(cur) {
            continue;
        }
        if let Some(mark) = next.filter(|&ch| marks::is_combining_mark(ch)) {
            match marks::compose(cur, mark) {
                Some(letter) => decoded.push(letter),
                None => {
                    tracing::debug!(%format, ?cur, ?mark, position, "unmappable combination");
                    return Err(UmschError::UnmappableCombination {
                        base: cur,
                        mark,
                        position,
                    });
                }
            }
            continue;
        }
        if is_doubling_letter(cur) && next.map_or(false, is_doubling_letter) {
            match state {
                YodState::Idle => {}
                YodState::PendingSmall => decoded.push(Pseudo::SMALL_YOD),
                YodState::PendingCapital => decoded.push(Pseudo::CAPITAL_YOD),
            }
            state = YodState::pending(cur);
            continue;
        }
        // the current letter closes the pair
        match state {
            YodState::Idle => {}
            YodState::PendingSmall => {
                decoded.push(Pseudo::SMALL_Y);
                state = YodState::Idle;
                continue;
            }
            YodState::PendingCapital => {
                decoded.push(Pseudo::CAPITAL_Y);
                state = YodState::Idle;
                continue;
            }
        }
        decoded.push(table.get(cur, flags).unwrap_or(Pseudo::from_char(cur)));
    }

    tracing::trace!(%format, input = chars.len(), output = decoded.len(), "decoded");
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::decode;
    use crate::{Format, ImportFlags, Pseudo, UmschError, UmschString};

    fn unicode(text: &str) -> UmschString {
        decode(text, Format::Unicode, ImportFlags::empty()).unwrap()
    }

    #[test]
    fn test_letters_in_alphabet_order() {
        assert_eq!(
            &[
                Pseudo::SMALL_G,
                Pseudo::CAPITAL_G,
                Pseudo::SMALL_T,
                Pseudo::CAPITAL_T,
                Pseudo::SMALL_P
            ][..],
            unicode("gGtTp").as_pseudos()
        );
        assert_eq!(0xF139, unicode("g").as_pseudos()[0].into_inner());
    }

    #[test]
    fn test_umschrift_ttn_keyboard() {
        let ttn = decode(
            "+=@ACDEHOQSTX\\_ceovx|~‰¦§©²³μÈËßçôŠ\u{8D}™£¥ÆÇÊÏÖÙÜæû!$%'\"",
            Format::UmschriftTtn,
            ImportFlags::empty(),
        )
        .unwrap();
        let uni = unicode("ḏdḏdi̯⸗ḏʾŠḏḎḥḤḲšṯḫ⸣u̯SDꜥTẖꞽïTꞽh̭h̭ṯdEs+ṱṯd~ꜣꜣṰedṮꞼꞽQḎSDqHH̱ḪʾḤ");
        assert_eq!(uni.slice(Some(4), None), &*ttn);
        assert_eq!(Some(4), uni.find(&ttn, None, None));
    }

    #[test]
    fn test_transliteration_keyboard() {
        assert_eq!(
            unicode("~HḤḪH̱SŠTṮ()DḎḲWERṯYUꞼQP{}ꜣšḏFGḥJKL:||ZẖŚh̭BNM<>?ḳwertyuꞽqp[]ꜥsdfghjkl;'\\\\zḫśṱbnm,./"),
            decode(
                "~!@#$%^&*()_+QWERTYUIOP{}ASDFGHJKL:||ZXCVBNM<>?qwertyuiop[]asdfghjkl;'\\\\zxcvbnm,./",
                Format::Transliteration,
                ImportFlags::empty()
            )
            .unwrap()
        );
    }

    #[test]
    fn test_trlit_cg_times_keyboard() {
        assert_eq!(
            unicode("~@#$%^&*()_+ḲWERṯYUꞼQP{}ꜣšḏFGḥJK⸥:||ZẖŚṰBNM<>?ḳwertyuꞽqp[]ꜥsdfghjkl;'\\\\zḫśṱbnm,./"),
            decode(
                "~@#$%^&*()_+QWERTYUIOP{}ASDFGHJKL:||ZXCVBNM<>?qwertyuiop[]asdfghjkl;'\\\\zxcvbnm,./",
                Format::TrlitCgTimes,
                ImportFlags::empty()
            )
            .unwrap()
        );
    }

    #[test]
    fn test_trlit_cg_times_2023_keyboard() {
        assert_eq!(
            unicode("⸢č⸣č̣%H̭&ʾ()_+ḲWERṯïUꞼQP{}ꜣšḏFGḥJK⸥:||ZẖŚṰBNM⟨⟩?ḳwertyh̭ꞽqp[]ꜥsdfghjkl;'\\\\zḫśṱbnm,./"),
            decode(
                "~@#$%^&*()_+QWERTYUIOP{}ASDFGHJKL:||ZXCVBNM<>?qwertyuiop[]asdfghjkl;'\\\\zxcvbnm,./",
                Format::TrlitCgTimes2023,
                ImportFlags::empty()
            )
            .unwrap()
        );
    }

    // IFAO letter forms
    #[test]
    fn test_unicode_variant_letters() {
        assert_eq!(unicode("ꜥꜣḫẖꞽḥḤḪšŠṯṮḏḎꜥꜣḫꞼH̱nm"), unicode("ʿȝḫẖỉḥḤḪšŠṯṮḏḎʿȝḫỈH̱nm"));
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(unicode("ẖ"), unicode("h\u{331}"));
        assert_eq!(
            &[Pseudo::CAPITAL_H_WITH_LINE, Pseudo::SMALL_I_WITH_INVERTED_BREVE][..],
            unicode("H\u{331}i\u{32F}").as_pseudos()
        );
        assert_eq!(unicode("ꞽ"), unicode("i\u{357}"));
        assert_eq!(unicode("ꞽ"), unicode("ı\u{486}"));
        assert_eq!(unicode("ḏ"), unicode("č\u{323}"));
        // a mark without a base letter before it is skipped
        assert_eq!(unicode("n"), unicode("\u{32F}n"));
    }

    #[test]
    fn test_unmappable_combination() {
        assert_eq!(
            Err(UmschError::UnmappableCombination {
                base: 'x',
                mark: '\u{32F}',
                position: 2
            }),
            decode("nfx\u{32F}", Format::Unicode, ImportFlags::empty())
        );
    }

    #[test]
    fn test_doubling_letters() {
        assert_eq!(&[Pseudo::SMALL_Y][..], unicode("jj").as_pseudos());
        assert_eq!(&[Pseudo::CAPITAL_Y][..], unicode("Jj").as_pseudos());
        assert_eq!(
            &[Pseudo::SMALL_YOD, Pseudo::SMALL_Y][..],
            unicode("jjj").as_pseudos()
        );
        assert_eq!(
            &[Pseudo::CAPITAL_YOD, Pseudo::SMALL_YOD, Pseudo::SMALL_Y][..],
            unicode("Jjjj").as_pseudos()
        );
        assert_eq!(unicode("ꞽmny"), unicode("jmnjj"));
    }

    #[test]
    fn test_doubled_y_in_legacy_font() {
        // Trlit_CG Times 2023 writes ï on 'Y', the pair still reads as y
        let decoded = decode("Jj", Format::TrlitCgTimes2023, ImportFlags::empty()).unwrap();
        assert_eq!(&[Pseudo::CAPITAL_Y][..], decoded.as_pseudos());
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        let text = "nṯr ꜥꜣ nb pt 𓇯👨‍👩‍👦";
        assert_eq!(text, unicode(text).to_unicode(crate::ExportFlags::empty()));
        assert_eq!(Pseudo::from_char('𓇯'), unicode("𓇯").as_pseudos()[0]);
    }

    #[test]
    fn test_nfc() {
        let decomposed = "s\u{30C}";
        assert_eq!(
            unicode("š"),
            decode(decomposed, Format::Unicode, ImportFlags::NFC).unwrap()
        );
        assert_eq!(2, unicode(decomposed).len());
    }

    #[test]
    fn test_s_for_z() {
        let z = unicode("Z");
        for (format, glyph) in [
            (Format::Unicode, "S"),
            (Format::UmschriftTtn, "c"),
            (Format::TrlitCgTimes, "4"),
            (Format::TrlitCgTimes2023, "4"),
            (Format::Transliteration, "%"),
        ] {
            assert_eq!(z, decode(glyph, format, ImportFlags::S_FOR_Z).unwrap(), "{}", format);
        }
        assert_eq!(unicode("s"), decode("ś", Format::Unicode, ImportFlags::S_FOR_Z).unwrap());
    }
}
