use smallvec::{smallvec, SmallVec};

use crate::{tables, Band, ExportFlags, Format, Pseudo, UmschStr};

/// Codepoints one input codepoint becomes after the pre-pass.
type UnitVec = SmallVec<[Pseudo; 2]>;

const ASCII_SMALL_J: Pseudo = Pseudo::from_char('j');
const ASCII_CAPITAL_J: Pseudo = Pseudo::from_char('J');

fn substitute(p: Pseudo, flags: ExportFlags) -> UnitVec {
    let p = if flags.contains(ExportFlags::REPLACE_I_WITH_DIAERESIS) {
        match p {
            Pseudo::SMALL_I_WITH_DIAERESIS => Pseudo::SMALL_Y,
            Pseudo::CAPITAL_I_WITH_DIAERESIS => Pseudo::CAPITAL_Y,
            _ => p,
        }
    } else {
        p
    };
    if flags.contains(ExportFlags::JJ_FOR_DOUBLE_YOD) {
        match p {
            Pseudo::SMALL_Y | Pseudo::SMALL_I_WITH_DIAERESIS => {
                return smallvec![ASCII_SMALL_J, ASCII_SMALL_J];
            }
            Pseudo::CAPITAL_Y | Pseudo::CAPITAL_I_WITH_DIAERESIS => {
                return smallvec![ASCII_CAPITAL_J, ASCII_SMALL_J];
            }
            _ => {}
        }
    }
    smallvec![p]
}

/// Encodes canonical codepoints as text in `format`.
///
/// Codepoints the format has no sign for are copied as they are, except for
/// [`Format::Transliteration`], which keeps only plain ASCII.
pub fn encode(seq: &UmschStr, format: Format, flags: ExportFlags) -> String {
    let table = tables::export_table(format);
    let mut encoded = String::with_capacity(seq.len());
    let mut dropped = 0usize;

    for p in seq.iter().flat_map(|p| substitute(p, flags)) {
        if table.render(p, flags, &mut encoded) {
            continue;
        }
        if format.discards_unmapped() && p.band() != Band::Ascii {
            dropped += 1;
            continue;
        }
        encoded.push(p.into_char());
    }

    if dropped > 0 {
        tracing::debug!(%format, dropped, "dropped codepoints without a sign");
    }
    tracing::trace!(%format, input = seq.len(), output = encoded.len(), "encoded");
    encoded
}

#[cfg(test)]
mod tests {
    use super::encode;
    use crate::{ExportFlags, Format, ImportFlags, UmschString};

    fn unicode(text: &str) -> UmschString {
        UmschString::from_unicode(text, ImportFlags::empty()).unwrap()
    }

    #[test]
    fn test_double_yod() {
        let name = unicode("Imny Y");
        assert_eq!("Imny Y", name.to_unicode(ExportFlags::empty()));
        assert_eq!("Imnjj Jj", name.to_unicode(ExportFlags::JJ_FOR_DOUBLE_YOD));
        assert_eq!(
            "Jmnjj Jjj",
            unicode("Ꞽmny Yꞽ").to_unicode(ExportFlags::J_FOR_YOD | ExportFlags::JJ_FOR_DOUBLE_YOD)
        );
    }

    #[test]
    fn test_i_with_diaeresis() {
        let word = unicode("pï Ï");
        assert_eq!("py Y", word.to_unicode(ExportFlags::REPLACE_I_WITH_DIAERESIS));
        assert_eq!("pjj Jj", word.to_unicode(ExportFlags::JJ_FOR_DOUBLE_YOD));
    }

    #[test]
    fn test_z_for_s() {
        let word = unicode("sSzZ");
        let flags = ExportFlags::Z_FOR_S_AND_S_FOR_S_ACUTE;
        assert_eq!("śŚsS", word.to_unicode(flags));
        assert_eq!("cCs%", word.to_transliteration(flags));
        assert_eq!("cCs4", word.to_trlit_cg_times(flags));
    }

    #[test]
    fn test_k_with_dot() {
        let word = unicode("qnbt Qnbt");
        assert_eq!("ḳnbt Ḳnbt", word.to_unicode(ExportFlags::K_WITH_DOT));
        assert_eq!("qnbt Qnbt", word.to_transliteration(ExportFlags::K_WITH_DOT));
        assert_eq!(
            "onbt Onbt",
            word.to_transliteration(ExportFlags::Z_FOR_S_AND_S_FOR_S_ACUTE)
        );
    }

    #[test]
    fn test_transliteration_discards_unmapped() {
        let word = unicode("nṯr 𓇯 ⸢ꜥ⸣");
        assert_eq!("nTr  a", encode(&word, Format::Transliteration, ExportFlags::empty()));
        assert_eq!("nṯr 𓇯 ⸢ꜥ⸣", encode(&word, Format::Unicode, ExportFlags::empty()));
    }

    #[test]
    fn test_umschrift_ttn_escapes_ascii() {
        // 'A' is the uncertain consonant in this font, a literal A needs 'À'
        let word = UmschString::from_umschrift_ttn("ÀA#", ImportFlags::empty()).unwrap();
        assert_eq!("Aʾꜣ", word.to_unicode(ExportFlags::empty()));
        assert_eq!("ÀA#", word.to_umschrift_ttn(ExportFlags::empty()));
    }

    #[test]
    fn test_legacy_round_trip() {
        for (format, text) in [
            (Format::Transliteration, "A1@$()Dd in sxty pn [S]&&"),
            (Format::TrlitCgTimes, "nTr aA 0tp-di-nsw"),
            (Format::TrlitCgTimes2023, "~Hm~ n Y <x>"),
            (Format::UmschriftTtn, "O#.t|-o-y#"),
        ] {
            let decoded = crate::decode(text, format, ImportFlags::empty()).unwrap();
            assert_eq!(text, encode(&decoded, format, ExportFlags::empty()), "{}", format);
        }
    }
}
