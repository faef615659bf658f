//! Conversion profiles: a complete decode, filter and encode pipeline stored as
//! TOML.
//!
//! ```toml
//! source = "umschrift_ttn"
//! import = []
//! filter = ["morph", "lower"]
//! target = "unicode"
//! export = ["j_for_yod"]
//! ```

use serde::{Deserialize, Serialize};

use crate::{decode, ExportFlags, FilterFlags, Format, ImportFlags, Result, UmschError};

/// One configured conversion from a source format to a target format.
///
/// The option lists may be left out, in which case no option is set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Format the input is written in.
    pub source: Format,
    /// Options for decoding the input.
    #[serde(default)]
    pub import: ImportFlags,
    /// Normalization applied between decoding and encoding.
    #[serde(default)]
    pub filter: FilterFlags,
    /// Format to write.
    pub target: Format,
    /// Options for encoding the output.
    #[serde(default)]
    pub export: ExportFlags,
}

impl Profile {
    /// Creates a profile without any options.
    pub fn new(source: Format, target: Format) -> Self {
        Profile {
            source,
            import: ImportFlags::empty(),
            filter: FilterFlags::empty(),
            target,
            export: ExportFlags::empty(),
        }
    }

    /// Parses a profile from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: Profile =
            toml::from_str(content).map_err(|e| UmschError::ProfileParse {
                message: e.to_string(),
            })?;
        tracing::debug!(
            source = %profile.source,
            target = %profile.target,
            import = ?profile.import,
            filter = ?profile.filter,
            export = ?profile.export,
            "loaded profile"
        );
        Ok(profile)
    }

    /// Writes the profile as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| UmschError::ProfileSerialize {
            message: e.to_string(),
        })
    }

    /// Runs `text` through the whole pipeline.
    pub fn convert(&self, text: &str) -> Result<String> {
        let decoded = decode(text, self.source, self.import)?;
        let filtered = if self.filter.is_empty() {
            decoded
        } else {
            decoded.filter(self.filter)
        };
        Ok(filtered.encode(self.target, self.export))
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;
    use crate::{ExportFlags, FilterFlags, Format, ImportFlags, UmschError};

    const TTN_TO_UNICODE: &str = r#"
source = "umschrift_ttn"
filter = ["morph", "hyphens", "lower"]
target = "unicode"
export = ["j_for_yod"]
"#;

    #[test]
    fn test_from_toml_str() {
        let profile = Profile::from_toml_str(TTN_TO_UNICODE).unwrap();
        assert_eq!(Format::UmschriftTtn, profile.source);
        assert_eq!(ImportFlags::empty(), profile.import);
        assert_eq!(
            FilterFlags::MORPH | FilterFlags::HYPHENS | FilterFlags::LOWER,
            profile.filter
        );
        assert_eq!(ExportFlags::J_FOR_YOD, profile.export);
        assert_eq!("ḥꜣtj ꜥ yꜣ", profile.convert("O#.tj-o-jj#").unwrap());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut profile = Profile::new(Format::TrlitCgTimes2023, Format::Transliteration);
        profile.import = ImportFlags::S_FOR_Z | ImportFlags::NFC;
        profile.export = ExportFlags::Z_FOR_S_AND_S_FOR_S_ACUTE;
        let written = profile.to_toml_string().unwrap();
        assert!(written.contains("source = \"trlit_cg_times_2023\""));
        assert_eq!(profile, Profile::from_toml_str(&written).unwrap());
    }

    #[test]
    fn test_every_format_name_parses() {
        for format in Format::ALL {
            let content = format!("source = \"{}\"\ntarget = \"unicode\"\n", format);
            assert_eq!(format, Profile::from_toml_str(&content).unwrap().source);
        }
        let profile =
            Profile::from_toml_str("source = \"trlit_cg_times_2023\"\ntarget = \"unicode\"\n").unwrap();
        assert_eq!(Format::TrlitCgTimes2023, profile.source);
    }

    #[test]
    fn test_filter_groups_by_name() {
        let profile = Profile::from_toml_str(
            "source = \"unicode\"\nfilter = [\"clean\", \"replace_all\", \"lower\"]\ntarget = \"unicode\"\n",
        )
        .unwrap();
        assert_eq!(
            FilterFlags::CLEAN | FilterFlags::REPLACE_ALL | FilterFlags::LOWER,
            profile.filter
        );
        assert_eq!("ḥꜣtꞽ pꜣ", profile.convert("Ḥꜣ.tꞽ pʾ").unwrap());
    }

    #[test]
    fn test_rejects_unknown_names() {
        let err = Profile::from_toml_str("source = \"unicode\"\ntarget = \"unicode\"\nfilter = [\"shout\"]\n")
            .unwrap_err();
        match err {
            UmschError::ProfileParse { message } => assert!(message.contains("shout")),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(Profile::from_toml_str("source = \"hieratic\"\ntarget = \"unicode\"\n").is_err());
    }

    #[test]
    fn test_convert_reports_decode_errors() {
        let profile = Profile::new(Format::Unicode, Format::Transliteration);
        assert!(matches!(
            profile.convert("x\u{32D}"),
            Err(UmschError::UnmappableCombination { base: 'x', .. })
        ));
        assert_eq!("nTr", profile.convert("nṯr").unwrap());
    }
}
