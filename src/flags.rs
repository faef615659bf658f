//! Option sets for decoding, filtering and encoding.
//!
//! Every option is an independent bit. Options combine with `|`, and the effect
//! of a combination is the union of the individual effects.

use std::{fmt, ops};

macro_rules! flag_set {
    (
        $(#[$outer:meta])*
        $name:ident {
            $(
                $(#[$inner:meta])*
                $flag:ident = $bit:expr, $label:literal;
            )*
        }
        $(
            aliases {
                $($alias:ident, $alias_label:literal;)*
            }
        )?
    ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: $name = $name(1 << $bit);
            )*

            const NAMED: &'static [($name, &'static str)] = &[$(($name::$flag, $label)),*];

            const ALIASES: &'static [($name, &'static str)] = &[$($(($name::$alias, $alias_label)),*)?];

            /// The empty set.
            pub const fn empty() -> Self {
                $name(0)
            }

            /// Returns the raw bits.
            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Returns whether no option is set.
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns whether every option in `other` is also set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns whether `self` and `other` share at least one option.
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Looks an option, or a named group of options, up by its snake_case
            /// name.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::NAMED
                    .iter()
                    .chain(Self::ALIASES)
                    .find(|(_, label)| *label == name)
                    .map(|(flag, _)| *flag)
            }

            /// Iterates over the names of the options that are set.
            pub fn names(self) -> impl Iterator<Item = &'static str> {
                Self::NAMED
                    .iter()
                    .filter(move |(flag, _)| self.contains(*flag))
                    .map(|(_, label)| *label)
            }
        }

        impl ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                $name(self.0 | rhs.0)
            }
        }

        impl ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                $name(self.0 & rhs.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(", stringify!($name))?;
                f.debug_list().entries(self.names()).finish()?;
                write!(f, ")")
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.names())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let names = <Vec<String> as serde::Deserialize>::deserialize(deserializer)?;
                let mut set = $name::empty();
                for name in &names {
                    set |= $name::from_name(name).ok_or_else(|| {
                        serde::de::Error::custom(format_args!(
                            "unknown {} option \"{}\"",
                            stringify!($name),
                            name
                        ))
                    })?;
                }
                Ok(set)
            }
        }
    };
}

flag_set! {
    /// Normalization options for [`UmschStr::filter`](crate::UmschStr::filter).
    FilterFlags {
        /// Removes the morphological markers `.` `:` `·`.
        MORPH = 0, "morph";
        /// Removes the suffix pronoun separator `⸗`.
        SUFF_PRON = 1, "suff_pron";
        /// Removes brackets `⸢ ⸣ ⟨ ⟩ ( ) [ ] < > { } |`.
        BRACKETS = 2, "brackets";
        /// Removes punctuation `. , ? ! "`.
        PUNCT = 3, "punct";
        /// Removes the digits `0` to `9`.
        DIGITS = 4, "digits";
        /// Removes parentheses together with everything they enclose.
        FACULTATIVE = 5, "facultative";
        /// Converts every cased letter to lowercase.
        LOWER = 6, "lower";
        /// Replaces hyphens and dashes with spaces.
        HYPHENS = 7, "hyphens";
        /// Replaces `z` with `s`.
        REPLACE_Z = 8, "replace_z";
        /// Replaces `ï` with `y`.
        REPLACE_I_WITH_DIAERESIS = 9, "replace_i_with_diaeresis";
        /// Replaces `i̯` with `ꞽ` and `u̯` with `w`.
        REPLACE_INVERTED_BREVES = 10, "replace_inverted_breves";
        /// Replaces the uncertain consonant `ʾ` with `ꜣ`.
        REPLACE_UNCERTAIN_CONSONANT = 11, "replace_uncertain_consonant";
    }
    aliases {
        CLEAN, "clean";
        REPLACE_ALL, "replace_all";
    }
}

impl FilterFlags {
    /// Removes all markers, separators, brackets and punctuation.
    pub const CLEAN: FilterFlags = FilterFlags(
        FilterFlags::MORPH.0 | FilterFlags::SUFF_PRON.0 | FilterFlags::BRACKETS.0 | FilterFlags::PUNCT.0,
    );

    /// Applies every letter replacement.
    pub const REPLACE_ALL: FilterFlags = FilterFlags(
        FilterFlags::REPLACE_Z.0
            | FilterFlags::REPLACE_I_WITH_DIAERESIS.0
            | FilterFlags::REPLACE_INVERTED_BREVES.0
            | FilterFlags::REPLACE_UNCERTAIN_CONSONANT.0,
    );
}

flag_set! {
    /// Options for [`decode`](crate::decode).
    ImportFlags {
        /// The source writes `s` for *z* and `ś` for *s*; read them back as `z` and `s`.
        S_FOR_Z = 0, "s_for_z";
        /// Composes the input to Unicode NFC before decoding.
        NFC = 1, "nfc";
    }
}

flag_set! {
    /// Options for [`encode`](crate::encode).
    ExportFlags {
        /// Writes `ḳ` and `Ḳ` for `q` and `Q`.
        K_WITH_DOT = 0, "k_with_dot";
        /// Writes `j` and `J` for `ꞽ` and `Ꞽ`.
        J_FOR_YOD = 1, "j_for_yod";
        /// Writes `jj` and `Jj` for `y` and `Y`.
        JJ_FOR_DOUBLE_YOD = 2, "jj_for_double_yod";
        /// Writes `y` and `Y` for `ï` and `Ï`.
        REPLACE_I_WITH_DIAERESIS = 3, "replace_i_with_diaeresis";
        /// Writes `s` for *z* and `ś` for *s*.
        Z_FOR_S_AND_S_FOR_S_ACUTE = 4, "z_for_s_and_s_for_s_acute";
    }
}
