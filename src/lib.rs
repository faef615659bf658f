#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs, missing_debug_implementations)]
//! Egyptological transliteration text and the legacy fonts it was typed in.
//!
//! Transliterations of Egyptian found in older documents were typed in one of
//! several custom fonts, each of which reuses ordinary ASCII and Latin-1 keys
//! for the special letters (`A` for `ꜣ`, `H` for `ḥ` and so on). The same word
//! therefore has a different byte sequence in every font, and none of them is
//! searchable as Unicode.
//!
//! The `Pseudo` type represents one canonical symbol. Letters and
//! morphological punctuation are mapped to private-use codepoints ordered by
//! the Egyptological alphabet, so comparing two sequences compares them in
//! dictionary order. Anything else is kept verbatim.
//!
//! The `UmschStr` type, also called a "canonical sequence slice", is the
//! primitive sequence type. It is usually seen in its borrowed form,
//! `&UmschStr`, and supports searching, slicing, case conversion and
//! [filtering](FilterFlags).
//!
//! The `UmschString` type is the growable owned sequence type. It is built by
//! decoding text in one of the supported [`Format`]s and written back out with
//! [`UmschStr::encode`].
//!
//! # Example
//!
//! ```
//! use umschrift::{ExportFlags, FilterFlags, ImportFlags, UmschString};
//!
//! let word = UmschString::from_umschrift_ttn("nTr", ImportFlags::empty())?;
//! assert_eq!("nṯr", word.to_unicode(ExportFlags::empty()));
//! assert_eq!("nTr", word.to_transliteration(ExportFlags::empty()));
//!
//! let search = UmschString::from_unicode("Ḥꜣ.tꞽ", ImportFlags::empty())?;
//! assert_eq!("ḥꜣtꞽ", search.filter(FilterFlags::CLEAN | FilterFlags::LOWER).to_string());
//! # Ok::<(), umschrift::UmschError>(())
//! ```
//!
//! # Opaque forms
//!
//! Sequences can be stored as text with [`UmschStr::to_pseudo`] or as bytes
//! with [`UmschStr::to_pseudo_bytes`]. Both forms sort the same way as the
//! sequences themselves and read back losslessly.

pub(crate) mod tables;

pub(crate) mod pseudo_ty;

pub(crate) mod flags;

pub(crate) mod format;

pub(crate) mod error;

pub(crate) mod decode;

pub(crate) mod encode;

pub(crate) mod filter;

pub(crate) mod pseudo_bytes;

pub(crate) mod umsch_str_ty;

pub(crate) mod umsch_string;

#[cfg(feature = "serde")]
pub(crate) mod profile;

#[cfg(test)]
mod properties;

pub use pseudo_ty::{Band, Pseudo};

pub use flags::{ExportFlags, FilterFlags, ImportFlags};

pub use format::Format;

pub use error::{Result, UmschError};

pub use decode::decode;

pub use encode::encode;

pub use umsch_str_ty::{Pseudos, UmschStr};

pub use umsch_string::UmschString;

#[cfg(feature = "serde")]
pub use profile::Profile;

/// A slice of `Pseudo`s
pub type PseudoSlice = [Pseudo];

/// A `Vec` of `Pseudo`s
pub type PseudoVec = Vec<Pseudo>;
