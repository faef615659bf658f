//! Error types of the codec.

use thiserror::Error;

/// Errors from decoding, searching and reading opaque forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UmschError {
    /// A combining mark follows a letter it cannot combine with.
    #[error("cannot combine {base:?} with mark {mark:?} at position {position}")]
    UnmappableCombination {
        /// The letter before the mark.
        base: char,
        /// The combining mark.
        mark: char,
        /// Index of `base` in the decoded input, counted in `char`s.
        position: usize,
    },

    /// The needle of [`UmschStr::index`](crate::UmschStr::index) was not found.
    #[error("subsequence not found")]
    NotFound,

    /// A value that is not a Unicode scalar value was read as a codepoint.
    #[error("{value:#X} is not a valid codepoint")]
    InvalidPseudo {
        /// The rejected value.
        value: u32,
    },

    /// An opaque byte form whose length is not a multiple of four.
    #[error("opaque form of {len} bytes is not a whole number of codepoints")]
    TruncatedPseudo {
        /// Length of the rejected input in bytes.
        len: usize,
    },

    /// A conversion profile could not be read.
    #[cfg(feature = "serde")]
    #[error("profile parse error: {message}")]
    ProfileParse {
        /// Description from the TOML parser.
        message: String,
    },

    /// A conversion profile could not be written.
    #[cfg(feature = "serde")]
    #[error("profile serialize error: {message}")]
    ProfileSerialize {
        /// Description from the TOML serializer.
        message: String,
    },
}

/// Result type of the codec.
pub type Result<T> = std::result::Result<T, UmschError>;

#[cfg(test)]
mod tests {
    use super::UmschError;

    #[test]
    fn test_display() {
        let err = UmschError::UnmappableCombination {
            base: 'x',
            mark: '\u{32F}',
            position: 3,
        };
        assert_eq!(
            "cannot combine 'x' with mark '\\u{32f}' at position 3",
            err.to_string()
        );
        assert_eq!(
            "0xD800 is not a valid codepoint",
            UmschError::InvalidPseudo { value: 0xD800 }.to_string()
        );
    }
}
