//! Fixed-width opaque byte form of a codepoint sequence.
//!
//! Each codepoint is written as four big-endian bytes, so comparing two
//! encodings byte by byte gives the same order as comparing the sequences.

use crate::{Pseudo, Result, UmschError};
use std::convert::TryInto;

pub(crate) const BYTE_COUNT: usize = 4;

pub(crate) fn encode_pseudo(p: Pseudo, buf: &mut [u8; BYTE_COUNT]) {
    *buf = p.into_inner().to_be_bytes();
}

pub(crate) fn decode_pseudo(bytes: [u8; BYTE_COUNT]) -> Result<Pseudo> {
    let value = u32::from_be_bytes(bytes);
    Pseudo::from_u32(value).ok_or(UmschError::InvalidPseudo { value })
}

pub(crate) fn encode_pseudos(pseudos: &[Pseudo]) -> Vec<u8> {
    let mut bytes = vec![0; pseudos.len() * BYTE_COUNT];
    for (&p, chunk) in pseudos.iter().zip(bytes.chunks_exact_mut(BYTE_COUNT)) {
        if let Ok(buf) = chunk.try_into() {
            encode_pseudo(p, buf);
        }
    }
    bytes
}

pub(crate) fn decode_pseudos(bytes: &[u8]) -> Result<Vec<Pseudo>> {
    let chunks = bytes.chunks_exact(BYTE_COUNT);
    if !chunks.remainder().is_empty() {
        return Err(UmschError::TruncatedPseudo { len: bytes.len() });
    }
    chunks
        .map(|chunk| {
            let mut buf = [0; BYTE_COUNT];
            buf.copy_from_slice(chunk);
            decode_pseudo(buf)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_pseudos, encode_pseudos};
    use crate::Pseudo;

    #[test]
    fn test_big_endian_layout() {
        assert_eq!(
            vec![0, 0, 0xF1, 0x01, 0, 0, 0, b'-'],
            encode_pseudos(&[Pseudo::SMALL_ALEPH, Pseudo::from_char('-')])
        );
        assert_eq!(
            vec![0, 1, 0x31, 0xEF],
            encode_pseudos(&[Pseudo::from_char('\u{131EF}')])
        );
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(Ok(vec![]), decode_pseudos(&[]));
    }
}
