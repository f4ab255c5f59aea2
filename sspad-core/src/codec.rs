// File:    codec.rs
// Date:    2025-07-17
//
// Description: Splits characters into pairs of three-digit codes that add up (mod 1000) to the character code.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The additive character codec.
//!
//! A character `c` is split into `(a, b)` where `a` is uniform over 0..=999
//! and `b = (1000 + c - a) mod 1000`. Either half alone is a uniform random
//! number; adding both halves and keeping the last three digits gives `c`
//! back, which is easy to do with pen and paper.

use crate::error::CodecError;
use crate::random::{EntropySource, SecureRandomInt};

/// Codes are the last three decimal digits of a sum.
pub const MODULUS: u16 = 1000;

/// Value used for padding and as the end-of-secret marker.
pub const NUL: u16 = 0;

/// Returns `true` if `c` can be written on a pad: NUL or printable ASCII.
#[must_use]
pub const fn is_encodable(c: char) -> bool {
    matches!(c, '\0' | ' '..='~')
}

/// Returns the index and character code of the first character of `s` that
/// cannot be encoded.
#[must_use]
pub fn first_invalid(s: &str) -> Option<(usize, u32)> {
    s.chars()
        .enumerate()
        .find(|&(_, c)| !is_encodable(c))
        .map(|(i, c)| (i, u32::from(c)))
}

/// Splits a single character into two codes.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`] (at position 0) for characters
/// other than NUL and printable ASCII, or [`CodecError::Entropy`] if the random
/// source fails.
pub fn encode_char<E: EntropySource>(
    rng: &mut SecureRandomInt<E>,
    c: char,
) -> Result<(u16, u16), CodecError> {
    if !is_encodable(c) {
        return Err(CodecError::InvalidCharacter {
            position: 0,
            code: u32::from(c),
        });
    }
    // Both values fit in u16: the draw is below 1000 and `c` below 127.
    let code = c as u16;
    let a = rng.draw(0, u32::from(MODULUS) - 1)? as u16;
    let b = (MODULUS + code - a) % MODULUS;
    Ok((a, b))
}

/// Recombines two codes. A result of [`NUL`] marks padding or the end of the secret.
#[must_use]
pub const fn decode_char(a: u16, b: u16) -> u16 {
    ((a as u32 + b as u32) % MODULUS as u32) as u16
}

/// Splits every character of `s` independently, returning the two code sequences.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`] carrying the index of the first
/// character that cannot be encoded, or [`CodecError::Entropy`] if the random
/// source fails. No codes are returned on error.
pub fn encode_string<E: EntropySource>(
    rng: &mut SecureRandomInt<E>,
    s: &str,
) -> Result<(Vec<u16>, Vec<u16>), CodecError> {
    let length = s.chars().count();
    let mut codes_a = Vec::with_capacity(length);
    let mut codes_b = Vec::with_capacity(length);

    for (position, c) in s.chars().enumerate() {
        let (a, b) = encode_char(rng, c).map_err(|e| match e {
            CodecError::InvalidCharacter { code, .. } => {
                CodecError::InvalidCharacter { position, code }
            }
            other => other,
        })?;
        codes_a.push(a);
        codes_b.push(b);
    }

    Ok((codes_a, codes_b))
}
