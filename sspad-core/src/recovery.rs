//! Reading a secret back from two pads.
//!
//! This is the arithmetic a pad holder does by hand: add the codes of the two
//! matching shares, keep the last three digits, turn each sum into a
//! character and stop at the first `000`.

use crate::codec::{NUL, decode_char, is_encodable};
use crate::error::PadError;

/// Recovers a secret from the two shares printed for the same pad pair.
///
/// Everything from the first NUL onwards is padding and is dropped.
///
/// # Errors
///
/// Returns [`PadError::ShareLengthMismatch`] if the shares differ in length,
/// or [`PadError::MismatchedPads`] if a sum before the terminator is not a
/// printable character, which happens when the shares come from different
/// pad sets or different secrets.
pub fn recover(first: &[u16], second: &[u16]) -> Result<String, PadError> {
    if first.len() != second.len() {
        return Err(PadError::ShareLengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }

    let mut secret = String::with_capacity(first.len());
    for (position, (&a, &b)) in first.iter().zip(second).enumerate() {
        let value = decode_char(a, b);
        if value == NUL {
            break;
        }
        match char::from_u32(u32::from(value)).filter(|&c| is_encodable(c)) {
            Some(c) => secret.push(c),
            None => return Err(PadError::MismatchedPads { position, value }),
        }
    }
    Ok(secret)
}
