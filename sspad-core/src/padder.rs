//! Length-obscuring padding.

use crate::error::EntropyError;
use crate::random::{EntropySource, SecureRandomInt};

/// Longest string [`pad`] accepts; the padding length is a single 16-bit draw.
pub const MAX_PADDED_INPUT: usize = 65_535;

/// Appends between zero and `len(s)` NUL characters to `s`.
///
/// The result starts with `s` and is at most twice as long. NUL also decodes
/// as the end-of-secret marker, so whoever combines two pads simply stops
/// reading at the first `000`.
///
/// # Errors
///
/// Returns an [`EntropyError`] if the random source fails.
///
/// # Panics
///
/// Panics if `s` is longer than [`MAX_PADDED_INPUT`] characters.
pub fn pad<E: EntropySource>(rng: &mut SecureRandomInt<E>, s: &str) -> Result<String, EntropyError> {
    let length = s.chars().count();
    assert!(
        length <= MAX_PADDED_INPUT,
        "Cannot pad a string of {length} characters."
    );
    #[allow(clippy::cast_possible_truncation)]
    let extra = rng.draw(0, length as u32)? as usize;

    let mut padded = String::with_capacity(s.len() + extra);
    padded.push_str(s);
    padded.extend(std::iter::repeat_n('\0', extra));
    Ok(padded)
}
