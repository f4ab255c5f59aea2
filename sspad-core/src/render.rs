//! The printed form of codes.
//!
//! A code is always printed as exactly three digits (`000` to `999`) and the
//! codes of one share are separated by single spaces. This text is what two
//! pad holders actually exchange, so it has to stay digit-exact.

use crate::codec::MODULUS;
use crate::error::PadError;

/// Formats one code as three zero-padded digits.
#[must_use]
pub fn format_code(code: u16) -> String {
    format!("{code:03}")
}

/// Formats a share as space-separated three-digit codes.
#[must_use]
pub fn format_codes(codes: &[u16]) -> String {
    codes
        .iter()
        .map(|&c| format_code(c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses codes copied from a pad.
///
/// Codes may be separated by any whitespace. Leading zeros are optional.
///
/// # Errors
///
/// Returns [`PadError::MalformedCode`] for tokens that are not one to three
/// decimal digits.
pub fn parse_codes(text: &str) -> Result<Vec<u16>, PadError> {
    text.split_whitespace()
        .map(|token| {
            if token.is_empty() || token.len() > 3 || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PadError::MalformedCode(token.to_string()));
            }
            token
                .parse::<u16>()
                .ok()
                .filter(|&code| code < MODULUS)
                .ok_or_else(|| PadError::MalformedCode(token.to_string()))
        })
        .collect()
}
