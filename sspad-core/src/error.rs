// File:    error.rs
// Date:    2025-07-17
//
// Description: Error types shared by the random source, the codec, the pad set generator and the recovery helpers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for pad generation and recovery.
//!
//! Every error here is permanent. Nothing is retried and no partial pad set is
//! ever returned alongside an error.

use thiserror::Error;

/// The secure entropy source could not supply random values.
///
/// There is no fallback: a weaker source would silently break the secrecy of
/// every pad produced from it.
#[derive(Debug, Error)]
#[error("secure entropy source unavailable: {0}")]
pub struct EntropyError(pub String);

/// Errors raised while splitting characters into code pairs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The character is neither NUL nor printable ASCII.
    ///
    /// `position` is the character index inside the string being encoded
    /// (always 0 when a single character is encoded).
    #[error("character {code:#x} at position {position} is not NUL or printable ASCII")]
    InvalidCharacter {
        /// Character index within the encoded string.
        position: usize,
        /// The offending Unicode scalar value.
        code: u32,
    },
    /// Random draw failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

/// Errors surfaced at the pad set boundary.
#[derive(Debug, Error)]
pub enum PadError {
    /// A secret contains a character that cannot be written on a pad.
    #[error(
        "secret {secret_index} contains character {code:#x} at position {char_index}; only NUL and printable ASCII are allowed"
    )]
    InvalidCharacter {
        /// Index of the secret in the input list.
        secret_index: usize,
        /// Character index within that secret.
        char_index: usize,
        /// The offending Unicode scalar value.
        code: u32,
    },
    /// Random draw failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    /// Requested number of pads is outside the supported bounds.
    #[error("cannot create {count} pads; between {min} and {max} are supported")]
    PadCount {
        /// Requested number of pads.
        count: usize,
        /// Smallest supported number of pads.
        min: usize,
        /// Largest supported number of pads.
        max: usize,
    },
    /// The same letter was supplied twice.
    #[error("pad letter '{0}' is used more than once")]
    DuplicateLetter(char),
    /// A secret with an obscured length is too long for the padding draw.
    #[error("secret {secret_index} is {length} characters long; at most {max} are supported")]
    SecretTooLong {
        /// Index of the secret in the input list.
        secret_index: usize,
        /// Length of the secret in characters.
        length: usize,
        /// Longest supported secret.
        max: usize,
    },
    /// The secrets file could not be parsed.
    #[error("failed to parse secrets: {0}")]
    SecretsFile(#[from] serde_json::Error),
    /// A printed code is not a number between 000 and 999.
    #[error("'{0}' is not a three-digit code")]
    MalformedCode(String),
    /// Two shares of the same secret must have the same number of codes.
    #[error("shares have different lengths ({first} and {second} codes)")]
    ShareLengthMismatch {
        /// Number of codes in the first share.
        first: usize,
        /// Number of codes in the second share.
        second: usize,
    },
    /// A summed code decodes to something no pad could have encoded.
    ///
    /// This is what a wrong pairing looks like: the codes belong to different
    /// pad sets, or the wrong partner line was copied.
    #[error(
        "sum {value:03} at position {position} is not a valid character; check the pad numbers match and the right code lines were used"
    )]
    MismatchedPads {
        /// Code index at which the invalid sum appeared.
        position: usize,
        /// The invalid sum, modulo 1000.
        value: u16,
    },
}
