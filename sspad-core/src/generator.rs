// File:    generator.rs
// Date:    2025-07-17
//
// Description: Builds a complete set of secret sharing pads by splitting every secret independently for every pair of pads.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Pad set generation.
//!
//! For N pads there are N·(N-1)/2 pad pairs. Every secret is split afresh for
//! every pair, so each pad carries N-1 unrelated shares of each secret and any
//! two pads together hold exactly one matching pair of shares.

use crate::codec::encode_string;
use crate::error::{CodecError, PadError};
use crate::model::{Pad, PadEntry, PadLetter, PadSet, PartnerCode, SecretInput};
use crate::padder;
use crate::random::{EntropySource, OsEntropy, SecureRandomInt};
use log::{debug, trace};
use zeroize::Zeroizing;

/// Generates pad sets from an injected entropy source.
#[derive(Debug, Default)]
pub struct PadSetGenerator<E> {
    rng: SecureRandomInt<E>,
}

impl PadSetGenerator<OsEntropy> {
    /// Creates a generator backed by the operating system's secure random source.
    #[must_use]
    pub const fn os() -> Self {
        Self {
            rng: SecureRandomInt::os(),
        }
    }
}

impl<E: EntropySource> PadSetGenerator<E> {
    /// Creates a generator drawing from `source`.
    pub const fn new(source: E) -> Self {
        Self {
            rng: SecureRandomInt::new(source),
        }
    }

    /// Gives access to the underlying random integer source.
    pub fn rng(&mut self) -> &mut SecureRandomInt<E> {
        &mut self.rng
    }

    /// Splits `secrets` across one pad per entry of `letters`.
    ///
    /// `letters` are expected to be unique and at least two; the collector in
    /// [`crate::request`] enforces this before calling in.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidCharacter`] if any secret contains a
    /// character that cannot be encoded, or [`PadError::Entropy`] if the random
    /// source fails. Either aborts the whole call.
    ///
    /// # Panics
    ///
    /// Panics if a secret with `obscure_length` set is longer than
    /// [`padder::MAX_PADDED_INPUT`] characters.
    pub fn generate(
        &mut self,
        secrets: &[SecretInput],
        letters: &[PadLetter],
    ) -> Result<PadSet, PadError> {
        debug!(
            "Generating pad set: {} secret(s) across {} pad(s).",
            secrets.len(),
            letters.len()
        );

        let mut pads: Vec<Pad> = letters
            .iter()
            .map(|&letter| Pad {
                letter,
                entries: secrets
                    .iter()
                    .map(|s| PadEntry {
                        name: s.name.clone(),
                        description: s.description.clone(),
                        shares: Vec::with_capacity(letters.len().saturating_sub(1)),
                    })
                    .collect(),
            })
            .collect();

        for (secret_index, secret) in secrets.iter().enumerate() {
            let working = if secret.obscure_length {
                Zeroizing::new(padder::pad(&mut self.rng, &secret.plaintext)?)
            } else {
                Zeroizing::new(secret.plaintext.clone())
            };
            trace!(
                "Secret {secret_index} encodes to {} code(s) per share.",
                working.chars().count()
            );

            for i in 0..letters.len() {
                for j in (i + 1)..letters.len() {
                    let (codes_a, codes_b) =
                        encode_string(&mut self.rng, &working).map_err(|e| match e {
                            CodecError::InvalidCharacter { position, code } => {
                                PadError::InvalidCharacter {
                                    secret_index,
                                    char_index: position,
                                    code,
                                }
                            }
                            CodecError::Entropy(e) => PadError::Entropy(e),
                        })?;

                    pads[i].entries[secret_index].shares.push(PartnerCode {
                        partner: letters[j],
                        codes: codes_a,
                    });
                    pads[j].entries[secret_index].shares.push(PartnerCode {
                        partner: letters[i],
                        codes: codes_b,
                    });
                }
            }
        }

        debug!(
            "Generated {} share(s) per secret.",
            letters.len() * letters.len().saturating_sub(1) / 2
        );
        Ok(PadSet::from_pads(pads))
    }
}

/// Splits `secrets` across pads labelled `letters` using the operating
/// system's secure random source.
///
/// # Errors
///
/// See [`PadSetGenerator::generate`].
pub fn generate_pad_set(secrets: &[SecretInput], letters: &[PadLetter]) -> Result<PadSet, PadError> {
    PadSetGenerator::os().generate(secrets, letters)
}
