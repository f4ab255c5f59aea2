// File:    request.rs
// Date:    2025-07-17
//
// Description: Validates a request for a set of pads and assigns letters, colours and the pad set number.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Collecting and validating pad requests.
//!
//! The generator trusts its inputs. This module is the caller-side gate: it
//! checks the number of pads, the letters and every secret before anything
//! is encoded, then hands the generated set over together with what a
//! printout needs (a pad set number, a title and a colour per letter).

use crate::codec::first_invalid;
use crate::error::{EntropyError, PadError};
use crate::generator::PadSetGenerator;
use crate::model::{PadLetter, PadSet, SecretInput};
use crate::padder::MAX_PADDED_INPUT;
use crate::random::{EntropySource, OsEntropy, SecureRandomInt};
use log::info;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Fewest pads in a set.
pub const MIN_PADS: usize = 2;
/// Most pads in a set, one per letter of the alphabet.
pub const MAX_PADS: usize = 26;

/// Returns the letters `A`, `B`, ... for a set of `count` pads.
///
/// # Errors
///
/// Returns [`PadError::PadCount`] if `count` is outside `MIN_PADS..=MAX_PADS`.
pub fn letters_for(count: usize) -> Result<Vec<PadLetter>, PadError> {
    check_pad_count(count)?;
    Ok(('A'..='Z').take(count).map(PadLetter).collect())
}

/// Checks that `letters` is a usable set of pad labels.
///
/// # Errors
///
/// Returns [`PadError::PadCount`] for too few or too many letters and
/// [`PadError::DuplicateLetter`] if a letter repeats.
pub fn validate_letters(letters: &[PadLetter]) -> Result<(), PadError> {
    check_pad_count(letters.len())?;
    let mut seen = HashSet::with_capacity(letters.len());
    for letter in letters {
        if !seen.insert(letter) {
            return Err(PadError::DuplicateLetter(letter.0));
        }
    }
    Ok(())
}

fn check_pad_count(count: usize) -> Result<(), PadError> {
    if count < MIN_PADS || count > MAX_PADS {
        return Err(PadError::PadCount {
            count,
            min: MIN_PADS,
            max: MAX_PADS,
        });
    }
    Ok(())
}

/// Checks every secret can be encoded.
///
/// # Errors
///
/// Returns [`PadError::InvalidCharacter`] for the first character no pad can
/// hold and [`PadError::SecretTooLong`] for oversized secrets.
pub fn validate_secrets(secrets: &[SecretInput]) -> Result<(), PadError> {
    for (secret_index, secret) in secrets.iter().enumerate() {
        if let Some((char_index, code)) = first_invalid(&secret.plaintext) {
            return Err(PadError::InvalidCharacter {
                secret_index,
                char_index,
                code,
            });
        }
        let length = secret.plaintext.chars().count();
        if length > MAX_PADDED_INPUT {
            return Err(PadError::SecretTooLong {
                secret_index,
                length,
                max: MAX_PADDED_INPUT,
            });
        }
    }
    Ok(())
}

/// Parses a JSON array of secrets.
///
/// # Errors
///
/// Returns [`PadError::SecretsFile`] if `text` is not a valid secrets list.
pub fn secrets_from_json(text: &str) -> Result<Vec<SecretInput>, PadError> {
    Ok(serde_json::from_str(text)?)
}

/// Display colour of the pad at `index` in a set of `count` pads.
///
/// Hues are spread evenly around the colour wheel, rounded to whole degrees.
#[must_use]
pub fn pad_colour(index: usize, count: usize) -> String {
    let count = count.max(1);
    let hue = (720 * index + count) / (2 * count);
    format!("hsl({hue}, 100%, 40%)")
}

/// The six-digit number shared by all pads of one set.
///
/// Pads can only be combined with pads carrying the same number.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct PadSetNumber(u32);

impl PadSetNumber {
    /// Largest pad set number.
    pub const MAX: u32 = 999_999;

    /// Draws a uniformly distributed pad set number.
    ///
    /// One million values do not fit the 16-bit draw domain, so the number is
    /// built from two independent draws of three digits each.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the random source fails.
    pub fn draw<E: EntropySource>(rng: &mut SecureRandomInt<E>) -> Result<Self, EntropyError> {
        let high = rng.draw(0, 999)?;
        let low = rng.draw(0, 999)?;
        Ok(Self(high * 1000 + low))
    }

    /// Returns the number as an integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PadSetNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Colour assigned to one pad letter.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PadColour {
    /// The pad letter.
    pub letter: PadLetter,
    /// CSS colour string.
    pub colour: String,
}

/// What the user asked for: how many pads, a note for every pad, the secrets.
#[derive(Debug, Clone)]
pub struct PadRequest {
    /// Free text printed on every pad.
    pub description: String,
    /// Number of pads to create.
    pub pad_count: usize,
    /// Secrets to split, in print order.
    pub secrets: Vec<SecretInput>,
}

impl PadRequest {
    /// Creates a request.
    pub fn new(description: impl Into<String>, pad_count: usize, secrets: Vec<SecretInput>) -> Self {
        Self {
            description: description.into(),
            pad_count,
            secrets,
        }
    }

    /// Checks the pad count and every secret.
    ///
    /// # Errors
    ///
    /// See [`letters_for`] and [`validate_secrets`].
    pub fn validate(&self) -> Result<Vec<PadLetter>, PadError> {
        let letters = letters_for(self.pad_count)?;
        validate_secrets(&self.secrets)?;
        Ok(letters)
    }

    /// Validates the request and generates the pads with `generator`.
    ///
    /// # Errors
    ///
    /// Returns any validation error, or [`PadError::Entropy`] if the random
    /// source fails.
    pub fn build_with<E: EntropySource>(
        &self,
        generator: &mut PadSetGenerator<E>,
    ) -> Result<PadBundle, PadError> {
        let letters = self.validate()?;
        let pad_set_number = PadSetNumber::draw(generator.rng())?;
        let pad_set = generator.generate(&self.secrets, &letters)?;
        let colours = letters
            .iter()
            .enumerate()
            .map(|(i, &letter)| PadColour {
                letter,
                colour: pad_colour(i, letters.len()),
            })
            .collect();

        info!(
            "Created pad set {pad_set_number} with {} pad(s) and {} secret(s).",
            letters.len(),
            self.secrets.len()
        );
        Ok(PadBundle {
            pad_set_number,
            description: self.description.clone(),
            colours,
            pad_set,
        })
    }

    /// Validates the request and generates the pads from the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// See [`PadRequest::build_with`].
    pub fn build(&self) -> Result<PadBundle, PadError> {
        self.build_with(&mut PadSetGenerator::<OsEntropy>::os())
    }
}

/// A generated pad set with everything needed to print it.
#[derive(Serialize, Debug, Clone)]
pub struct PadBundle {
    /// Number printed on every pad of the set.
    pub pad_set_number: PadSetNumber,
    /// Free text printed on every pad.
    pub description: String,
    /// One colour per pad, in letter order.
    pub colours: Vec<PadColour>,
    /// The pads themselves.
    pub pad_set: PadSet,
}

impl PadBundle {
    /// Title for the printed set, e.g. `Secret Sharing Pads 012345{A,B,C}`.
    #[must_use]
    pub fn title(&self) -> String {
        let letters: Vec<String> = self.pad_set.letters().map(|l| l.to_string()).collect();
        format!(
            "Secret Sharing Pads {}{{{}}}",
            self.pad_set_number,
            letters.join(",")
        )
    }

    /// Colour assigned to `letter`.
    #[must_use]
    pub fn colour(&self, letter: PadLetter) -> Option<&str> {
        self.colours
            .iter()
            .find(|c| c.letter == letter)
            .map(|c| c.colour.as_str())
    }
}
