// File:    random.rs
// Date:    2025-07-17
//
// Description: Unbiased random integers drawn from the operating system's cryptographic random source.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Secure random integer draws.
//!
//! Every code printed on a pad is one-time-pad material, so the random values
//! behind it must come from a cryptographically secure source and must be
//! exactly uniform. [`SecureRandomInt`] turns raw 16-bit values from an
//! [`EntropySource`] into uniform integers over an inclusive range using
//! rejection sampling.

use crate::error::EntropyError;
use rand::{TryRngCore, rngs::OsRng};

/// Number of distinct values produced by one raw draw.
pub const RAW_DOMAIN: u32 = 1 << 16;

/// A source of uniformly distributed 16-bit values.
///
/// Production code uses [`OsEntropy`]. Tests may substitute a deterministic
/// implementation; nothing else should.
pub trait EntropySource {
    /// Returns the next uniformly distributed 16-bit value.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the source cannot supply a value.
    fn next_u16(&mut self) -> Result<u16, EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn next_u16(&mut self) -> Result<u16, EntropyError> {
        (**self).next_u16()
    }
}

/// The operating system's cryptographically secure random number generator.
///
/// `OsRng` holds no state of its own, so any number of `OsEntropy` handles may
/// be used concurrently from different threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_u16(&mut self) -> Result<u16, EntropyError> {
        let mut rng = OsRng;
        let mut buffer = [0u8; 2];
        // Use the failable `try_fill_bytes`; an OS failure must surface, never fall back.
        rng.try_fill_bytes(&mut buffer)
            .map_err(|e| EntropyError(e.to_string()))?;
        Ok(u16::from_le_bytes(buffer))
    }
}

/// Draws unbiased integers from an [`EntropySource`].
#[derive(Debug, Clone, Default)]
pub struct SecureRandomInt<E> {
    source: E,
}

impl SecureRandomInt<OsEntropy> {
    /// Creates a generator backed by the operating system.
    #[must_use]
    pub const fn os() -> Self {
        Self { source: OsEntropy }
    }
}

impl<E: EntropySource> SecureRandomInt<E> {
    /// Wraps an entropy source.
    pub const fn new(source: E) -> Self {
        Self { source }
    }

    /// Returns an integer uniformly distributed over `lo..=hi`.
    ///
    /// Raw values at or above the largest multiple of the range that fits in
    /// 16 bits are rejected, so the result carries no modulo bias. At least
    /// half of all raw values are accepted, so the expected number of raw
    /// draws is below two.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the underlying source fails.
    ///
    /// # Panics
    ///
    /// Panics if `hi < lo` or if the range holds more than 65536 values.
    pub fn draw(&mut self, lo: u32, hi: u32) -> Result<u32, EntropyError> {
        assert!(lo <= hi, "Random range is empty ({lo} > {hi}).");
        assert!(
            hi - lo < RAW_DOMAIN,
            "Random range {lo}..={hi} exceeds the 16-bit draw domain."
        );
        let range = hi - lo + 1;

        if range == 1 {
            return Ok(lo);
        }

        let usable_span = (RAW_DOMAIN / range) * range;
        loop {
            let raw = u32::from(self.source.next_u16()?);
            if raw < usable_span {
                return Ok(lo + raw % range);
            }
            log::trace!("Rejected raw draw {raw} for range {range}");
        }
    }

    /// Gives back the wrapped entropy source.
    pub fn into_inner(self) -> E {
        self.source
    }
}
