// File:    lib.rs
// Date:    2025-07-17
//
// Description: The main library crate for sspad-core, tying together random draws, the character codec and pad set generation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Secret Sharing Pads Core Library
//!
//! Splits short text secrets across N lettered paper pads. Any two pads
//! together reveal a secret through pen-and-paper addition; a single pad
//! reveals nothing.
//!
//! ```no_run
//! use sspad_core::{SecretInput, request::PadRequest};
//!
//! let secrets = vec![SecretInput::new("Safe", "Office safe combination", "12-34-56", true)];
//! let bundle = PadRequest::new("Held by the directors", 3, secrets).build()?;
//! println!("{}", bundle.title());
//! # Ok::<(), sspad_core::PadError>(())
//! ```

/// Splitting characters into pairs of three-digit codes.
pub mod codec;
/// Error types.
pub mod error;
/// Assembling the full multi-pad data set.
pub mod generator;
/// Pads, entries and shares.
pub mod model;
/// Length-obscuring padding.
pub mod padder;
/// Unbiased random integers from a secure source.
pub mod random;
/// Reading a secret back from two pads.
pub mod recovery;
/// Printed representation of codes.
pub mod render;
/// Caller-side validation and pad set metadata.
pub mod request;

pub use error::{CodecError, EntropyError, PadError};
pub use generator::{PadSetGenerator, generate_pad_set};
pub use model::{Pad, PadEntry, PadLetter, PadSet, PartnerCode, SecretInput};
