use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A named secret to be split across the pads.
#[derive(Deserialize, Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretInput {
    /// Short name printed above the secret on every pad.
    pub name: String,
    /// Optional free text printed below the name.
    #[serde(default)]
    pub description: String,
    /// The secret itself. Only NUL and printable ASCII can be encoded.
    #[serde(alias = "secret")]
    pub plaintext: String,
    /// Whether to append random NUL padding to hide the secret's length.
    #[serde(default = "default_obscure_length", alias = "obscureLength")]
    pub obscure_length: bool,
}

const fn default_obscure_length() -> bool {
    true
}

impl SecretInput {
    /// Creates a new secret.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        plaintext: impl Into<String>,
        obscure_length: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            plaintext: plaintext.into(),
            obscure_length,
        }
    }
}

impl fmt::Debug for SecretInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretInput")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("plaintext", &"<redacted>")
            .field("obscure_length", &self.obscure_length)
            .finish()
    }
}

/// The letter identifying one pad of a set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PadLetter(pub char);

impl fmt::Display for PadLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for PadLetter {
    fn from(letter: char) -> Self {
        Self(letter)
    }
}

/// One pad's share of a secret with respect to one partner pad.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PartnerCode {
    /// The other pad needed to read this share.
    pub partner: PadLetter,
    /// Codes in the range 0..=999, one per (padded) character.
    pub codes: Vec<u16>,
}

/// Everything one pad holds about one secret.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PadEntry {
    /// Name of the secret.
    pub name: String,
    /// Description of the secret.
    pub description: String,
    /// One share per other pad, in letter order.
    pub shares: Vec<PartnerCode>,
}

impl PadEntry {
    /// Returns the codes to combine with the pad labelled `partner`.
    #[must_use]
    pub fn share_for(&self, partner: PadLetter) -> Option<&[u16]> {
        self.shares
            .iter()
            .find(|s| s.partner == partner)
            .map(|s| s.codes.as_slice())
    }
}

/// A single lettered pad.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Pad {
    /// The pad's letter.
    pub letter: PadLetter,
    /// One entry per secret, in input order.
    pub entries: Vec<PadEntry>,
}

/// The complete set of pads produced by one generation call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct PadSet {
    pads: Vec<Pad>,
}

impl PadSet {
    pub(crate) const fn from_pads(pads: Vec<Pad>) -> Self {
        Self { pads }
    }

    /// All pads, in letter order.
    #[must_use]
    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    /// Looks up the pad labelled `letter`.
    #[must_use]
    pub fn pad(&self, letter: PadLetter) -> Option<&Pad> {
        self.pads.iter().find(|p| p.letter == letter)
    }

    /// Letters of all pads, in order.
    pub fn letters(&self) -> impl Iterator<Item = PadLetter> + '_ {
        self.pads.iter().map(|p| p.letter)
    }

    /// The codes printed on pad `letter` for secret `secret_index`, to be
    /// combined with pad `partner`.
    #[must_use]
    pub fn share(&self, letter: PadLetter, secret_index: usize, partner: PadLetter) -> Option<&[u16]> {
        self.pad(letter)?
            .entries
            .get(secret_index)?
            .share_for(partner)
    }

    /// Number of pads in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    /// Returns `true` if the set holds no pads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }
}
