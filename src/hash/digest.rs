//! Digest finalizer and output type
//!
//! The final chaining state is serialized word by word in big-endian order
//! and truncated to the digest size of the algorithm. SHA-224 keeps the
//! first 28 of 32 bytes, SHA-384 the first 48 of 64 bytes; no other
//! transformation is applied.

use std::fmt::{self, Debug, Display, Formatter, LowerHex};

use super::Algorithm;
use super::words::{Word, store_words};

/// Largest digest produced by this crate (SHA-512).
pub const MAX_DIGEST_SIZE: usize = 64;

/// A finished message digest.
///
/// The value is immutable and always holds exactly
/// `algorithm().digest_size()` bytes.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    bytes: [u8; MAX_DIGEST_SIZE],
}

impl Digest {
    /// Serializes `state` and truncates it to the digest size of `algorithm`.
    pub(crate) fn from_state<W: Word>(algorithm: Algorithm, state: &[W]) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_SIZE];
        let written = store_words(state, &mut bytes);
        debug_assert_eq!(written, algorithm.state_size());

        // Clear whatever the truncated variants drop
        bytes[algorithm.digest_size()..].fill(0);

        Digest { algorithm, bytes }
    }

    /// Algorithm that produced this digest.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.digest_size()]
    }

    /// Copies the digest into a fixed-size array.
    ///
    /// Returns `None` when `N` differs from the digest size.
    pub fn to_array<const N: usize>(&self) -> Option<[u8; N]> {
        self.as_bytes().try_into().ok()
    }

    /// Copies the digest into a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}, {:x})", self.algorithm, self)
    }
}
