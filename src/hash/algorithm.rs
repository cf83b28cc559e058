//! Algorithm descriptors
//!
//! Every variant is described by a handful of constants: word width, block
//! size, digest size, state size, round count and length field size. The
//! initial vectors and round tables live next to the compression function
//! of each family (`sha1`, `sha256`, `sha512`).

use std::fmt::{Display, Formatter, Result};

use super::HashContext;
use super::digest::Digest;

/// The five supported digest algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    /// SHA-1 (160-bit digest)
    Sha1,
    /// SHA-224 (SHA-256 transform, 224-bit digest)
    Sha224,
    /// SHA-256 (256-bit digest)
    Sha256,
    /// SHA-384 (SHA-512 transform, 384-bit digest)
    Sha384,
    /// SHA-512 (512-bit digest)
    Sha512,
}

impl Algorithm {
    /// All supported algorithms, ordered by digest size.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Standard algorithm name, e.g. `"SHA-256"`.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes.
    pub const fn digest_size(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// Block size in bytes.
    pub const fn block_size(self) -> usize {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => 64,
            Algorithm::Sha384 | Algorithm::Sha512 => 128,
        }
    }

    /// Word width in bits.
    pub const fn word_bits(self) -> u32 {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => 32,
            Algorithm::Sha384 | Algorithm::Sha512 => 64,
        }
    }

    /// Number of words in the chaining state.
    pub const fn state_words(self) -> usize {
        match self {
            Algorithm::Sha1 => 5,
            _ => 8,
        }
    }

    /// Size of the serialized chaining state in bytes.
    ///
    /// For the truncated variants this is larger than [`digest_size`](Self::digest_size).
    pub const fn state_size(self) -> usize {
        self.state_words() * (self.word_bits() as usize / 8)
    }

    /// Number of rounds (and message schedule words) per block.
    pub const fn rounds(self) -> usize {
        match self {
            Algorithm::Sha224 | Algorithm::Sha256 => 64,
            _ => 80,
        }
    }

    /// Size of the trailing bit-length field written by the padding, in bytes.
    pub const fn length_field_size(self) -> usize {
        match self {
            Algorithm::Sha1 | Algorithm::Sha224 | Algorithm::Sha256 => 8,
            Algorithm::Sha384 | Algorithm::Sha512 => 16,
        }
    }

    /// Largest message length, in bits, the length field can encode.
    pub const fn max_message_bits(self) -> u128 {
        match self.length_field_size() {
            8 => u64::MAX as u128,
            _ => u128::MAX,
        }
    }

    /// Hashes `input` in one shot.
    ///
    /// Inputs beyond [`max_message_bits`](Self::max_message_bits) cannot be
    /// held in memory on any supported target, so this never fails.
    pub fn digest(self, input: &[u8]) -> Digest {
        HashContext::oneshot(self, input)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_variants_share_geometry() {
        assert_eq!(Algorithm::Sha224.block_size(), Algorithm::Sha256.block_size());
        assert_eq!(Algorithm::Sha224.state_size(), Algorithm::Sha256.digest_size());
        assert_eq!(Algorithm::Sha384.block_size(), Algorithm::Sha512.block_size());
        assert_eq!(Algorithm::Sha384.state_size(), Algorithm::Sha512.digest_size());
    }

    #[test]
    fn sha1_geometry() {
        let sha1 = Algorithm::Sha1;

        assert_eq!(sha1.state_size(), sha1.digest_size());
        assert_eq!(sha1.rounds(), 80);
        assert_eq!(sha1.max_message_bits(), u64::MAX as u128);
    }

    #[test]
    fn display_uses_standard_names() {
        let names: Vec<String> = Algorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["SHA-1", "SHA-224", "SHA-256", "SHA-384", "SHA-512"]);
    }
}
