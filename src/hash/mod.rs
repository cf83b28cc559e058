//! Hash algorithms exposed by the crate.
//!
//! Includes SHA-1, SHA-224, SHA-256, SHA-384 and SHA-512 with a pure-Rust
//! implementation.
//!
//! - [`HashContext`] is the incremental API (`update` / `finalize`)
//! - [`sha1`], [`sha224`], [`sha256`], [`sha384`] and [`sha512`] hash a
//!   whole message in one call
//! - the `sha1`, `sha256` and `sha512` modules expose the raw compression
//!   functions and initial vectors for constructions that need them

pub mod backend;
pub mod digest;
pub mod padding;
pub mod sha1;
pub mod sha256;
pub mod sha512;
pub mod words;

mod algorithm;
mod context;
mod engine;

pub use algorithm::Algorithm;
pub use backend::Backend;
pub use context::HashContext;
pub use digest::{Digest, MAX_DIGEST_SIZE};

fn oneshot<const N: usize>(algorithm: Algorithm, input: &[u8]) -> [u8; N] {
    let digest = algorithm.digest(input);

    let mut out = [0u8; N];
    out.copy_from_slice(digest.as_bytes());

    out
}

/// Computes the SHA-1 digest of `input`.
pub fn sha1(input: &[u8]) -> [u8; 20] {
    oneshot(Algorithm::Sha1, input)
}

/// Computes the SHA-224 digest of `input`.
pub fn sha224(input: &[u8]) -> [u8; 28] {
    oneshot(Algorithm::Sha224, input)
}

/// Computes the SHA-256 digest of `input`.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    oneshot(Algorithm::Sha256, input)
}

/// Computes the SHA-384 digest of `input`.
pub fn sha384(input: &[u8]) -> [u8; 48] {
    oneshot(Algorithm::Sha384, input)
}

/// Computes the SHA-512 digest of `input`.
///
/// # Notes
/// - The implementation follows the standard Merkle–Damgård construction.
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - No heap allocations are performed.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    oneshot(Algorithm::Sha512, input)
}
