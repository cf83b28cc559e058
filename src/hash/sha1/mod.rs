//! SHA-1
//!
//! 80-round compression over five 32-bit words and 64-byte blocks.
//! SHA-1 is kept for interoperability with legacy formats; it is not
//! collision resistant and must not be used for new signatures.

pub mod computations;
pub mod core;

pub use self::core::{compress, compress_blocks, transform};

use super::backend::Backend;
use super::engine::BlockFunction;

/// SHA-1 initial hash value (FIPS 180-4, 5.3.1).
pub const H160_INIT: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 round constants, one per group of 20 rounds (FIPS 180-4, 4.2.1).
pub const K160: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// Compression function marker for SHA-1.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Sha1Core;

impl BlockFunction<64> for Sha1Core {
    type Word = u32;
    type State = [u32; 5];

    const LENGTH_FIELD: usize = 8;

    fn compress(backend: Backend, state: &mut [u32; 5], block: &[u8; 64]) {
        compress(backend, block, state);
    }

    fn compress_blocks(backend: Backend, state: &mut [u32; 5], data: &[u8]) -> usize {
        compress_blocks(backend, state, data)
    }
}
