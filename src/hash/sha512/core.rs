//! SHA-512 core compression
//!
//! This module implements the compression step of the SHA-512 family as
//! defined in FIPS 180-4, shared by SHA-512 and SHA-384.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a pure single-block `transform`
//! - a multi-block entry point used by the incremental engine

use super::computations::{all_rounds, all_rounds_unrolled};
use crate::hash::backend::Backend;
use crate::hash::words::load_block;

/// Compresses a single 1024-bit message block.
///
/// # Parameters
/// - `backend`: round schedule to use
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, as required by SHA-512.
/// - The message schedule is expanded on the fly by the rounds.
#[inline(always)]
pub fn compress(backend: Backend, block: &[u8; 128], state: &mut [u64; 8]) {
    // Message schedule (first 16 words)
    let mut w: [u64; 16] = load_block(block);

    match backend {
        Backend::Portable => all_rounds(state, w),
        Backend::Unrolled => all_rounds_unrolled(state, &mut w),
    }
}

/// Pure SHA-512 transform: returns the state that follows `state` after
/// compressing `block`.
pub fn transform(mut state: [u64; 8], block: &[u8; 128]) -> [u64; 8] {
    compress(Backend::Portable, block, &mut state);
    state
}

/// Compresses every full 128-byte block of `data`, in order.
///
/// Returns the number of bytes consumed; the remainder is left to the
/// caller.
pub fn compress_blocks(backend: Backend, state: &mut [u64; 8], data: &[u8]) -> usize {
    let blocks = data.chunks_exact(128);
    let consumed = data.len() - blocks.remainder().len();

    match backend {
        Backend::Portable => {
            for block in blocks {
                all_rounds(state, load_block(block));
            }
        }
        Backend::Unrolled => {
            for block in blocks {
                let mut w = load_block(block);
                all_rounds_unrolled(state, &mut w);
            }
        }
    }

    consumed
}
