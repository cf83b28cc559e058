use super::computations::{all_rounds, all_rounds_unrolled};
use crate::hash::backend::Backend;
use crate::hash::words::load_block;

/// Compresses a single 512-bit message block into `state`.
#[inline(always)]
pub fn compress(backend: Backend, block: &[u8; 64], state: &mut [u32; 5]) {
    let mut w: [u32; 16] = load_block(block);

    match backend {
        Backend::Portable => all_rounds(state, w),
        Backend::Unrolled => all_rounds_unrolled(state, &mut w),
    }
}

/// Pure SHA-1 transform: returns the state that follows `state` after
/// compressing `block`.
pub fn transform(mut state: [u32; 5], block: &[u8; 64]) -> [u32; 5] {
    compress(Backend::Portable, block, &mut state);
    state
}

/// Compresses every full 64-byte block of `data` and returns the number of
/// bytes consumed.
pub fn compress_blocks(backend: Backend, state: &mut [u32; 5], data: &[u8]) -> usize {
    let blocks = data.chunks_exact(64);
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
