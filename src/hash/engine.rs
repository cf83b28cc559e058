//! Incremental Merkle–Damgård engine
//!
//! One generic engine drives every algorithm family. It buffers input until
//! a full block is available, hands full blocks to the family's compression
//! function, tracks the total message length and finally applies the
//! padding and the digest finalizer.
//!
//! The engine is parameterized by a [`BlockFunction`] (the compression
//! function of a family) and the block size `B`. Variants sharing a
//! compression function (SHA-224/SHA-256, SHA-384/SHA-512) only differ by
//! the initial vector passed to [`Engine::new`].

use tracing::{debug, trace};

use super::backend::Backend;
use super::digest::Digest;
use super::padding::pad;
use super::words::Word;
use super::Algorithm;
use crate::error::{Error, Result};

/// Compression function of one algorithm family.
///
/// Implementations must be pure: the output state depends only on the
/// input state and the block.
pub(crate) trait BlockFunction<const B: usize> {
    /// State word type.
    type Word: Word;

    /// Chaining state.
    type State: Copy + AsRef<[Self::Word]> + std::fmt::Debug;

    /// Size of the trailing length field, in bytes.
    const LENGTH_FIELD: usize;

    /// Compresses one block into `state`.
    fn compress(backend: Backend, state: &mut Self::State, block: &[u8; B]);

    /// Compresses every full block of `data` into `state`.
    ///
    /// Returns the number of bytes consumed (a multiple of `B`).
    fn compress_blocks(backend: Backend, state: &mut Self::State, data: &[u8]) -> usize;
}

/// Hashing state of a single message stream.
#[derive(Clone, Debug)]
pub(crate) struct Engine<F: BlockFunction<B>, const B: usize> {
    algorithm: Algorithm,
    backend: Backend,
    iv: F::State,
    state: F::State,
    buffer: [u8; B],
    fill: usize,
    total_bits: u128,
}

impl<F: BlockFunction<B>, const B: usize> Engine<F, B> {
    pub(crate) fn new(algorithm: Algorithm, iv: F::State, backend: Backend) -> Self {
        debug_assert_eq!(algorithm.block_size(), B);
        debug_assert_eq!(algorithm.length_field_size(), F::LENGTH_FIELD);

        Engine {
            algorithm,
            backend,
            iv,
            state: iv,
            buffer: [0u8; B],
            fill: 0,
            total_bits: 0,
        }
    }

    pub(crate) fn backend(&self) -> Backend {
        self.backend
    }

    /// Total number of message bits absorbed so far.
    pub(crate) fn total_bits(&self) -> u128 {
        self.total_bits
    }

    /// Absorbs `data`, refusing input beyond the algorithm's length limit.
    ///
    /// The check happens before any byte is absorbed, so a failed call
    /// leaves the engine untouched.
    pub(crate) fn update(&mut self, data: &[u8]) -> Result<()> {
        let limit_bits = self.algorithm.max_message_bits();

        let within_limit = (data.len() as u128)
            .checked_mul(8)
            .and_then(|bits| self.total_bits.checked_add(bits))
            .is_some_and(|total| total <= limit_bits);

        if !within_limit {
            return Err(Error::LengthOverflow {
                algorithm: self.algorithm,
                limit_bits,
            });
        }

        self.absorb(data);

        Ok(())
    }

    /// Absorbs `data` without checking the length limit.
    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        self.total_bits = self.total_bits.wrapping_add((data.len() as u128) << 3);

        // Top up a partially filled buffer first
        if self.fill > 0 {
            let take = (B - self.fill).min(data.len());
            self.buffer[self.fill..self.fill + take].copy_from_slice(&data[..take]);
            self.fill += take;
            data = &data[take..];

            if self.fill < B {
                return;
            }

            F::compress(self.backend, &mut self.state, &self.buffer);
            self.fill = 0;
        }

        // Whole blocks go straight from the input
        let consumed = F::compress_blocks(self.backend, &mut self.state, data);
        let rest = &data[consumed..];

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.fill = rest.len();
    }

    /// Pads the buffered tail, runs the final compressions and serializes
    /// the digest.
    ///
    /// The engine itself is left unchanged.
    pub(crate) fn finalize(&self) -> Digest {
        let mut state = self.state;
        let padding = pad::<B>(&self.buffer[..self.fill], self.total_bits, F::LENGTH_FIELD);

        for block in padding.blocks() {
            F::compress(self.backend, &mut state, block);
        }

        debug!(
            algorithm = self.algorithm.name(),
            backend = self.backend.name(),
            message_bytes = self.total_bits >> 3,
            final_blocks = padding.len(),
            "finalized digest"
        );

        Digest::from_state(self.algorithm, state.as_ref())
    }

    /// Returns the engine to its initial state.
    pub(crate) fn reset(&mut self) {
        trace!(algorithm = self.algorithm.name(), "engine reset");

        self.state = self.iv;
        self.buffer = [0u8; B];
        self.fill = 0;
        self.total_bits = 0;
    }
}
