//! Hashing errors

use thiserror::Error;

use crate::hash::Algorithm;

/// Errors reported by the incremental hashing API.
///
/// The compression math itself cannot fail; these variants only describe
/// misuse of a [`HashContext`](crate::hash::HashContext).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `update` or `finalize` was called on a context that already
    /// produced its digest.
    #[error("{algorithm} context already finalized")]
    InvalidState {
        /// Algorithm of the offending context
        algorithm: Algorithm,
    },

    /// The total input would exceed what the length field can encode.
    #[error("{algorithm} input exceeds the maximum message length of {limit_bits} bits")]
    LengthOverflow {
        /// Algorithm of the offending context
        algorithm: Algorithm,
        /// Largest representable message length, in bits
        limit_bits: u128,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
