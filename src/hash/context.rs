//! Hash context
//!
//! [`HashContext`] is the incremental hashing API. It wraps the engine of
//! the selected algorithm family and enforces the context lifecycle:
//!
//! ```text
//! Accepting --finalize()--> Finalized --reset()--> Accepting
//! ```
//!
//! `update` and `finalize` are only valid while accepting. Once finalized,
//! both return [`Error::InvalidState`] and the produced digest stays
//! available through [`HashContext::digest`].
//!
//! A context is a plain value: it can be moved to another thread, but a
//! single context is only ever mutated through `&mut self`.

use tracing::{trace, warn};

use super::Algorithm;
use super::backend::Backend;
use super::digest::Digest;
use super::engine::Engine;
use super::sha1::{H160_INIT, Sha1Core};
use super::sha256::{H224_INIT, H256_INIT, Sha256Core};
use super::sha512::{H384_INIT, H512_INIT, Sha512Core};
use crate::error::{Error, Result};

/// Engine of one of the three compression families.
#[derive(Clone, Debug)]
enum Family {
    Sha1(Engine<Sha1Core, 64>),
    Sha256(Engine<Sha256Core, 64>),
    Sha512(Engine<Sha512Core, 128>),
}

impl Family {
    fn new(algorithm: Algorithm, backend: Backend) -> Self {
        match algorithm {
            Algorithm::Sha1 => Family::Sha1(Engine::new(algorithm, H160_INIT, backend)),
            Algorithm::Sha224 => Family::Sha256(Engine::new(algorithm, H224_INIT, backend)),
            Algorithm::Sha256 => Family::Sha256(Engine::new(algorithm, H256_INIT, backend)),
            Algorithm::Sha384 => Family::Sha512(Engine::new(algorithm, H384_INIT, backend)),
            Algorithm::Sha512 => Family::Sha512(Engine::new(algorithm, H512_INIT, backend)),
        }
    }
}

macro_rules! dispatch {
    ($family:expr, $engine:pat => $body:expr) => {
        match $family {
            Family::Sha1($engine) => $body,
            Family::Sha256($engine) => $body,
            Family::Sha512($engine) => $body,
        }
    };
}

/// Incremental SHA-1 / SHA-2 hashing context.
#[derive(Clone, Debug)]
pub struct HashContext {
    algorithm: Algorithm,
    family: Family,
    digest: Option<Digest>,
}

impl HashContext {
    /// Creates a fresh context, using the backend chosen by
    /// [`Backend::detect`].
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_backend(algorithm, Backend::detect())
    }

    /// Creates a fresh context running on `backend`.
    pub fn with_backend(algorithm: Algorithm, backend: Backend) -> Self {
        trace!(algorithm = algorithm.name(), backend = backend.name(), "new hash context");

        HashContext {
            algorithm,
            family: Family::new(algorithm, backend),
            digest: None,
        }
    }

    /// Hashes a whole message at once.
    pub(crate) fn oneshot(algorithm: Algorithm, input: &[u8]) -> Digest {
        let family = Family::new(algorithm, Backend::PREFERRED);

        dispatch!(family, mut engine => {
            engine.absorb(input);
            engine.finalize()
        })
    }

    /// Algorithm computed by this context.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Backend running the compression function.
    pub fn backend(&self) -> Backend {
        dispatch!(&self.family, engine => engine.backend())
    }

    /// Number of message bytes absorbed so far.
    pub fn message_len(&self) -> u128 {
        dispatch!(&self.family, engine => engine.total_bits() >> 3)
    }

    /// Whether [`finalize`](Self::finalize) already ran.
    pub fn is_finalized(&self) -> bool {
        self.digest.is_some()
    }

    /// The digest produced by [`finalize`](Self::finalize), if any.
    pub fn digest(&self) -> Option<&Digest> {
        self.digest.as_ref()
    }

    /// Feeds `data` into the context.
    ///
    /// Any number of calls with any lengths (including empty slices) is
    /// equivalent to a single call with their concatenation.
    ///
    /// # Errors
    /// - [`Error::InvalidState`] if the context was already finalized
    /// - [`Error::LengthOverflow`] if the total message would exceed
    ///   [`Algorithm::max_message_bits`]; nothing is absorbed in that case
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_accepting("update")?;

        dispatch!(&mut self.family, engine => engine.update(data)).inspect_err(|err| {
            warn!(algorithm = self.algorithm.name(), %err, "update rejected");
        })
    }

    /// Pads the message, computes the digest and moves the context to the
    /// finalized state.
    ///
    /// # Errors
    /// - [`Error::InvalidState`] if the context was already finalized
    pub fn finalize(&mut self) -> Result<Digest> {
        self.ensure_accepting("finalize")?;

        let digest = dispatch!(&self.family, engine => engine.finalize());
        self.digest = Some(digest);

        Ok(digest)
    }

    /// Returns the context to a fresh accepting state, keeping its
    /// algorithm and backend.
    pub fn reset(&mut self) {
        dispatch!(&mut self.family, engine => engine.reset());
        self.digest = None;
    }

    fn ensure_accepting(&self, operation: &'static str) -> Result<()> {
        if self.digest.is_none() {
            return Ok(());
        }

        warn!(
            algorithm = self.algorithm.name(),
            operation, "operation on finalized hash context"
        );

        Err(Error::InvalidState {
            algorithm: self.algorithm,
        })
    }
}
