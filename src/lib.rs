//! SHA-1 and SHA-2 message digests for Nebula
//!
//! This crate provides the SHA-1 / SHA-2 hashing engine used throughout the
//! Nebula ecosystem: SHA-1, SHA-224, SHA-256, SHA-384 and SHA-512.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! variant is built from the same small set of pieces, each kept in its own
//! module so it can be reviewed in isolation.
//!
//! # Module overview
//!
//! - `hash`
//!   The hashing engine itself. It contains one compression function per
//!   algorithm family (SHA-1, SHA-256/224, SHA-512/384), the padding and
//!   length encoder, the incremental engine and the digest finalizer.
//!
//!   SHA-224 and SHA-384 are not separate algorithms at the compression
//!   level: they run the SHA-256 and SHA-512 transforms with a different
//!   initial vector and keep only a prefix of the serialized state.
//!
//! - `error`
//!   The error type returned by the incremental API. Only two failures
//!   exist: using a context after it was finalized, and feeding more input
//!   than the length field of the algorithm can encode.
//!
//! # Quick start
//!
//! ```
//! use cryptal_sha::hash::{Algorithm, HashContext};
//!
//! let mut ctx = HashContext::new(Algorithm::Sha256);
//! ctx.update(b"hello ").unwrap();
//! ctx.update(b"world").unwrap();
//! let digest = ctx.finalize().unwrap();
//!
//! assert_eq!(digest.as_bytes(), &cryptal_sha::hash::sha256(b"hello world"));
//! ```
//!
//! # Design goals
//!
//! - No heap allocations on the hashing path
//! - Minimal and explicit APIs
//! - Bit-exact FIPS 180-4 behavior for all five variants
//! - Interchangeable compression backends behind one contract
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal hashing needs.

pub mod error;
pub mod hash;

pub use error::{Error, Result};
