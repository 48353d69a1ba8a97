//! # Star Registry Core
//!
//! Pure primitives for the Star Registry: self-hashing blocks, payloads,
//! canonical encoding and ownership proofs.
//!
//! This crate contains no I/O, no locking, no clocks. Time enters as plain
//! integers supplied by the caller.
//!
//! ## Key Types
//!
//! - [`Block`] - A record that carries a payload and seals its own digest
//! - [`BlockHash`] - Content-addressed digest (Blake3 hash)
//! - [`Payload`] - Genesis sentinel or star registration
//! - [`OwnershipMessage`] - The challenge a wallet signs to claim a star
//!
//! ## Canonicalization
//!
//! Block digests are taken over deterministic CBOR. See [`canonical`].

pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod ownership;
pub mod payload;
pub mod types;

pub use block::Block;
pub use canonical::canonical_block_bytes;
pub use crypto::{Ed25519PublicKey, Ed25519Signature, Ed25519Verifier, Keypair, SignatureVerifier};
pub use error::CoreError;
pub use ownership::{OwnershipMessage, MESSAGE_WINDOW_SECS, REGISTRY_TAG};
pub use payload::{Payload, Star, GENESIS_DATA};
pub use types::BlockHash;
