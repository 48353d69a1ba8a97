//! # Star Registry
//!
//! A single-process, in-memory ledger where each block is bound to its
//! predecessor by digest, and where wallets register stars by signing a
//! short-lived ownership message.
//!
//! ## Overview
//!
//! - **Blocks** seal a digest over their own fields on append; any later
//!   mutation is detected by validation.
//! - **The chain** revalidates itself before every append and refuses to
//!   extend a corrupted sequence.
//! - **Registration** checks the ownership message, its age and the wallet
//!   signature before a star is written.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use star_registry::{Blockchain, core::Keypair};
//!
//! async fn example() {
//!     let chain = Blockchain::with_defaults().await.unwrap();
//!     let wallet = Keypair::generate();
//!     let address = wallet.address();
//!
//!     let message = chain.request_ownership_message(&address);
//!     let signature = wallet.sign_message(&message);
//!
//!     let block = chain
//!         .submit_star(&address, &message, &signature, serde_json::json!({"name": "Vega"}))
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(chain.block_by_hash(&block.hash.unwrap()).await, Some(block));
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `star_registry::core` - Core primitives (Block, BlockHash, Payload, ...)

pub mod chain;
pub mod config;
pub mod error;
pub mod time;

pub use star_registry_core as core;

pub use chain::Blockchain;
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use time::{ManualTimeSource, SystemTimeSource, TimeSource};

pub use star_registry_core::{
    Block, BlockHash, Ed25519Verifier, Keypair, OwnershipMessage, Payload, SignatureVerifier, Star,
};
