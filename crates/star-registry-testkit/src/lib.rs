//! # Star Registry Testkit
//!
//! Testing utilities for the Star Registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed block snapshots with their expected canonical bytes
//! - **Generators**: Proptest strategies for stars, payloads and wallets
//! - **Fixtures**: Wallets that sign ownership messages and a registry on a manual clock
//!
//! ## Test Fixtures
//!
//! ```rust
//! use star_registry_testkit::fixtures::{TestRegistry, Wallet};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let registry = TestRegistry::new(1_647_104_846).await;
//! let wallet = Wallet::with_seed([0x01; 32]);
//! let block = registry
//!     .register(&wallet, serde_json::json!({"name": "Vega"}))
//!     .await
//!     .unwrap();
//! assert_eq!(block.height, 1);
//! # });
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use star_registry_testkit::generators::star;
//!
//! proptest! {
//!     #[test]
//!     fn registered_stars_roundtrip(s in star()) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{wallets, TestRegistry, Wallet};
pub use generators::{payload, star, wallet_seed};
pub use vectors::{all_vectors, block_from_vector, verify_all_vectors, GoldenVector};
