//! Test fixtures and helpers.
//!
//! Common setup code for registry tests.

use std::sync::Arc;

use star_registry::{
    Block, Blockchain, Ed25519Verifier, ManualTimeSource, RegistryConfig, Result, Star,
};
use star_registry_core::Keypair;

/// A wallet that can claim stars.
pub struct Wallet {
    pub keypair: Keypair,
}

impl Wallet {
    /// Create a wallet with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// The wallet address.
    pub fn address(&self) -> String {
        self.keypair.address()
    }

    /// Sign an ownership message.
    pub fn sign(&self, message: &str) -> String {
        self.keypair.sign_message(message)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

/// Create several wallets with distinct deterministic seeds.
pub fn wallets(count: usize) -> Vec<Wallet> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            Wallet::with_seed(seed)
        })
        .collect()
}

/// A registry running on a clock that only moves when the test says so.
pub struct TestRegistry {
    pub chain: Blockchain<Ed25519Verifier, Arc<ManualTimeSource>>,
    pub clock: Arc<ManualTimeSource>,
}

impl TestRegistry {
    /// Create a registry with genesis sealed at `now`.
    pub async fn new(now: i64) -> Self {
        Self::with_config(now, RegistryConfig::default()).await
    }

    pub async fn with_config(now: i64, config: RegistryConfig) -> Self {
        let clock = Arc::new(ManualTimeSource::new(now));
        let chain = Blockchain::new(config, Ed25519Verifier, Arc::clone(&clock))
            .await
            .expect("genesis append on an empty chain");
        Self { chain, clock }
    }

    /// Request, sign and submit in one step, as a well-behaved wallet would.
    pub async fn register(&self, wallet: &Wallet, star: Star) -> Result<Block> {
        let address = wallet.address();
        let message = self.chain.request_ownership_message(&address);
        let signature = wallet.sign(&message);
        self.chain.submit_star(&address, &message, &signature, star).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fixture_registration() {
        let registry = TestRegistry::new(1000).await;
        let wallet = Wallet::with_seed([0x01; 32]);

        let block = registry.register(&wallet, json!("Vega")).await.unwrap();
        assert_eq!(block.height, 1);
        assert_eq!(block.timestamp, 1000);
    }

    #[tokio::test]
    async fn test_fixture_chain_links() {
        let registry = TestRegistry::new(1000).await;
        let wallet = Wallet::new();

        let b1 = registry.register(&wallet, json!("one")).await.unwrap();
        registry.clock.advance(5);
        let b2 = registry.register(&wallet, json!("two")).await.unwrap();

        assert_eq!(b2.previous_hash, b1.hash);
        assert_eq!(b2.timestamp, 1005);
    }

    #[tokio::test]
    async fn test_stars_per_wallet() {
        let registry = TestRegistry::new(1000).await;
        let parties = wallets(3);

        for (i, wallet) in parties.iter().enumerate() {
            for n in 0..=i {
                registry.register(wallet, json!({ "n": n })).await.unwrap();
            }
        }

        for (i, wallet) in parties.iter().enumerate() {
            let stars = registry.chain.stars_by_address(&wallet.address()).await.unwrap();
            assert_eq!(stars.len(), i + 1);
        }
        assert!(registry.chain.validate_chain().await.is_empty());
    }

    #[test]
    fn test_wallets_distinct() {
        let parties = wallets(3);
        assert_ne!(parties[0].address(), parties[1].address());
        assert_ne!(parties[1].address(), parties[2].address());
    }
}
