//! The Blockchain: owner of the block sequence.
//!
//! All writes go through one path, validate-then-append, which runs under
//! the chain's write lock. Two registrations racing therefore cannot both
//! claim the same height. Readers take the read lock and never see a
//! half-appended block.
//!
//! Every append revalidates the whole chain: n appends cost O(n²) digest
//! computations.

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use star_registry_core::{
    Block, BlockHash, Ed25519Verifier, OwnershipMessage, Payload, SignatureVerifier, Star,
};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::time::{SystemTimeSource, TimeSource};

/// An in-memory, append-only chain of star registrations.
pub struct Blockchain<V = Ed25519Verifier, T = SystemTimeSource>
where
    V: SignatureVerifier,
    T: TimeSource,
{
    /// Blocks in height order. Index equals height.
    chain: RwLock<Vec<Block>>,
    /// Ownership proof checker.
    verifier: V,
    /// Clock for block timestamps and message expiry.
    clock: T,
    /// Configuration.
    config: RegistryConfig,
}

impl Blockchain {
    /// A chain with Ed25519 ownership proofs and wall-clock time.
    pub async fn with_defaults() -> Result<Self> {
        Self::new(RegistryConfig::default(), Ed25519Verifier, SystemTimeSource).await
    }
}

impl<V: SignatureVerifier, T: TimeSource> Blockchain<V, T> {
    /// Create a chain and seal its genesis block.
    ///
    /// The returned chain is ready: genesis is already at height 0.
    pub async fn new(config: RegistryConfig, verifier: V, clock: T) -> Result<Self> {
        let blockchain = Self {
            chain: RwLock::new(Vec::new()),
            verifier,
            clock,
            config,
        };
        blockchain.initialize().await?;
        Ok(blockchain)
    }

    async fn initialize(&self) -> Result<()> {
        if !self.chain.read().await.is_empty() {
            return Ok(());
        }

        let genesis = Block::new(&Payload::Genesis {
            data: self.config.genesis_data.clone(),
        })?;
        let genesis = self.append_block(genesis).await?;
        info!(hash = ?genesis.hash, "created genesis block");
        Ok(())
    }

    /// Get the configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Height of the newest block.
    pub async fn height(&self) -> u64 {
        self.chain.read().await.len().saturating_sub(1) as u64
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write path
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate the chain, then finalize `block` as the new tip.
    ///
    /// The write lock is held for both steps, so the block's height and
    /// previous hash always describe the chain it actually lands on.
    async fn append_block(&self, mut block: Block) -> Result<Block> {
        let mut chain = self.chain.write().await;

        if let Some(first) = validate_blocks(&chain).into_iter().next() {
            warn!(error = %first, "refusing to append to corrupted chain");
            return Err(RegistryError::ChainCorrupted(first));
        }

        block.height = chain.len() as u64;
        block.timestamp = self.clock.now();
        block.previous_hash = chain.last().and_then(|prev| prev.hash);
        let hash = block.finalize();

        chain.push(block.clone());
        debug!(height = block.height, hash = %hash, "appended block");

        Ok(block)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Star registration
    // ─────────────────────────────────────────────────────────────────────────

    /// The message a wallet must sign to register a star for `address`.
    pub fn request_ownership_message(&self, address: &str) -> String {
        OwnershipMessage::new(address, self.clock.now()).to_string()
    }

    /// Register `star` for `address`, given a signed ownership message.
    ///
    /// Checks run in order: message shape and address, expiry, signature.
    /// Nothing is built or appended unless all three pass.
    pub async fn submit_star(
        &self,
        address: &str,
        message: &str,
        signature: &str,
        star: Star,
    ) -> Result<Block> {
        let parsed = OwnershipMessage::parse_for(message, address).map_err(|e| {
            warn!(%address, error = %e, "rejected ownership message");
            RegistryError::from(e)
        })?;

        let now = self.clock.now();
        let window = self.config.message_window_secs;
        if parsed.is_expired(now, window) {
            let elapsed = parsed.elapsed(now);
            warn!(%address, elapsed, window, "ownership message expired");
            return Err(RegistryError::MessageExpired { elapsed, window });
        }

        if !self.verifier.verify(message, address, signature) {
            warn!(%address, "ownership signature rejected");
            return Err(RegistryError::InvalidSignature);
        }

        let block = Block::new(&Payload::star_registration(address, star))?;
        self.append_block(block).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// First block whose stored hash equals `hash`.
    pub async fn block_by_hash(&self, hash: &BlockHash) -> Option<Block> {
        let chain = self.chain.read().await;
        chain.iter().find(|b| b.hash.as_ref() == Some(hash)).cloned()
    }

    /// Block at `height`, if the chain is that tall.
    pub async fn block_by_height(&self, height: u64) -> Option<Block> {
        let chain = self.chain.read().await;
        chain.iter().find(|b| b.height == height).cloned()
    }

    /// Stars registered to `address`, in chain order. Genesis is skipped.
    pub async fn stars_by_address(&self, address: &str) -> Result<Vec<Star>> {
        let chain = self.chain.read().await;
        let mut stars = Vec::new();
        for block in chain.iter().filter(|b| !b.is_genesis()) {
            let payload = block.decoded_payload()?;
            if payload.owner() == Some(address) {
                stars.extend(payload.into_star());
            }
        }
        Ok(stars)
    }

    /// Every integrity problem in the chain, as `"block {i} is invalid"`.
    ///
    /// Never fails; an untouched chain yields an empty list.
    pub async fn validate_chain(&self) -> Vec<String> {
        validate_blocks(&self.chain.read().await)
    }
}

/// Check each block's own hash, then its link to the previous block.
///
/// The link is checked against a fresh content digest of the previous block,
/// so tampering with block k flags both k and k+1.
fn validate_blocks(chain: &[Block]) -> Vec<String> {
    let mut errors = Vec::new();

    for (i, block) in chain.iter().enumerate() {
        if !block.validate() {
            errors.push(format!("block {i} is invalid"));
            continue;
        }

        if i == 0 {
            continue;
        }

        if block.previous_hash != Some(chain[i - 1].content_digest()) {
            errors.push(format!("block {i} is invalid"));
        }
    }

    errors
}
