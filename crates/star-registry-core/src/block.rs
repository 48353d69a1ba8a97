//! Block: one self-hashing record in the ledger.
//!
//! A block is built with a payload only. The chain finalizes it on append by
//! assigning height, timestamp and the previous block's hash, then sealing
//! its own digest. Nothing prevents later mutation, but any mutation is
//! detected by [`Block::validate`].

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::canonical_block_bytes;
use crate::error::CoreError;
use crate::payload::Payload;
use crate::types::BlockHash;

/// A block in the star registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// CBOR-encoded [`Payload`].
    pub payload: Bytes,

    /// Position in the chain. Genesis is 0.
    pub height: u64,

    /// Unix seconds, assigned at append time.
    pub timestamp: i64,

    /// Digest of the preceding block (None only for genesis).
    pub previous_hash: Option<BlockHash>,

    /// This block's own digest, set once at finalization.
    pub hash: Option<BlockHash>,
}

impl Block {
    /// Build an unfinalized block around `payload`.
    pub fn new(payload: &Payload) -> Result<Self, CoreError> {
        Ok(Self {
            payload: payload.encode()?,
            height: 0,
            timestamp: 0,
            previous_hash: None,
            hash: None,
        })
    }

    fn digest(&self, for_hash: bool) -> BlockHash {
        BlockHash::digest(&canonical_block_bytes(self, for_hash))
    }

    /// Digest of the current field values, including whatever `hash` holds.
    ///
    /// Pure: never touches `hash`. On a finalized block this differs from
    /// the stored hash, since the snapshot now carries that hash.
    pub fn compute_digest(&self) -> BlockHash {
        self.digest(false)
    }

    /// Digest of the current field values with `hash` treated as absent.
    ///
    /// This is what `hash` must equal for the block to be valid, and what
    /// the next block's `previous_hash` links to.
    pub fn content_digest(&self) -> BlockHash {
        self.digest(true)
    }

    /// Seal the block: compute its content digest and store it in `hash`.
    ///
    /// Re-finalizing an untouched block yields the same hash.
    pub fn finalize(&mut self) -> BlockHash {
        let hash = self.content_digest();
        self.hash = Some(hash);
        hash
    }

    /// Check that the stored hash still matches the block's content.
    ///
    /// False for a block that was never finalized. Local check only: the
    /// link to the previous block is the chain's concern.
    pub fn validate(&self) -> bool {
        match self.hash {
            Some(stored) => stored == self.content_digest(),
            None => false,
        }
    }

    /// Whether this block sits at the genesis position.
    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }

    /// Decode the payload supplied at construction.
    ///
    /// Fails with [`CoreError::GenesisAccess`] at height 0.
    pub fn decoded_payload(&self) -> Result<Payload, CoreError> {
        if self.is_genesis() {
            return Err(CoreError::GenesisAccess);
        }
        Payload::decode(&self.payload)
    }
}
