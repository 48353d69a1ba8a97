//! Golden test vectors for deterministic verification.
//!
//! Each vector fixes a block snapshot and the exact canonical bytes it must
//! encode to. Digests are reported alongside so other implementations can
//! compare.

use bytes::Bytes;
use star_registry_core::{canonical_block_bytes, Block, BlockHash};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw payload bytes (already encoded).
    pub payload: &'static [u8],
    pub height: u64,
    pub timestamp: i64,
    pub previous_hash: Option<[u8; 32]>,
    /// Expected canonical snapshot bytes with `hash` forced to null (hex).
    pub expected_canonical: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "genesis-shaped",
            payload: b"genesis",
            height: 0,
            timestamp: 0,
            previous_hash: None,
            expected_canonical: "a5004767656e657369730100020003f604f6",
        },
        GoldenVector {
            name: "linked star block",
            payload: b"star",
            height: 1,
            timestamp: 1_647_104_846,
            previous_hash: Some([0xaa; 32]),
            expected_canonical: "a50044737461720101021a622cd34e035820\
                aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa04f6",
        },
        GoldenVector {
            name: "empty payload, wide height",
            payload: b"",
            height: 65_536,
            timestamp: 1000,
            previous_hash: Some([0x01; 32]),
            expected_canonical: "a50040011a00010000021903e8035820\
                010101010101010101010101010101010101010101010101010101010101010104f6",
        },
    ]
}

/// Build the unfinalized block a vector describes.
pub fn block_from_vector(vector: &GoldenVector) -> Block {
    Block {
        payload: Bytes::from_static(vector.payload),
        height: vector.height,
        timestamp: vector.timestamp,
        previous_hash: vector.previous_hash.map(BlockHash::from_bytes),
        hash: None,
    }
}

/// Check every vector's canonical bytes; report name, match, and digest hex.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let block = block_from_vector(v);
            let canonical = hex::encode(canonical_block_bytes(&block, true));
            let matches = canonical == v.expected_canonical;
            (v.name.to_string(), matches, block.content_digest().to_hex())
        })
        .collect()
}
