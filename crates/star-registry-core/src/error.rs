//! Error types for the Star Registry Core.

use thiserror::Error;

/// Core errors that can occur while building, decoding, or proving blocks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The genesis payload is a sentinel and is never handed out.
    #[error("can't get genesis block data")]
    GenesisAccess,

    #[error("invalid identity message: {0}")]
    InvalidIdentity(String),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}
