//! Error types for the registry.

use star_registry_core::CoreError;
use thiserror::Error;

/// Errors surfaced by [`Blockchain`](crate::Blockchain) operations.
///
/// None are retried internally and none leave partial state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The chain failed validation, so the append was refused.
    #[error("chain invalid: {0}")]
    ChainCorrupted(String),

    /// Ownership message malformed, issued for another address, or mistagged.
    #[error("invalid identity message: {0}")]
    InvalidIdentity(String),

    #[error("message has expired: {elapsed}s elapsed, window is {window}s")]
    MessageExpired { elapsed: i64, window: i64 },

    #[error("invalid signature")]
    InvalidSignature,

    #[error("can't get genesis block data")]
    GenesisAccess,

    #[error("core error: {0}")]
    Core(CoreError),
}

impl From<CoreError> for RegistryError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::GenesisAccess => RegistryError::GenesisAccess,
            CoreError::InvalidIdentity(msg) => RegistryError::InvalidIdentity(msg),
            CoreError::InvalidSignature | CoreError::InvalidPublicKey => {
                RegistryError::InvalidSignature
            }
            other => RegistryError::Core(other),
        }
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
