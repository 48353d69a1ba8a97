//! Registry configuration.

use star_registry_core::{GENESIS_DATA, MESSAGE_WINDOW_SECS};

/// Configuration for a [`Blockchain`](crate::Blockchain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Seconds an ownership message stays acceptable. Older is expired.
    pub message_window_secs: i64,
    /// Sentinel data sealed into the genesis block.
    pub genesis_data: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            message_window_secs: MESSAGE_WINDOW_SECS,
            genesis_data: GENESIS_DATA.to_string(),
        }
    }
}
