//! Block payloads: what a block carries and how it is stored.
//!
//! Payloads are CBOR-encoded once, when the block is built, and kept as
//! opaque bytes. The digest covers those bytes, so decoding is only needed
//! to read a block, never to validate one.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A caller-supplied star description. Opaque to the registry.
pub type Star = serde_json::Value;

/// Sentinel data carried by the genesis block.
pub const GENESIS_DATA: &str = "Genesis Block";

/// The kinds of payload a block can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// The fixed first block. Never handed out to callers.
    Genesis { data: String },

    /// A star bound to the address that proved ownership of it.
    StarRegistration { owner: String, star: Star },
}

impl Payload {
    /// The default genesis payload.
    pub fn genesis() -> Self {
        Payload::Genesis {
            data: GENESIS_DATA.to_string(),
        }
    }

    /// A star registration for `owner`.
    pub fn star_registration(owner: impl Into<String>, star: Star) -> Self {
        Payload::StarRegistration {
            owner: owner.into(),
            star,
        }
    }

    /// Owner address, if this payload registers a star.
    pub fn owner(&self) -> Option<&str> {
        match self {
            Payload::StarRegistration { owner, .. } => Some(owner),
            Payload::Genesis { .. } => None,
        }
    }

    /// Consume the payload, yielding the star if it registers one.
    pub fn into_star(self) -> Option<Star> {
        match self {
            Payload::StarRegistration { star, .. } => Some(star),
            Payload::Genesis { .. } => None,
        }
    }

    /// Encode to CBOR bytes.
    pub fn encode(&self) -> Result<Bytes, CoreError> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).map_err(|e| CoreError::EncodingError(e.to_string()))?;
        Ok(buf.into())
    }

    /// Decode from CBOR bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        ciborium::from_reader(bytes).map_err(|e| CoreError::DecodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_star_payload_roundtrip() {
        let payload = Payload::star_registration(
            "addr",
            json!({
                "dec": "68° 52' 56.9",
                "ra": "16h 29m 1.0s",
                "story": "Testing star",
                "magnitude": -1.46,
                "catalog": [1, 2, 3]
            }),
        );

        let decoded = Payload::decode(&payload.encode().unwrap()).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_genesis_payload() {
        let payload = Payload::genesis();
        assert_eq!(payload.owner(), None);
        assert_eq!(payload.clone().into_star(), None);
        assert_eq!(Payload::decode(&payload.encode().unwrap()).unwrap(), payload);
    }

    #[test]
    fn test_owner_and_star_accessors() {
        let payload = Payload::star_registration("addr", json!("Sirius"));
        assert_eq!(payload.owner(), Some("addr"));
        assert_eq!(payload.into_star(), Some(json!("Sirius")));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = Payload::decode(&[0xff, 0x00, 0x13]);
        assert!(matches!(result, Err(CoreError::DecodingError(_))));
    }
}
