//! Ownership messages: the short-lived challenge a wallet signs.
//!
//! Wire form is `<address>:<unix seconds>:starRegistry`, exactly three
//! colon-separated fields.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Tag closing every ownership message.
pub const REGISTRY_TAG: &str = "starRegistry";

/// Seconds a message stays valid after issuance.
pub const MESSAGE_WINDOW_SECS: i64 = 5 * 60;

/// A parsed ownership message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipMessage {
    pub address: String,
    pub timestamp: i64,
}

impl OwnershipMessage {
    pub fn new(address: impl Into<String>, timestamp: i64) -> Self {
        Self {
            address: address.into(),
            timestamp,
        }
    }

    /// Parse a message and check it was issued for `address`.
    pub fn parse_for(message: &str, address: &str) -> Result<Self, CoreError> {
        let parsed: Self = message.parse()?;
        if parsed.address != address {
            return Err(CoreError::InvalidIdentity("address mismatch".into()));
        }
        Ok(parsed)
    }

    /// Seconds elapsed between issuance and `now`.
    pub fn elapsed(&self, now: i64) -> i64 {
        now.saturating_sub(self.timestamp)
    }

    /// Expired once strictly more than `window` seconds have passed.
    pub fn is_expired(&self, now: i64, window: i64) -> bool {
        self.elapsed(now) > window
    }
}

impl fmt::Display for OwnershipMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.address, self.timestamp, REGISTRY_TAG)
    }
}

impl FromStr for OwnershipMessage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [address, timestamp, tag] = parts.as_slice() else {
            return Err(CoreError::InvalidIdentity(format!(
                "expected 3 fields, got {}",
                parts.len()
            )));
        };

        let timestamp: i64 = timestamp
            .parse()
            .map_err(|_| CoreError::InvalidIdentity(format!("bad timestamp: {timestamp}")))?;

        if *tag != REGISTRY_TAG {
            return Err(CoreError::InvalidIdentity(format!("bad tag: {tag}")));
        }

        Ok(Self::new(*address, timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let msg = OwnershipMessage::new("mgzVFHzy8myTdLExhdC87Ld9zuLwPnY3d9", 1647104846);
        assert_eq!(
            msg.to_string(),
            "mgzVFHzy8myTdLExhdC87Ld9zuLwPnY3d9:1647104846:starRegistry"
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        let msg = OwnershipMessage::new("addr", 1000);
        assert_eq!(msg.to_string().parse::<OwnershipMessage>().unwrap(), msg);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "invalid:message",
            "addr:1000:starRegistry:extra",
            "addr:abc:starRegistry",
            "addr:10.5:starRegistry",
            "addr:1000:otherRegistry",
            "",
        ] {
            assert!(
                matches!(bad.parse::<OwnershipMessage>(), Err(CoreError::InvalidIdentity(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_for_checks_address() {
        assert!(OwnershipMessage::parse_for("addr:1000:starRegistry", "addr").is_ok());
        assert!(matches!(
            OwnershipMessage::parse_for("addr:1000:starRegistry", "other"),
            Err(CoreError::InvalidIdentity(_))
        ));
    }

    #[test]
    fn test_expiry_boundary() {
        let msg = OwnershipMessage::new("addr", 1000);
        assert!(!msg.is_expired(1000, MESSAGE_WINDOW_SECS));
        assert!(!msg.is_expired(1300, MESSAGE_WINDOW_SECS));
        assert!(msg.is_expired(1301, MESSAGE_WINDOW_SECS));
    }
}
