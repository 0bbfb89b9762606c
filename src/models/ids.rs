//! Strongly-typed ID wrapper for issued receipts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "rcp-";

/// Internal identifier of an issued receipt, independent of its receipt number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let display = ReceiptId::new().to_string();
        assert!(display.starts_with("rcp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ReceiptId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: ReceiptId = format!("rcp-{}", uuid_str).parse().unwrap();
        assert_eq!(id, prefixed);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ReceiptId::new(), ReceiptId::new());
    }
}
