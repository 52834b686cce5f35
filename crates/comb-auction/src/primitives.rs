//! Primitive types for winner selection.

pub use alloy::primitives::{Address, U256};

/// A directed token pair.
///
/// The direction matters: selling token A to buy token B is different from
/// selling token B to buy token A for the purpose of conflict detection
/// between solutions.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[display("{sell} -> {buy}")]
pub struct DirectedTokenPair {
    pub sell: Address,
    pub buy: Address,
}

/// Canonical key for the directed pair `(sell, buy)`.
///
/// Deterministic and injective: identical arguments always map to the same
/// key and swapped arguments map to a distinct one.
pub fn pair_key(sell: Address, buy: Address) -> DirectedTokenPair {
    DirectedTokenPair { sell, buy }
}

/// A unique identifier for a trade.
///
/// This is a 56-byte array consisting of:
/// - 32 bytes: order digest (hash of order parameters)
/// - 20 bytes: owner address
/// - 4 bytes: valid until timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderUid(pub [u8; 56]);

impl serde::Serialize for OrderUid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as hex string with 0x prefix
        let hex_string = format!("0x{}", hex::encode(self.0));
        serializer.serialize_str(&hex_string)
    }
}

impl<'de> serde::Deserialize<'de> for OrderUid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let s = s.strip_prefix("0x").unwrap_or(&s);
        let decoded = hex::decode(s).map_err(serde::de::Error::custom)?;
        let bytes: [u8; 56] = decoded.try_into().map_err(|bytes: Vec<u8>| {
            serde::de::Error::custom(format!("expected 56 bytes, got {}", bytes.len()))
        })?;
        Ok(OrderUid(bytes))
    }
}
