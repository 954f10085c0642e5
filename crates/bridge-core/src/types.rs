//! Core type definitions for Bridgefee

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount in base units (wei or the token's smallest unit).
///
/// Signed so negative inputs can be rejected rather than wrapped.
pub type Amount = i128;

/// Asset identifier (EVM address, or one of the native-asset sentinels)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The zero-address sentinel for the chain's native asset
    pub fn native() -> Self {
        Self(constants::NATIVE_ASSET_ZERO.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this identifier denotes the chain's native asset.
    ///
    /// Matches either sentinel, ignoring ASCII case.
    pub fn is_native(&self) -> bool {
        constants::NATIVE_ASSET_SENTINELS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(self.0.trim()))
    }

    /// Blank identifiers are treated the same as a missing one
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Parse a decimal amount string (as returned by routing-quote APIs)
pub fn parse_amount(text: &str) -> Result<Amount, String> {
    text.trim()
        .parse::<Amount>()
        .map_err(|e| format!("Invalid amount '{}': {}", text, e))
}

/// Serde adapter for [`Amount`].
///
/// Accepts JSON integers or decimal strings, always writes decimal strings
/// so 18-decimal values survive JavaScript consumers.
pub mod amount_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_amount, Amount};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Signed(i64),
        Unsigned(u64),
        Text(String),
    }

    impl RawAmount {
        fn into_amount(self) -> Result<Amount, String> {
            match self {
                Self::Signed(v) => Ok(v as Amount),
                Self::Unsigned(v) => Ok(v as Amount),
                Self::Text(s) => parse_amount(&s),
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
        RawAmount::deserialize(deserializer)?
            .into_amount()
            .map_err(de::Error::custom)
    }

    /// Same as the parent module, for `Option<Amount>` fields.
    ///
    /// Pair with `#[serde(default)]` so an absent field reads as `None`.
    pub mod option {
        use serde::{de, Deserialize, Deserializer, Serializer};

        use super::{Amount, RawAmount};

        pub fn serialize<S: Serializer>(
            value: &Option<Amount>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Amount>, D::Error> {
            Option::<RawAmount>::deserialize(deserializer)?
                .map(RawAmount::into_amount)
                .transpose()
                .map_err(de::Error::custom)
        }
    }
}

/// Constants
pub mod constants {
    /// Zero-address sentinel used by most routers for the native asset
    pub const NATIVE_ASSET_ZERO: &str = "0x0000000000000000000000000000000000000000";

    /// EIP-7528 style sentinel used by aggregators for the native asset
    pub const NATIVE_ASSET_EEEE: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

    pub const NATIVE_ASSET_SENTINELS: [&str; 2] = [NATIVE_ASSET_ZERO, NATIVE_ASSET_EEEE];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Wrapper {
        #[serde(with = "amount_serde")]
        value: Amount,
        #[serde(
            default,
            with = "amount_serde::option",
            skip_serializing_if = "Option::is_none"
        )]
        extra: Option<Amount>,
    }

    #[test]
    fn test_native_sentinels() {
        assert!(AssetId::native().is_native());
        assert!(AssetId::new("0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee").is_native());
        assert!(AssetId::new(constants::NATIVE_ASSET_EEEE).is_native());
        assert!(!AssetId::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").is_native());
    }

    #[test]
    fn test_blank_asset() {
        assert!(AssetId::new("  ").is_blank());
        assert!(!AssetId::new("0xUSDC").is_blank());
    }

    #[test]
    fn test_amount_accepts_number_and_string() {
        let parsed: Wrapper = serde_json::from_str(r#"{"value": 1000000}"#).unwrap();
        assert_eq!(parsed.value, 1_000_000);
        assert_eq!(parsed.extra, None);

        // 100 ETH in wei does not fit in i64
        let parsed: Wrapper =
            serde_json::from_str(r#"{"value": "100000000000000000000", "extra": "-1"}"#).unwrap();
        assert_eq!(parsed.value, 100_000_000_000_000_000_000);
        assert_eq!(parsed.extra, Some(-1));
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let json = serde_json::to_string(&Wrapper {
            value: 750,
            extra: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"value":"750"}"#);
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": "12abc"}"#).is_err());
        assert!(parse_amount("1.5").is_err());
    }
}
