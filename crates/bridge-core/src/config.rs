//! Configuration types for Bridgefee

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default fee denominator (fee percentages are expressed in 1/100_000)
pub const DEFAULT_FEE_DENOMINATOR: i64 = 100_000;

/// HTTP API listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind host (e.g., "127.0.0.1")
    #[serde(default = "default_api_host")]
    pub host: String,

    /// API server port
    #[serde(default = "default_api_port")]
    pub port: u16,
}

fn default_api_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    19080
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

/// Fee arithmetic settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    /// Denominator for leg fee percentages
    #[serde(default = "default_fee_denominator")]
    pub fee_denominator: i64,
}

fn default_fee_denominator() -> i64 {
    DEFAULT_FEE_DENOMINATOR
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            fee_denominator: default_fee_denominator(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API server settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Fee settings
    #[serde(default)]
    pub fees: FeeConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fees.fee_denominator <= 0 {
            return Err(Error::Config(format!(
                "fees.feeDenominator must be positive, got {}",
                self.fees.fee_denominator
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 19080);
        assert_eq!(config.fees.fee_denominator, 100_000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = AppConfig::from_json(r#"{"api": {"port": 8080}}"#).unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.fees.fee_denominator, DEFAULT_FEE_DENOMINATOR);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let err = AppConfig::from_json(r#"{"fees": {"feeDenominator": 0}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api.port, config.api.port);
        assert_eq!(parsed.fees.fee_denominator, config.fees.fee_denominator);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/bridgefee.json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
