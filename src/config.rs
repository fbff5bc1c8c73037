//! # Registry Configuration
//!
//! Explicit configuration passed at construction time. There is no
//! module-level singleton client and no hardcoded contract addresses:
//! whoever wires a ledger-backed naming service supplies the addresses here.

use std::path::PathBuf;
use thiserror::Error;

/// Complete registry configuration.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Naming-service wiring.
    pub naming: NamingConfig,
    /// Persistence wiring.
    pub storage: StorageConfig,
}

impl RegistryConfig {
    /// Validate the configuration before wiring adapters from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.naming.gateway_url.is_empty() {
            return Err(ConfigError::MissingGatewayUrl);
        }
        Ok(())
    }
}

/// Naming-service client configuration.
#[derive(Debug, Clone)]
pub struct NamingConfig {
    /// Registrar contract address on the ledger.
    pub registrar_address: String,
    /// Resolver contract address on the ledger.
    pub resolver_address: String,
    /// Gateway endpoint for ledger round-trips.
    pub gateway_url: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            registrar_address: String::new(),
            resolver_address: String::new(),
            gateway_url: "http://127.0.0.1:8545".to_string(),
        }
    }
}

/// Persistence configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the file-backed store.
    pub data_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data/mailboxes.json"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No gateway endpoint configured for the naming service.
    #[error("naming gateway URL is not set")]
    MissingGatewayUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(RegistryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_gateway_rejected() {
        let mut config = RegistryConfig::default();
        config.naming.gateway_url.clear();
        assert_eq!(config.validate(), Err(ConfigError::MissingGatewayUrl));
    }
}
