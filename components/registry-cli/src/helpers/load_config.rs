use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming the registry endpoint when no config file is
/// given, e.g. `http://registry.internal:7766`.
pub const REGISTRY_ADDR_ENV: &str = "DATAREG_REGISTRY_ADDR";

const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub registry: RegistryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    /// Registry endpoint, scheme included.
    pub addr: String,
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct StorageConfig {
    /// Region override for the object-store SDK. When unset, the SDK's
    /// default provider chain decides.
    pub region: Option<String>,
}

fn default_connection_timeout_ms() -> u64 {
    DEFAULT_CONNECTION_TIMEOUT_MS
}

impl Config {
    /// Load and parse the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Assemble configuration from the environment when no config file is
    /// given. Storage settings fall back to the object-store SDK's own
    /// environment handling.
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var(REGISTRY_ADDR_ENV).with_context(|| {
            format!("{REGISTRY_ADDR_ENV} is not set and no --config file was given")
        })?;

        Ok(Self {
            registry: RegistryConfig {
                addr,
                connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
            },
            storage: StorageConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [registry]
            addr = "http://localhost:7766"
            connection_timeout_ms = 2500

            [storage]
            region = "eu-central-1"
            "#,
        )
        .unwrap();
        assert_eq!(config.registry.addr, "http://localhost:7766");
        assert_eq!(config.registry.connection_timeout_ms, 2500);
        assert_eq!(config.storage.region.as_deref(), Some("eu-central-1"));
    }

    #[test]
    fn test_timeout_and_storage_are_optional() {
        let config: Config = toml::from_str(
            r#"
            [registry]
            addr = "http://localhost:7766"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.registry.connection_timeout_ms,
            DEFAULT_CONNECTION_TIMEOUT_MS
        );
        assert!(config.storage.region.is_none());
    }
}
