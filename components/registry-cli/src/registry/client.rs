//! Connection to the remote data registry.
//!
//! One channel per CLI invocation: construction performs a single connect
//! with the configured timeout and hands back the generated gRPC client
//! plus the version string stamped into every request envelope. There is
//! deliberately no reconnect or backoff here - transport policy belongs to
//! the collaborator SDKs, and a failed connect is a fatal, tier-2 error.

use std::time::Duration;

use anyhow::{Context, Result};
use tonic::transport::{Channel, Endpoint};

use crate::helpers::load_config::RegistryConfig;
use crate::proto::registry::data_registry_client::DataRegistryClient;

/// Handle on the remote registry: the connected client and the protocol
/// version this build reports. The version is pure metadata; it is reported,
/// never negotiated.
#[derive(Debug)]
pub struct Registry {
    pub client: DataRegistryClient<Channel>,
    pub version: String,
}

impl Registry {
    /// Open the HTTP/2 channel to the registry endpoint from configuration.
    pub async fn connect(config: &RegistryConfig) -> Result<Self> {
        let endpoint = Endpoint::from_shared(config.addr.clone())
            .with_context(|| format!("invalid registry address: {}", config.addr))?
            .timeout(Duration::from_millis(config.connection_timeout_ms));

        tracing::debug!(addr = %config.addr, "connecting to data registry");
        let channel = endpoint
            .connect()
            .await
            .with_context(|| format!("failed to connect to data registry at {}", config.addr))?;

        Ok(Self {
            client: DataRegistryClient::new(channel),
            version: client_version(),
        })
    }
}

/// Client protocol version reported in every request.
pub fn client_version() -> String {
    format!("datareg/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_version_carries_crate_version() {
        let version = client_version();
        assert!(version.starts_with("datareg/"));
        assert!(version.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
