//! Gateway configuration.

use serde::{Deserialize, Serialize};

/// Upstream proxy configuration.
///
/// Resolved once at process start and handed to the gateway at
/// construction; there is no override path while the process runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upstream statistics API endpoint.
    #[serde(default)]
    pub upstream_url: String,
    /// Opaque Authorization header value for the upstream API.
    /// Normally sourced from the environment, not the config file.
    #[serde(default)]
    pub auth_token: String,
}

fn default_port() -> u16 {
    5000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            upstream_url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl GatewayConfig {
    /// Check whether an upstream credential is configured.
    pub fn has_credential(&self) -> bool {
        !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.port, 5000);
        assert!(!config.has_credential());
    }

    #[test]
    fn test_partial_deserialization() {
        let config: GatewayConfig =
            serde_json::from_value(serde_json::json!({ "upstream_url": "http://up" })).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.upstream_url, "http://up");
        assert!(!config.has_credential());
    }
}
