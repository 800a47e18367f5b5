//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taowatch_gateway::GatewayConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gateway (proxy) configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl AppConfig {
    /// Load configuration: file if present, then environment overrides.
    ///
    /// The file path resolves from the CLI argument, then the
    /// `TAOWATCH_CONFIG` env var, then `config/default.toml`.
    pub fn load(path_override: Option<&str>) -> AppResult<Self> {
        let config_path = path_override
            .map(str::to_string)
            .or_else(|| std::env::var("TAOWATCH_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Environment wins over the file for the upstream endpoint, the
    /// credential, and the listen port. The credential normally arrives
    /// only this way.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("TAOWATCH_API_URL") {
            self.gateway.upstream_url = url;
        }
        if let Ok(token) = std::env::var("TAOWATCH_API_AUTH") {
            self.gateway.auth_token = token;
        }
        if let Ok(port) = std::env::var("TAOWATCH_PORT") {
            match port.parse() {
                Ok(p) => self.gateway.port = p,
                Err(_) => {
                    tracing::warn!(value = %port, "Ignoring non-numeric TAOWATCH_PORT");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.port, 5000);
        assert!(!config.gateway.has_credential());
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [gateway]
            port = 6000
            upstream_url = "https://stats.example.com/subnets"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.port, 6000);
        assert_eq!(config.gateway.upstream_url, "https://stats.example.com/subnets");
        assert!(!config.gateway.has_credential());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.gateway.port, 5000);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("port"));
        assert!(toml_str.contains("upstream_url"));
    }
}
