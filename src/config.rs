use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub relay: RelayConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The third-party form relay the contact section submits to. The access
/// key identifies the site to the relay; it is deploy-time configuration,
/// not a per-user secret.
#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    pub base_url: String,
    #[serde(default)]
    pub access_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    #[serde(default = "default_owner_email")]
    pub owner_email: String,
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            owner_email: default_owner_email(),
            location: default_location(),
        }
    }
}

fn default_owner_name() -> String {
    "Jane Developer".to_string()
}

fn default_owner_email() -> String {
    "hello@example.com".to_string()
}

fn default_location() -> String {
    "Kathmandu, Nepal".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PORTFOLIO__RELAY__ACCESS_KEY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("relay.base_url", "https://api.web3forms.com")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Also support legacy environment variables without prefix
        if let Ok(access_key) = env::var("RELAY_ACCESS_KEY") {
            builder = builder.set_override("relay.access_key", access_key)?;
        }
        if let Ok(base_url) = env::var("RELAY_BASE_URL") {
            builder = builder.set_override("relay.base_url", base_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.relay.base_url.is_empty() {
            return Err("Relay base_url must not be empty".to_string());
        }
        if self.relay.access_key.is_empty() {
            return Err(
                "Relay access_key must be set (RELAY_ACCESS_KEY or relay.access_key)".to_string(),
            );
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            relay: RelayConfig {
                base_url: "https://api.web3forms.com".to_string(),
                access_key: "test-access-key".to_string(),
            },
            site: SiteConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_access_key() {
        let mut config = base_config();
        config.relay.access_key = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let mut config = base_config();
        config.relay.base_url = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }
}
