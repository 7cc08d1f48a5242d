//! Configuration for the suggestions service.

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Draw source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Remote endpoint serving the full draw history as a JSON array.
    #[serde(default = "default_results_url")]
    pub results_url: String,
    /// Timeout for the fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Local cache file mirroring the remote payload shape.
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
}

fn default_results_url() -> String {
    "https://loteriascaixa-api.herokuapp.com/api/lotofacil".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_file() -> String {
    "data/draws.json".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            results_url: default_results_url(),
            timeout_secs: default_timeout_secs(),
            cache_file: default_cache_file(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

impl AppConfig {
    /// Load configuration from environment and config file
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Add config file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (LOTO_SERVER_PORT, etc.)
            .add_source(
                config::Environment::with_prefix("LOTO")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.source.timeout_secs, 10);
        assert!(config.source.results_url.ends_with("/lotofacil"));
    }
}
