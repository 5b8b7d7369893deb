//! Application configuration types for Innkeep.
//!
//! `AppConfig` represents `config.toml` in the data directory. Every field has
//! a default so a partial (or missing) file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite URL. Defaults to `innkeep.db` inside the data directory.
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default)]
    pub server: ServerConfig,

    /// Load the sample staff roster into an empty database on `serve`.
    #[serde(default)]
    pub seed_sample_data: bool,
}

/// Bind address for the REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
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
