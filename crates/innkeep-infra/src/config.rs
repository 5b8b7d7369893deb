//! Configuration loader for Innkeep.
//!
//! Reads `config.toml` from the data directory (`~/.innkeep/` in production)
//! and deserializes it into [`AppConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use innkeep_types::config::AppConfig;

use crate::sqlite::pool::default_database_url;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `INNKEEP_DATA_DIR` environment variable
/// 2. `~/.innkeep`
/// 3. `./.innkeep`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("INNKEEP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".innkeep");
    }

    PathBuf::from(".innkeep")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// A missing file yields the defaults silently; an unreadable or malformed one
/// logs a warning first.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// The configured database URL, or the default file inside `data_dir`.
pub fn resolve_database_url(config: &AppConfig, data_dir: &Path) -> String {
    config
        .database_url
        .clone()
        .unwrap_or_else(|| default_database_url(data_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.server.port, 8080);
        assert!(!config.seed_sample_data);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
database_url = "sqlite::memory:"
seed_sample_data = true

[server]
host = "0.0.0.0"
port = 3000
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(config.seed_sample_data);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "port = [unclosed")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.server.port, 8080);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn resolve_database_url_prefers_config() {
        let config = AppConfig {
            database_url: Some("sqlite:///srv/hotel.db".to_string()),
            ..AppConfig::default()
        };
        let url = resolve_database_url(&config, Path::new("/ignored"));
        assert_eq!(url, "sqlite:///srv/hotel.db");
    }

    #[test]
    fn resolve_database_url_falls_back_to_data_dir() {
        let url = resolve_database_url(&AppConfig::default(), Path::new("/data"));
        assert_eq!(url, "sqlite:///data/innkeep.db?mode=rwc");
    }
}
