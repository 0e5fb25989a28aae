//! Configuration system for vcd-web
//!
//! Reads config from ~/.config/vcd-web/config.toml

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_port: u16,
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            bind: "127.0.0.1".to_string(),
        }
    }
}

/// Viewer configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Page title served with the viewer shell
    pub title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "vcd-web".to_string(),
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub viewer: ViewerConfig,
}

/// Errors from loading an explicit config path
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when the file is missing or malformed.
    pub fn load() -> Self {
        let config_path = Self::default_config_path();
        Self::load_from_path(&config_path).unwrap_or_default()
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vcd-web")
            .join("config.toml")
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Create default config file if it doesn't exist
    pub fn create_default_if_missing() {
        let path = Self::default_config_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let default_config = r#"# vcd-web Configuration

[server]
http_port = 8080
bind = "127.0.0.1"

[viewer]
title = "vcd-web"
"#;
            let _ = std::fs::write(&path, default_config);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.viewer.title, "vcd-web");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
http_port = 9090
bind = "0.0.0.0"

[viewer]
title = "bench traces"
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.server.http_port, 9090);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.viewer.title, "bench traces");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[server]\nhttp_port = 3000\n").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.server.http_port, 3000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.viewer.title, "vcd-web");
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[server\nhttp_port = oops").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
