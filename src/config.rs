//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub palette: PaletteConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Message feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Feed location: a local JSON file path or an http(s) URL
    #[serde(default = "default_feed_source")]
    pub source: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_feed_source() -> String {
    "data/messages.json".to_string()
}

fn default_request_timeout() -> u64 {
    5000
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source: default_feed_source(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Palette extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    /// Images sampled for card colors, in contribution order
    #[serde(default = "default_palette_images")]
    pub images: Vec<String>,
}

fn default_palette_images() -> Vec<String> {
    vec!["assets/logo.png".to_string(), "assets/favicon.png".to_string()]
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            images: default_palette_images(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mural").join("config.toml")),
            Some(PathBuf::from("/etc/mural/config.toml")),
            Some(PathBuf::from("./mural.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Feed overrides
        if let Ok(source) = std::env::var("MURAL_FEED_SOURCE") {
            self.feed.source = source;
        }

        // API overrides
        if let Ok(host) = std::env::var("MURAL_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("MURAL_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("MURAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MURAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            palette: PaletteConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mural Configuration
#
# Environment variables override these settings:
# - MURAL_FEED_SOURCE
# - MURAL_API_HOST
# - MURAL_API_PORT
# - MURAL_LOG_LEVEL
# - MURAL_LOG_FORMAT

[feed]
# Message feed: a local JSON file or an http(s) URL
source = "data/messages.json"

# HTTP request timeout for remote feeds (ms)
request_timeout_ms = 5000

[palette]
# Images sampled for card colors, in contribution order.
# Missing or undecodable images are skipped; if none yields colors,
# the built-in fallback palette is used.
images = ["assets/logo.png", "assets/favicon.png"]

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty = allow all)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.feed.source, "data/messages.json");
        assert_eq!(config.palette.images.len(), 2);
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[feed]\nsource = \"https://example.com/feed.json\"").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.feed.source, "https://example.com/feed.json");
        assert_eq!(config.feed.request_timeout_ms, 5000);
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [ valid toml").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8090);
        assert_eq!(
            config.palette.images,
            vec!["assets/logo.png", "assets/favicon.png"]
        );
    }
}
