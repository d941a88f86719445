//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::style::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Development server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Compiled front-end bundle
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("finlit-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
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

    /// First existing config file in the default locations
    pub fn default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("finlit").join("config.toml")),
            Some(PathBuf::from("./finlit.toml")),
        ];

        config_paths.into_iter().flatten().find(|path| path.exists())
    }

    /// Load from `path`, the default locations, or the environment alone
    pub fn resolve(path: Option<&Path>) -> Result<Resolved, ConfigError> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        Self::resolve_with(path, |key| std::env::var(key).ok())
    }

    /// Load `path` (or defaults) and apply overrides from `lookup`
    pub fn resolve_with(
        path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Resolved, ConfigError> {
        let mut config = match &path {
            Some(path) => Self::load(path)?,
            None => Config::default(),
        };
        let ignored = config.apply_overrides_from(lookup);

        Ok(Resolved {
            config,
            source: path,
            ignored,
        })
    }

    /// Apply overrides from any `FINLIT_*` lookup
    ///
    /// Returns a note for every variable that was set but could not be used.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut ignored = Vec::new();

        // Server overrides
        if let Some(host) = lookup("FINLIT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FINLIT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => ignored.push(format!(
                    "Ignoring invalid FINLIT_PORT: {} (using {})",
                    port, self.server.port
                )),
            }
        }
        if let Some(dist_dir) = lookup("FINLIT_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        // Logging overrides
        if let Some(level) = lookup("FINLIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FINLIT_LOG_FORMAT") {
            self.logging.format = format;
        }

        ignored
    }
}

/// Outcome of [`Config::resolve`]
///
/// Logging is configured from the result, so nothing is logged while
/// resolving; callers report `ignored` once a subscriber is installed.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub config: Config,
    /// File that was read, if any
    pub source: Option<PathBuf>,
    /// Environment overrides that were set but unusable
    pub ignored: Vec<String>,
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
    r##"# Financial Literacy Dashboard Configuration
#
# Environment variables override these settings:
# - FINLIT_HOST
# - FINLIT_PORT
# - FINLIT_DIST_DIR
# - FINLIT_LOG_LEVEL
# - FINLIT_LOG_FORMAT

[theme]
# Palette tokens, exposed to the front-end as CSS custom properties
primary = "#0ea5e9"
success = "#22c55e"
warning = "#f59e0b"
error = "#ef4444"
gray = "#6b7280"

[server]
# Development server host
host = "127.0.0.1"

# Development server port
port = 8084

# Compiled front-end bundle (trunk build output)
dist_dir = "finlit-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_round_trips() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("finlit.toml");
        std::fs::write(&path, "[theme]\nprimary = \"#123456\"\n\n[server]\nport = 9000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme.primary, "#123456");
        assert_eq!(config.theme.success, "#22c55e");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("FINLIT_HOST", "0.0.0.0"),
            ("FINLIT_PORT", "9100"),
            ("FINLIT_DIST_DIR", "/srv/finlit"),
            ("FINLIT_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        let ignored = config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert!(ignored.is_empty());
        assert_eq!(config.server.addr(), "0.0.0.0:9100");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/finlit"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_reported() {
        let mut config = Config::default();
        let ignored =
            config.apply_overrides_from(|key| (key == "FINLIT_PORT").then(|| "eighty".to_string()));
        assert_eq!(config.server.port, 8084);
        assert_eq!(ignored, vec!["Ignoring invalid FINLIT_PORT: eighty (using 8084)".to_string()]);
    }

    #[test]
    fn test_resolve_keeps_ignored_overrides() {
        let resolved =
            Config::resolve_with(None, |key| (key == "FINLIT_PORT").then(|| "99999".to_string()))
                .unwrap();
        assert_eq!(resolved.source, None);
        assert_eq!(resolved.config.server.port, 8084);
        assert_eq!(resolved.ignored.len(), 1);
        assert!(resolved.ignored[0].contains("99999"));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n\n[server]\nport = 9000\n").unwrap();

        let resolved = Config::resolve_with(Some(path.clone()), |_| None).unwrap();
        assert_eq!(resolved.source, Some(path.clone()));
        assert_eq!(resolved.config.logging.level, "debug");
        assert_eq!(resolved.config.server.port, 9000);
        assert!(resolved.ignored.is_empty());

        // Environment wins over the file
        let resolved = Config::resolve_with(Some(path.clone()), |key| {
            (key == "FINLIT_LOG_LEVEL").then(|| "trace".to_string())
        })
        .unwrap();
        assert_eq!(resolved.config.logging.level, "trace");
        assert_eq!(resolved.config.server.port, 9000);
    }

    #[test]
    fn test_resolve_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::resolve_with(Some(missing), |_| None),
            Err(ConfigError::Io { .. })
        ));
    }
}
