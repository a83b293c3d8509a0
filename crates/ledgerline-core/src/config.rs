//! Configuration module for Ledgerline.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for Ledgerline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub remote: RemoteConfig,
    pub cache: CacheConfig,
    pub connectivity: ConnectivityConfig,
    pub logging: LoggingConfig,
}

/// Remote backend settings (Supabase project).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the project, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
    /// Expense table name.
    pub table: String,
    /// Storage bucket holding receipt images.
    pub bucket: String,
}

/// Local cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
}

/// Connectivity probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// Seconds between reachability probes.
    pub probe_interval: u64,
    /// Seconds before a single probe is considered failed.
    pub probe_timeout: u64,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

// ---------------------------------------------------------------------------
// Loading and defaults
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/ledgerline/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("ledgerline")
            .join("config.yaml")
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            table: "expenses".to_string(),
            bucket: "receipts".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            db_path: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("~/.local/share"))
                .join("ledgerline")
                .join("cache.db"),
        }
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_interval: 15,
            probe_timeout: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"remote.base_url"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- remote ---
        if self.remote.base_url.trim().is_empty() {
            errors.push(ValidationError {
                field: "remote.base_url".into(),
                message: "must not be empty".into(),
            });
        } else if !self.remote.base_url.starts_with("http://")
            && !self.remote.base_url.starts_with("https://")
        {
            errors.push(ValidationError {
                field: "remote.base_url".into(),
                message: format!("must be an http(s) URL, got '{}'", self.remote.base_url),
            });
        }
        if self.remote.api_key.trim().is_empty() {
            errors.push(ValidationError {
                field: "remote.api_key".into(),
                message: "must not be empty".into(),
            });
        }
        if self.remote.table.trim().is_empty() {
            errors.push(ValidationError {
                field: "remote.table".into(),
                message: "must not be empty".into(),
            });
        }
        if self.remote.bucket.trim().is_empty() {
            errors.push(ValidationError {
                field: "remote.bucket".into(),
                message: "must not be empty".into(),
            });
        }

        // --- connectivity ---
        if self.connectivity.probe_interval == 0 {
            errors.push(ValidationError {
                field: "connectivity.probe_interval".into(),
                message: "must be greater than 0".into(),
            });
        }
        if self.connectivity.probe_timeout == 0 {
            errors.push(ValidationError {
                field: "connectivity.probe_timeout".into(),
                message: "must be greater than 0".into(),
            });
        }
        if self.connectivity.probe_timeout > self.connectivity.probe_interval {
            errors.push(ValidationError {
                field: "connectivity.probe_timeout".into(),
                message: format!(
                    "probe_timeout ({}) must not exceed probe_interval ({})",
                    self.connectivity.probe_timeout, self.connectivity.probe_interval
                ),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let cfg = Config::default();
        assert_eq!(cfg.remote.table, "expenses");
        assert_eq!(cfg.remote.bucket, "receipts");
        assert_eq!(cfg.connectivity.probe_interval, 15);
        assert_eq!(cfg.connectivity.probe_timeout, 5);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.cache.db_path.to_string_lossy().contains("ledgerline"));
    }

    #[test]
    fn load_from_yaml_file() {
        let yaml = r#"
remote:
  base_url: https://proj.supabase.co
  api_key: anon-key-123
  table: expenses
  bucket: receipts
cache:
  db_path: /tmp/ledgerline-test.db
connectivity:
  probe_interval: 30
  probe_timeout: 10
logging:
  level: debug
"#;
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(yaml.as_bytes()).unwrap();
        tmp.flush().unwrap();

        let cfg = Config::load(tmp.path()).expect("load config");
        assert_eq!(cfg.remote.base_url, "https://proj.supabase.co");
        assert_eq!(cfg.remote.api_key, "anon-key-123");
        assert_eq!(cfg.cache.db_path, PathBuf::from("/tmp/ledgerline-test.db"));
        assert_eq!(cfg.connectivity.probe_interval, 30);
        assert_eq!(cfg.connectivity.probe_timeout, 10);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn load_or_default_returns_default_on_missing_file() {
        let cfg = Config::load_or_default(Path::new("/nonexistent/config.yaml"));
        assert_eq!(cfg.connectivity.probe_interval, 15);
    }

    #[test]
    fn load_returns_error_on_invalid_yaml() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"not: [valid: yaml: {{{").unwrap();
        tmp.flush().unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }

    #[test]
    fn validate_catches_empty_remote_fields() {
        let cfg = Config::default();
        let errors = cfg.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"remote.base_url"));
        assert!(fields.contains(&"remote.api_key"));
    }

    #[test]
    fn validate_catches_non_http_base_url() {
        let mut cfg = Config::default();
        cfg.remote.base_url = "ftp://nope".to_string();
        cfg.remote.api_key = "k".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "remote.base_url"));
    }

    #[test]
    fn validate_catches_zero_probe_values() {
        let mut cfg = Config::default();
        cfg.connectivity.probe_interval = 0;
        cfg.connectivity.probe_timeout = 0;
        let errors = cfg.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"connectivity.probe_interval"));
        assert!(fields.contains(&"connectivity.probe_timeout"));
    }

    #[test]
    fn validate_catches_timeout_exceeding_interval() {
        let mut cfg = Config::default();
        cfg.connectivity.probe_interval = 5;
        cfg.connectivity.probe_timeout = 10;
        let errors = cfg.validate();
        assert!(errors
            .iter()
            .any(|e| e.field == "connectivity.probe_timeout"
                && e.message.contains("must not exceed")));
    }

    #[test]
    fn validate_catches_invalid_log_level() {
        let mut cfg = Config::default();
        cfg.logging.level = "verbose".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "logging.level"));
    }

    #[test]
    fn validate_accepts_complete_config() {
        let mut cfg = Config::default();
        cfg.remote.base_url = "https://proj.supabase.co".to_string();
        cfg.remote.api_key = "anon".to_string();
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn default_path_ends_with_config_yaml() {
        let p = Config::default_path();
        assert!(p.ends_with("ledgerline/config.yaml"));
    }
}
