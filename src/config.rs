//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$MAILPEEK_CONFIG` (environment variable)
//! 2. `~/.config/mailpeek/config.toml` (Linux)
//!    `~/Library/Application Support/mailpeek/config.toml` (macOS)
//!    `%APPDATA%\mailpeek\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// IMAP connection settings.
    pub imap: ImapConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is unset: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

/// IMAP connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImapConfig {
    /// Port used when the server argument carries none (993 = IMAP over TLS).
    pub port: u16,
    /// Mailbox opened (read-only) to look for unread messages.
    pub mailbox: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl Default for ImapConfig {
    fn default() -> Self {
        Self {
            port: 993,
            mailbox: "INBOX".to_string(),
        }
    }
}

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    match config_file_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Config::default(),
    }
}

/// Load configuration from a specific file, falling back to defaults on error.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(cfg) => {
                tracing::info!(path = %path.display(), "Loaded config");
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse config, using defaults"
                );
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read config file, using defaults"
            );
            Config::default()
        }
    }
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("MAILPEEK_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|d| d.join("mailpeek").join("config.toml"))
}
