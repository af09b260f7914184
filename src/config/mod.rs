//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/hype/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::generation::{ApiKeySource, DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::session::Tone;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name
pub const DEFAULT_THEME: &str = "hype";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Generative Language API base URL
    pub api_base: String,

    /// Model used for generateContent
    pub model: String,

    /// API key from the config file (environment variables win)
    pub api_key: Option<String>,

    /// Tone selected when the form opens
    pub default_tone: Tone,

    /// Theme name: "hype" or "auto"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            default_tone: Tone::default(),
            theme: DEFAULT_THEME.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_base: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub default_tone: Option<String>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/hype/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("hype").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Config is optional, a failed write just means defaults next time
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be read or
    /// parsed. A broken config should fail loudly rather than silently fall
    /// back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `hype config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |name| std::env::var(name).ok())
    }

    /// Merge a parsed config file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base = env("HYPE_API_BASE")
            .or(file.api_base)
            .unwrap_or(defaults.api_base);

        let model = env("HYPE_MODEL").or(file.model).unwrap_or(defaults.model);

        let default_tone = match env("HYPE_TONE").or(file.default_tone) {
            Some(name) => name.parse().unwrap_or_else(|e| {
                eprintln!("Warning: {}; using {}", e, defaults.default_tone);
                defaults.default_tone
            }),
            None => defaults.default_tone,
        };

        let theme = env("HYPE_THEME").or(file.theme).unwrap_or(defaults.theme);

        Self {
            api_base,
            model,
            api_key: file.api_key.filter(|k| !k.trim().is_empty()),
            default_tone,
            theme,
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Credential source for the generation client
    pub fn credentials(&self) -> ApiKeySource {
        ApiKeySource::standard(self.api_key.clone())
    }

    /// Short SHA-256 fingerprint of the effective API key, safe to print
    pub fn api_key_fingerprint(&self) -> Option<String> {
        self.credentials().resolve().map(|key| fingerprint(&key))
    }
}

/// First 12 hex chars of the SHA-256 of `secret`
pub fn fingerprint(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    digest
        .iter()
        .take(6)
        .map(|b| format!("{:02x}", b))
        .collect()
}
