//! Configuration loading for the command-line front end.
//!
//! Loads `./mordnilap.toml` (or `$MORDNILAP_CONFIG_PATH`). Environment
//! variables override file values; file values override defaults. Command
//! line flags are applied on top by the binary.
//!
//! The iteration budget and palindrome separator are fixed constants of the
//! library and cannot be configured here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::counting::CountMode;
use crate::fixpoint::Dialect;
use crate::numerals::{NumeralStyle, ZeroStyle};

/// Seed message used when no prefix is configured.
pub const DEFAULT_PREFIX: &str =
    "Dear Gridfuse, I enjoyed our time together. I hope you'll do well. Love ya.";

/// Config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "mordnilap.toml";

// ── Top-level config ────────────────────────────────────────────

/// Top-level configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixpoint search settings (`[search]`).
    pub search: SearchConfig,
    /// Logging settings (`[logging]`).
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// If the file does not exist, defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using a custom env resolver (avoids `set_var` in tests).
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path = Self::config_path_with(&env);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config from file");
                Self::from_toml(&contents)
                    .with_context(|| format!("invalid config file {}", path.display()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file found, using defaults");
                Self::default()
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "failed to read config file {}: {e}",
                    path.display()
                ))
            }
        };
        config.apply_overrides(env);
        Ok(config)
    }

    /// Parse a TOML string into config.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has mistyped values.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str).context("failed to parse config TOML")?;
        Ok(config)
    }

    /// Resolve the config file path: `$MORDNILAP_CONFIG_PATH`, then
    /// `./mordnilap.toml`.
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        env("MORDNILAP_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Apply environment variable overrides (env > config > defaults).
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("MORDNILAP_PREFIX") {
            self.search.prefix = v;
        }
        if let Some(v) = env("MORDNILAP_TIMEOUT_SECS") {
            match v.parse() {
                Ok(secs) => self.search.timeout_secs = Some(secs),
                Err(_) => tracing::warn!(
                    var = "MORDNILAP_TIMEOUT_SECS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("MORDNILAP_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = env("MORDNILAP_LOG_DIR") {
            self.logging.dir = Some(PathBuf::from(v));
        }
    }
}

// ── Search config ───────────────────────────────────────────────

/// Fixpoint search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fixed text every candidate starts with.
    pub prefix: String,
    /// Wall-clock limit; the search is cancelled once it elapses.
    pub timeout_secs: Option<u64>,
    /// Stop as soon as the candidates are known to cycle.
    pub detect_cycles: bool,
    /// Numeral joining style.
    pub numerals: NumeralStyle,
    /// Character counting mode.
    pub counting: CountMode,
}

impl SearchConfig {
    /// Dialect described by this config.
    pub fn dialect(&self) -> Dialect {
        Dialect {
            numerals: self.numerals,
            zero: ZeroStyle::default(),
            counting: self.counting,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            timeout_secs: None,
            detect_cycles: false,
            numerals: NumeralStyle::default(),
            counting: CountMode::default(),
        }
    }
}

// ── Logging config ──────────────────────────────────────────────

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for JSON log files; stderr only when unset.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            dir: None,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
