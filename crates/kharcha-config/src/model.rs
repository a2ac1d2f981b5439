// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Kharcha expense tracker.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Kharcha configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; commands that need the owner identity or an API key fail with a
/// config error at the point of use.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KharchaConfig {
    /// Tracker behavior settings.
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Owner identity settings.
    #[serde(default)]
    pub user: UserConfig,

    /// Groq completion API settings.
    #[serde(default)]
    pub groq: GroqConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Tracker behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Owner identity configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Email address that owns every record this instance writes and reads.
    /// Required by the `add`, `list`, and `delete` commands.
    #[serde(default)]
    pub email: Option<String>,
}

/// Groq completion API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GroqConfig {
    /// Groq API key. `None` falls back to the `GROQ_API_KEY` environment
    /// variable; absence of both is fatal when the extractor is built.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier for extraction requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Output-token budget per extraction reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "llama-3.1-70b-versatile".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("kharcha").join("kharcha.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("kharcha.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}
