// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./kharcha.toml` > `~/.config/kharcha/kharcha.toml`
//! > `/etc/kharcha/kharcha.toml` with environment variable overrides via the
//! `KHARCHA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::KharchaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/kharcha/kharcha.toml` (system-wide)
/// 3. `~/.config/kharcha/kharcha.toml` (user XDG config)
/// 4. `./kharcha.toml` (local directory)
/// 5. `KHARCHA_*` environment variables
pub fn load_config() -> Result<KharchaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KharchaConfig::default()))
        .merge(Toml::file("/etc/kharcha/kharcha.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("kharcha/kharcha.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("kharcha.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<KharchaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KharchaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<KharchaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KharchaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `KHARCHA_GROQ_MAX_TOKENS` must map to
/// `groq.max_tokens`, not `groq.max.tokens`.
fn env_provider() -> Env {
    Env::prefixed("KHARCHA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: KHARCHA_STORAGE_DATABASE_PATH -> "storage_database_path"
        let mapped = key
            .as_str()
            .replacen("tracker_", "tracker.", 1)
            .replacen("user_", "user.", 1)
            .replacen("groq_", "groq.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
