// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. Collects all errors rather than failing fast.

use crate::diagnostic::ConfigError;
use crate::model::KharchaConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with every collected validation error.
pub fn validate_config(config: &KharchaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.tracker.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "tracker.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.tracker.log_level
            ),
        });
    }

    if config.groq.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "groq.model must not be empty".to_string(),
        });
    }

    if config.groq.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "groq.max_tokens must be at least 1".to_string(),
        });
    }

    if let Some(email) = &config.user.email
        && !email.contains('@')
    {
        errors.push(ConfigError::Validation {
            message: format!("user.email `{email}` is not a valid email address"),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
