// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Kharcha configuration system.

use kharcha_config::diagnostic::{ConfigError, suggest_key};
use kharcha_config::model::KharchaConfig;
use kharcha_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_kharcha_config() {
    let toml = r#"
[tracker]
log_level = "debug"

[user]
email = "user@example.com"

[groq]
api_key = "gsk_test_123"
model = "llama-3.1-70b-versatile"
max_tokens = 1024

[storage]
database_path = "/tmp/kharcha-test.db"
wal_mode = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.tracker.log_level, "debug");
    assert_eq!(config.user.email.as_deref(), Some("user@example.com"));
    assert_eq!(config.groq.api_key.as_deref(), Some("gsk_test_123"));
    assert_eq!(config.groq.model, "llama-3.1-70b-versatile");
    assert_eq!(config.groq.max_tokens, 1024);
    assert_eq!(config.storage.database_path, "/tmp/kharcha-test.db");
    assert!(!config.storage.wal_mode);
}

/// Empty TOML falls back to compiled defaults everywhere.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should deserialize");
    assert_eq!(config.tracker.log_level, "info");
    assert_eq!(config.groq.max_tokens, 2048);
    assert!(config.user.email.is_none());
    assert!(config.groq.api_key.is_none());
}

/// Unknown field in a section produces an error mentioning the bad key.
#[test]
fn unknown_field_is_rejected() {
    let toml = r#"
[user]
emial = "user@example.com"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("emial"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// The high-level entry point turns unknown fields into UnknownKey
/// diagnostics with a typo suggestion.
#[test]
fn unknown_field_produces_suggestion_diagnostic() {
    let toml = r#"
[groq]
max_tokns = 512
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce diagnostics");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "max_tokns" && suggestion.as_deref() == Some("max_tokens")
    )));
}

/// Wrong value types are rejected.
#[test]
fn wrong_type_is_rejected() {
    let toml = r#"
[groq]
max_tokens = "lots"
"#;

    assert!(load_config_from_str(toml).is_err());
}

/// Semantic validation runs after deserialization.
#[test]
fn validation_rejects_bad_email() {
    let toml = r#"
[user]
email = "nobody"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("user.email"))
    ));
}

/// Direct toml deserialization honors deny_unknown_fields at the top level.
#[test]
fn top_level_unknown_section_is_rejected() {
    let toml = r#"
[grok]
api_key = "oops"
"#;

    assert!(toml::from_str::<KharchaConfig>(toml).is_err());
}

/// suggest_key is exposed for reuse and behaves sensibly.
#[test]
fn suggest_key_matches_close_typos_only() {
    let valid = &["database_path", "wal_mode"];
    assert_eq!(
        suggest_key("database_pth", valid),
        Some("database_path".to_string())
    );
    assert_eq!(suggest_key("frobnicate", valid), None);
}
