// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Kharcha expense tracker.

use thiserror::Error;

/// The primary error type used across all Kharcha crates.
///
/// A duplicate record is NOT an error -- see
/// `kharcha_storage::InsertOutcome` for the non-error insert result.
#[derive(Debug, Error)]
pub enum KharchaError {
    /// Configuration errors (invalid TOML, missing required fields, no API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// The completion service is unreachable, rejected the request, or timed
    /// out. Terminal for the extraction attempt -- no retry is performed.
    #[error("completion service error: {message}")]
    Service {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The completion service replied, but no valid JSON object could be
    /// located or decoded. The raw reply is retained for diagnostics.
    #[error("could not parse completion reply: {message}")]
    Parse { message: String, raw_reply: String },

    /// Storage backend errors (database open, query, delete failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Caller contract violations (e.g. an empty transaction description).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_retains_raw_reply() {
        let err = KharchaError::Parse {
            message: "no JSON object in reply".into(),
            raw_reply: "I'm sorry, I cannot help with that.".into(),
        };
        match err {
            KharchaError::Parse { raw_reply, .. } => {
                assert!(raw_reply.contains("sorry"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn display_messages_are_human_readable() {
        let service = KharchaError::Service {
            message: "HTTP request failed".into(),
            source: None,
        };
        assert!(service.to_string().contains("completion service error"));

        let config = KharchaError::Config("missing API key".into());
        assert!(config.to_string().contains("missing API key"));
    }
}
