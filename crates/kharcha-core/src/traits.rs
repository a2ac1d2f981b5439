// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The completion-client trait seam.
//!
//! The extraction pipeline talks to the hosted completion service only
//! through this trait, so tests can substitute a canned implementation.

use async_trait::async_trait;

use crate::error::KharchaError;

/// A text-completion endpoint: one prompt in, one free-text reply out.
///
/// Implementations are expected to fail with [`KharchaError::Service`] for
/// network, auth, and HTTP-level failures. A single call is a single
/// attempt -- no implementation-level retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a rendered prompt and return the model's raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String, KharchaError>;
}
