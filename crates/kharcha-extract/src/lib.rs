// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Natural-language transaction extraction pipeline for Kharcha.
//!
//! Turns a free-text spending description into a typed
//! [`DraftTransaction`](kharcha_core::DraftTransaction): a prompt anchored
//! to the caller's reference date is sent through a [`CompletionClient`],
//! and the reply's embedded JSON object is decoded and normalized. One
//! network call per extraction, no retry, no local state.

pub mod client;
pub mod parser;
pub mod prompt;
pub mod types;

use chrono::NaiveDate;
use kharcha_core::{CompletionClient, DraftTransaction, KharchaError};
use tracing::debug;

pub use client::GroqClient;
pub use parser::{decode_reply, extract_json_object};
pub use prompt::build_extraction_prompt;

/// The extraction pipeline, generic over the completion endpoint.
pub struct Extractor<C> {
    client: C,
}

impl<C: CompletionClient> Extractor<C> {
    /// Wrap a completion client in the extraction pipeline.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Extract a structured transaction from a free-text description.
    ///
    /// `reference_date` (normally today) anchors relative phrases like
    /// "yesterday" and "last week", and is the default when the description
    /// mentions no date at all.
    pub async fn extract(
        &self,
        description: &str,
        reference_date: NaiveDate,
    ) -> Result<DraftTransaction, KharchaError> {
        if description.trim().is_empty() {
            return Err(KharchaError::InvalidInput(
                "transaction description must not be empty".into(),
            ));
        }

        let rendered = prompt::build_extraction_prompt(description, reference_date);
        debug!(%reference_date, "sending extraction prompt");
        let reply = self.client.complete(&rendered).await?;
        parser::decode_reply(&reply, reference_date)
    }
}
