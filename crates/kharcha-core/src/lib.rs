// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Kharcha expense tracker.
//!
//! Provides the shared error taxonomy, the transaction record data model,
//! date-range filters, and the completion-client trait the extraction
//! pipeline is written against. This crate performs no I/O.

pub mod error;
pub mod filter;
pub mod record;
pub mod traits;

// Re-export key items at crate root for ergonomic imports.
pub use error::KharchaError;
pub use filter::DateFilter;
pub use record::{
    Category, DraftTransaction, MAX_DESCRIPTION_LEN, TransactionRecord, normalize_currency,
    truncate_description,
};
pub use traits::CompletionClient;
