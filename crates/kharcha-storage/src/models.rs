// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row models for the record store.

use serde::{Deserialize, Serialize};

/// A persisted transaction row, including the store-assigned id.
///
/// Dates are ISO 8601 TEXT exactly as stored; nullability mirrors the
/// schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: i64,
    pub transaction_date: String,
    pub bank_name: Option<String>,
    pub account_type: Option<String>,
    pub amount: f64,
    pub currency: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub user_email: String,
    pub created_date: String,
}

/// The non-error result of an insert attempt.
///
/// A duplicate is a normal outcome, distinct from both success and failure:
/// the store was not mutated and no error is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was inserted; carries the store-assigned id.
    Saved(i64),
    /// An identical record already exists (per the dedup tuple).
    Duplicate,
}
