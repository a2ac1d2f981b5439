// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The transaction record data model shared between extraction and storage.
//!
//! The extraction pipeline produces a [`DraftTransaction`] (no identity, no
//! audit fields); the caller attaches owner and creation date to obtain a
//! [`TransactionRecord`], which is what the store persists. Surrogate ids
//! are assigned by the store only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Maximum length of the free-text transaction description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Spending category inferred by the extraction step.
///
/// Unknown or missing labels fall back to [`Category::Other`] -- use
/// [`Category::parse_lenient`] at decode boundaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize, Default,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Leisure,
    Education,
    Utilities,
    Groceries,
    Health,
    Transport,
    Entertainment,
    #[default]
    Other,
}

impl Category {
    /// Parse a category label, falling back to `Other` for anything
    /// unrecognized (including the empty string).
    pub fn parse_lenient(label: &str) -> Self {
        label.trim().parse().unwrap_or(Category::Other)
    }
}

/// A structured transaction as produced by the extraction pipeline.
///
/// `transaction_date` and `amount` are always present (defaulted when the
/// description does not mention them); the remaining optional fields are
/// `None` when not mentioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftTransaction {
    pub transaction_date: NaiveDate,
    pub bank_name: Option<String>,
    pub account_type: Option<String>,
    pub amount: f64,
    pub currency: Option<String>,
    pub category: Category,
    pub description: String,
}

impl DraftTransaction {
    /// Attach the owner identity and audit stamp, producing the record shape
    /// the store persists.
    pub fn into_record(self, user_email: String, created_date: NaiveDate) -> TransactionRecord {
        TransactionRecord {
            transaction_date: self.transaction_date,
            bank_name: self.bank_name,
            account_type: self.account_type,
            amount: self.amount,
            currency: self.currency,
            category: self.category,
            description: self.description,
            user_email,
            created_date,
        }
    }
}

/// A caller-enriched transaction, ready for insertion (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_date: NaiveDate,
    pub bank_name: Option<String>,
    pub account_type: Option<String>,
    pub amount: f64,
    pub currency: Option<String>,
    pub category: Category,
    pub description: String,
    pub user_email: String,
    pub created_date: NaiveDate,
}

/// Normalize a currency marker as returned by the completion model.
///
/// Textual rupee markers ("Rs", "Rs.", "Rupees") map to the ISO code "INR";
/// other values are uppercased. Empty or whitespace-only input is `None`.
pub fn normalize_currency(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_ascii_lowercase();
    match lowered.as_str() {
        "rs" | "rs." | "rupee" | "rupees" => Some("INR".to_string()),
        _ => Some(trimmed.to_ascii_uppercase()),
    }
}

/// Trim and truncate a description to [`MAX_DESCRIPTION_LEN`] characters.
///
/// Truncation is character-aware, never splitting a multi-byte sequence.
pub fn truncate_description(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(MAX_DESCRIPTION_LEN) {
        Some((byte_idx, _)) => trimmed[..byte_idx].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
