// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply parsing: JSON extraction from free text and typed decoding.
//!
//! The model is instructed to reply with a bare JSON object, but replies
//! routinely arrive wrapped in prose or code fences. The scan takes the
//! first `{` through the last `}` (greedy) and decodes that region, then
//! validates the decoded shape into a [`DraftTransaction`] instead of
//! trusting it opaquely.

use chrono::NaiveDate;
use kharcha_core::{
    Category, DraftTransaction, KharchaError, normalize_currency, truncate_description,
};
use serde::{Deserialize, Deserializer};

const DATE_FMT: &str = "%Y-%m-%d";

/// The reply shape the model is asked for, keyed exactly as prompted.
#[derive(Debug, Deserialize)]
struct ParsedReply {
    #[serde(rename = "Transaction Date", default)]
    transaction_date: Option<String>,
    #[serde(rename = "Bank Name", default)]
    bank_name: Option<String>,
    #[serde(rename = "Account Type", default)]
    account_type: Option<String>,
    #[serde(rename = "Transaction Amount", default, deserialize_with = "amount_lenient")]
    amount: f64,
    #[serde(rename = "Transaction Currency", default)]
    currency: Option<String>,
    #[serde(rename = "Transaction Category", default)]
    category: Option<String>,
    #[serde(
        rename = "Transaction desc",
        alias = "Transaction Description",
        default
    )]
    description: Option<String>,
}

/// Accept an amount as a JSON number, a numeric string, or null (0).
fn amount_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("amount out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric amount `{s}`"))),
        other => Err(serde::de::Error::custom(format!(
            "amount must be a number, got {other}"
        ))),
    }
}

/// Locate the first top-level brace-delimited region in a raw reply.
///
/// Greedy match from the first `{` to the last `}`. Fails with
/// [`KharchaError::Parse`] when no such region exists.
pub fn extract_json_object(raw: &str) -> Result<&str, KharchaError> {
    let start = raw.find('{').ok_or_else(|| KharchaError::Parse {
        message: "no JSON object in reply".into(),
        raw_reply: raw.to_string(),
    })?;
    let end = raw
        .rfind('}')
        .filter(|&end| end >= start)
        .ok_or_else(|| KharchaError::Parse {
            message: "no JSON object in reply".into(),
            raw_reply: raw.to_string(),
        })?;
    Ok(&raw[start..=end])
}

/// Decode a raw model reply into a validated [`DraftTransaction`].
///
/// A missing transaction date defaults to `reference_date`; a malformed one
/// is a [`KharchaError::Parse`]. Optional text fields are trimmed, with
/// literal "null"/"none" strings treated as absent.
pub fn decode_reply(raw: &str, reference_date: NaiveDate) -> Result<DraftTransaction, KharchaError> {
    let json = extract_json_object(raw)?;
    let reply: ParsedReply = serde_json::from_str(json).map_err(|e| KharchaError::Parse {
        message: format!("invalid JSON object: {e}"),
        raw_reply: raw.to_string(),
    })?;

    let transaction_date = match clean_text(reply.transaction_date) {
        Some(date) => {
            NaiveDate::parse_from_str(&date, DATE_FMT).map_err(|e| KharchaError::Parse {
                message: format!("malformed transaction date `{date}`: {e}"),
                raw_reply: raw.to_string(),
            })?
        }
        None => reference_date,
    };

    let category = Category::parse_lenient(reply.category.as_deref().unwrap_or_default());
    let description = truncate_description(&reply.description.unwrap_or_default());

    Ok(DraftTransaction {
        transaction_date,
        bank_name: clean_text(reply.bank_name),
        account_type: clean_text(reply.account_type),
        amount: reply.amount,
        currency: clean_text(reply.currency).and_then(|c| normalize_currency(&c)),
        category,
        description,
    })
}

/// Trim an optional text field; empty and literal-null values become `None`.
fn clean_text(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed.eq_ignore_ascii_case("none")
    {
        None
    } else {
        Some(trimmed)
    }
}
