// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction prompt construction.
//!
//! Relative-date resolution is delegated to the model: the prompt spells
//! out the concrete dates for "yesterday" (-1d), "last week" (-7d), "last
//! month" (-30d) and "last year" (-365d), all anchored to the caller's
//! reference date.

use chrono::{Days, NaiveDate};

const DATE_FMT: &str = "%Y-%m-%d";

/// Render the extraction instruction for one transaction description.
pub fn build_extraction_prompt(description: &str, reference_date: NaiveDate) -> String {
    let today = reference_date.format(DATE_FMT);
    let yesterday = (reference_date - Days::new(1)).format(DATE_FMT);
    let last_week = (reference_date - Days::new(7)).format(DATE_FMT);
    let last_month = (reference_date - Days::new(30)).format(DATE_FMT);
    let last_year = (reference_date - Days::new(365)).format(DATE_FMT);

    format!(
        r#"Extract the following details from this transaction description: {description}

- Transaction Date: If the description mentions "today", return today's date: {today}.
    If "yesterday", return {yesterday}.
    If "last week", return {last_week}.
    If "last month", return {last_month}.
    If "last year", return {last_year}.
    If no date is mentioned, return today's date: {today}.

- Bank Name: Extract the bank name, or return null if not mentioned.
- Account Type: Extract the type of account (e.g., "Savings Account", "Debit Card", "Forex Card", "Cash",
    "Current Account", "Credit Card"), or return null if not mentioned.
- Transaction Amount: Extract the amount spent, or return 0 if not mentioned.
- Transaction Currency: Extract the currency as an ISO code (e.g., INR), or return null if not mentioned.
    Markers like 'Rs' or 'Rs.' mean Rupees and must be returned as INR.
- Transaction Category: Classify the transaction into one of these categories:
    ["Leisure", "Education", "Utilities", "Groceries", "Health", "Transport", "Entertainment", "Other"],
    based on the description.
- Transaction desc: Extract a short label for the transaction (e.g., "Netflix subscription" or "Petrol")
    from the sentence, at most 50 characters.

Return the details as a JSON object. Return only the JSON object without any additional text,
comments, or explanations. The JSON object must have the following keys:
- Transaction Date
- Bank Name
- Account Type
- Transaction Amount
- Transaction Currency
- Transaction Category
- Transaction desc"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn prompt_embeds_the_description() {
        let prompt = build_extraction_prompt("Spent Rs 800 on Diesel today.", reference());
        assert!(prompt.contains("Spent Rs 800 on Diesel today."));
    }

    #[test]
    fn prompt_anchors_all_relative_offsets() {
        let prompt = build_extraction_prompt("anything", reference());
        assert!(prompt.contains("2024-06-10"), "reference date");
        assert!(prompt.contains("2024-06-09"), "yesterday (-1d)");
        assert!(prompt.contains("2024-06-03"), "last week (-7d)");
        assert!(prompt.contains("2024-05-11"), "last month (-30d)");
        assert!(prompt.contains("2023-06-11"), "last year (-365d)");
    }

    #[test]
    fn prompt_names_every_reply_key() {
        let prompt = build_extraction_prompt("anything", reference());
        for key in [
            "Transaction Date",
            "Bank Name",
            "Account Type",
            "Transaction Amount",
            "Transaction Currency",
            "Transaction Category",
            "Transaction desc",
        ] {
            assert!(prompt.contains(key), "missing key {key}");
        }
    }

    #[test]
    fn prompt_lists_all_categories() {
        let prompt = build_extraction_prompt("anything", reference());
        for cat in [
            "Leisure",
            "Education",
            "Utilities",
            "Groceries",
            "Health",
            "Transport",
            "Entertainment",
            "Other",
        ] {
            assert!(prompt.contains(cat), "missing category {cat}");
        }
    }
}
