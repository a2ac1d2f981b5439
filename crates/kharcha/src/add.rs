// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `add` command: extract, preview, and persist one transaction.

use chrono::Local;
use colored::Colorize;
use kharcha_config::KharchaConfig;
use kharcha_core::{DraftTransaction, KharchaError};
use kharcha_extract::{Extractor, GroqClient};
use kharcha_storage::{Database, InsertOutcome, insert_transaction};
use tracing::info;

pub async fn run(config: &KharchaConfig, description: &str) -> Result<(), KharchaError> {
    let user_email = crate::require_email(config)?;
    let client = GroqClient::from_config(&config.groq)?;
    let extractor = Extractor::new(client);

    let today = Local::now().date_naive();
    let draft = extractor.extract(description, today).await?;
    info!(date = %draft.transaction_date, amount = draft.amount, "extraction complete");
    print_draft(&draft);

    let record = draft.into_record(user_email, today);
    let db = Database::open_with(&config.storage.database_path, config.storage.wal_mode).await?;
    let outcome = insert_transaction(&db, &record).await?;
    match outcome {
        InsertOutcome::Saved(id) => {
            println!("{}", format!("Saved transaction #{id}.").green());
        }
        InsertOutcome::Duplicate => {
            println!(
                "{}",
                "An identical transaction is already recorded -- nothing saved.".yellow()
            );
        }
    }
    db.close().await
}

fn print_draft(draft: &DraftTransaction) {
    let dash = "-".to_string();
    println!("{}", "Extracted transaction:".bold());
    println!("  {:<10} {}", "Date", draft.transaction_date);
    println!(
        "  {:<10} {:.2} {}",
        "Amount",
        draft.amount,
        draft.currency.as_ref().unwrap_or(&dash)
    );
    println!("  {:<10} {}", "Category", draft.category);
    println!(
        "  {:<10} {}",
        "Bank",
        draft.bank_name.as_ref().unwrap_or(&dash)
    );
    println!(
        "  {:<10} {}",
        "Account",
        draft.account_type.as_ref().unwrap_or(&dash)
    );
    println!("  {:<10} {}", "Detail", draft.description);
}
