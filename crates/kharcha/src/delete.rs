// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `delete` command: remove the owner's transactions by id.

use colored::Colorize;
use kharcha_config::KharchaConfig;
use kharcha_core::KharchaError;
use kharcha_storage::{Database, delete_transactions};

pub async fn run(config: &KharchaConfig, ids: &[i64]) -> Result<(), KharchaError> {
    let user_email = crate::require_email(config)?;

    let db = Database::open_with(&config.storage.database_path, config.storage.wal_mode).await?;
    let deleted = delete_transactions(&db, &user_email, ids).await?;
    db.close().await?;

    if deleted == 0 {
        println!("{}", "No matching transactions to delete.".yellow());
    } else {
        println!("{}", format!("Deleted {deleted} transaction(s).").green());
        if deleted < ids.len() {
            println!(
                "{}",
                format!("{} id(s) did not match any of your records.", ids.len() - deleted)
                    .dimmed()
            );
        }
    }
    Ok(())
}
