// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `list` command: owner-scoped, date-filtered display of stored
//! transactions.

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use colored::Colorize;
use kharcha_config::KharchaConfig;
use kharcha_core::{DateFilter, KharchaError};
use kharcha_storage::{Database, StoredTransaction, list_transactions};

/// Named date-range presets, mirroring [`DateFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangePreset {
    All,
    Today,
    Yesterday,
    /// The calendar week (Monday-Sunday) before the current one.
    LastWeek,
    /// The 1st of the current month through today.
    ThisMonth,
    /// The full previous calendar month.
    LastMonth,
}

impl From<RangePreset> for DateFilter {
    fn from(preset: RangePreset) -> Self {
        match preset {
            RangePreset::All => DateFilter::All,
            RangePreset::Today => DateFilter::Today,
            RangePreset::Yesterday => DateFilter::Yesterday,
            RangePreset::LastWeek => DateFilter::LastWeek,
            RangePreset::ThisMonth => DateFilter::MonthToDate,
            RangePreset::LastMonth => DateFilter::PreviousMonth,
        }
    }
}

pub async fn run(
    config: &KharchaConfig,
    range: RangePreset,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<(), KharchaError> {
    let user_email = crate::require_email(config)?;
    let filter = resolve_filter(range, from, to)?;

    let db = Database::open_with(&config.storage.database_path, config.storage.wal_mode).await?;
    let today = Local::now().date_naive();
    let mut rows = list_transactions(&db, &user_email, &filter, today).await?;
    db.close().await?;

    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    if rows.is_empty() {
        println!("No transactions found for the selected filter.");
        return Ok(());
    }

    print_table(&rows);
    Ok(())
}

/// An explicit `--from`/`--to` pair overrides the preset; a lone half of
/// the pair is an error.
fn resolve_filter(
    range: RangePreset,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<DateFilter, KharchaError> {
    match (from, to) {
        (Some(from), Some(to)) => {
            if from > to {
                return Err(KharchaError::InvalidInput(format!(
                    "--from {from} is after --to {to}"
                )));
            }
            Ok(DateFilter::Range { from, to })
        }
        (None, None) => Ok(range.into()),
        _ => Err(KharchaError::InvalidInput(
            "--from and --to must be given together".into(),
        )),
    }
}

fn print_table(rows: &[StoredTransaction]) {
    println!(
        "{}",
        format!(
            "{:>5}  {:<10}  {:>10}  {:<4}  {:<13}  {:<16}  {:<16}  {}",
            "ID", "Date", "Amount", "Cur", "Category", "Bank", "Account", "Description"
        )
        .bold()
    );
    for row in rows {
        println!(
            "{:>5}  {:<10}  {:>10.2}  {:<4}  {:<13}  {:<16}  {:<16}  {}",
            row.id,
            row.transaction_date,
            row.amount,
            row.currency.as_deref().unwrap_or("-"),
            row.category,
            row.bank_name.as_deref().unwrap_or("-"),
            row.account_type.as_deref().unwrap_or("-"),
            row.description.as_deref().unwrap_or("-"),
        );
    }
    println!("{}", format!("{} transaction(s)", rows.len()).dimmed());
}
