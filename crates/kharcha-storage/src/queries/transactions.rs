// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transaction CRUD operations.
//!
//! Table and column names are fixed SQL literals; every value travels
//! through a bound parameter.

use chrono::NaiveDate;
use kharcha_core::{DateFilter, KharchaError, TransactionRecord};
use rusqlite::{OptionalExtension, params};
use tracing::debug;

use crate::database::Database;
use crate::models::{InsertOutcome, StoredTransaction};

const SELECT_COLUMNS: &str = "SELECT id, transaction_date, bank_name, account_type, \
     transaction_amount, transaction_currency, transaction_category, transaction_desc, \
     user_email, created_date FROM transactions";

/// Insert a record unless an identical one already exists.
///
/// The dedup tuple is (date, bank, account, amount, currency, category,
/// description) with case-insensitive description comparison and missing
/// values compared as equal through a sentinel. The owner is deliberately
/// not part of the tuple. Check and insert run inside one closure on the
/// single serialized connection, so two concurrent inserts of the same
/// record cannot interleave.
pub async fn insert_transaction(
    db: &Database,
    record: &TransactionRecord,
) -> Result<InsertOutcome, KharchaError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            let date = record.transaction_date.to_string();
            let category = record.category.to_string();

            let existing: Option<i64> = conn
                .query_row(
                    "SELECT id FROM transactions
                     WHERE transaction_date = ?1
                       AND COALESCE(bank_name, 'X') = COALESCE(?2, 'X')
                       AND COALESCE(account_type, 'X') = COALESCE(?3, 'X')
                       AND transaction_amount = ?4
                       AND COALESCE(transaction_currency, 'X') = COALESCE(?5, 'X')
                       AND COALESCE(transaction_category, 'X') = COALESCE(?6, 'X')
                       AND UPPER(COALESCE(transaction_desc, 'X')) = UPPER(COALESCE(?7, 'X'))",
                    params![
                        date,
                        record.bank_name,
                        record.account_type,
                        record.amount,
                        record.currency,
                        category,
                        record.description,
                    ],
                    |row| row.get(0),
                )
                .optional()?;

            if existing.is_some() {
                debug!("identical record already stored, not saving");
                return Ok(InsertOutcome::Duplicate);
            }

            conn.execute(
                "INSERT INTO transactions (
                     transaction_date, bank_name, account_type,
                     transaction_amount, transaction_currency,
                     transaction_category, transaction_desc,
                     user_email, created_date
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    date,
                    record.bank_name,
                    record.account_type,
                    record.amount,
                    record.currency,
                    category,
                    record.description,
                    record.user_email,
                    record.created_date.to_string(),
                ],
            )?;
            Ok(InsertOutcome::Saved(conn.last_insert_rowid()))
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Fetch the owner's transactions matching a date filter, newest first.
///
/// Filter bounds are resolved against the caller-supplied `today` at every
/// call; ties on the date are broken by descending id.
pub async fn list_transactions(
    db: &Database,
    user_email: &str,
    filter: &DateFilter,
    today: NaiveDate,
) -> Result<Vec<StoredTransaction>, KharchaError> {
    let user_email = user_email.to_string();
    let bounds = filter
        .bounds(today)
        .map(|(from, to)| (from.to_string(), to.to_string()));

    db.connection()
        .call(move |conn| {
            let mut transactions = Vec::new();
            match &bounds {
                Some((from, to)) => {
                    let mut stmt = conn.prepare(&format!(
                        "{SELECT_COLUMNS} WHERE user_email = ?1 \
                         AND transaction_date >= ?2 AND transaction_date <= ?3 \
                         ORDER BY transaction_date DESC, id DESC"
                    ))?;
                    let rows =
                        stmt.query_map(params![user_email, from, to], row_to_transaction)?;
                    for row in rows {
                        transactions.push(row?);
                    }
                }
                None => {
                    let mut stmt = conn.prepare(&format!(
                        "{SELECT_COLUMNS} WHERE user_email = ?1 \
                         ORDER BY transaction_date DESC, id DESC"
                    ))?;
                    let rows = stmt.query_map(params![user_email], row_to_transaction)?;
                    for row in rows {
                        transactions.push(row?);
                    }
                }
            }
            Ok(transactions)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete the owner's rows whose ids are in the given set.
///
/// Runs as one statement inside an explicit transaction: either every
/// matching row is removed or none is. Ids that do not exist (or belong to
/// another owner) are ignored. Returns the number of rows deleted.
pub async fn delete_transactions(
    db: &Database,
    user_email: &str,
    ids: &[i64],
) -> Result<usize, KharchaError> {
    if ids.is_empty() {
        return Ok(0);
    }
    let user_email = user_email.to_string();
    let ids = ids.to_vec();

    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let placeholders = vec!["?"; ids.len()].join(", ");
            let sql = format!(
                "DELETE FROM transactions WHERE user_email = ? AND id IN ({placeholders})"
            );

            let mut bound: Vec<&dyn rusqlite::ToSql> = Vec::with_capacity(ids.len() + 1);
            bound.push(&user_email);
            for id in &ids {
                bound.push(id);
            }

            let deleted = tx.execute(&sql, bound.as_slice())?;
            tx.commit()?;
            debug!(requested = ids.len(), deleted, "bulk delete committed");
            Ok(deleted)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

fn row_to_transaction(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredTransaction> {
    Ok(StoredTransaction {
        id: row.get(0)?,
        transaction_date: row.get(1)?,
        bank_name: row.get(2)?,
        account_type: row.get(3)?,
        amount: row.get(4)?,
        currency: row.get(5)?,
        category: row.get(6)?,
        description: row.get(7)?,
        user_email: row.get(8)?,
        created_date: row.get(9)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kharcha_core::Category;
    use tempfile::tempdir;

    const OWNER: &str = "user@example.com";

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_record(transaction_date: NaiveDate, description: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            transaction_date,
            bank_name: Some("Citi".to_string()),
            account_type: Some("Savings Account".to_string()),
            amount,
            currency: Some("INR".to_string()),
            category: Category::Leisure,
            description: description.to_string(),
            user_email: OWNER.to_string(),
            created_date: date(2024, 6, 10),
        }
    }

    #[tokio::test]
    async fn insert_saves_then_reports_duplicate() {
        let (db, _dir) = setup_db().await;
        let record = make_record(date(2024, 6, 10), "A2B restaurant bill", 500.0);

        let first = insert_transaction(&db, &record).await.unwrap();
        assert!(matches!(first, InsertOutcome::Saved(id) if id > 0));

        let second = insert_transaction(&db, &record).await.unwrap();
        assert_eq!(second, InsertOutcome::Duplicate);

        let rows = list_transactions(&db, OWNER, &DateFilter::All, date(2024, 6, 10))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1, "duplicate must not create a second row");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_check_is_case_insensitive_on_description() {
        let (db, _dir) = setup_db().await;
        let record = make_record(date(2024, 6, 10), "Petrol", 800.0);
        insert_transaction(&db, &record).await.unwrap();

        let mut shouting = record.clone();
        shouting.description = "PETROL".to_string();
        let outcome = insert_transaction(&db, &shouting).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Duplicate);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn missing_fields_compare_as_equal() {
        let (db, _dir) = setup_db().await;
        let mut record = make_record(date(2024, 6, 10), "Cash snack", 50.0);
        record.bank_name = None;
        record.account_type = None;
        record.currency = None;

        insert_transaction(&db, &record).await.unwrap();
        let outcome = insert_transaction(&db, &record).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Duplicate);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn different_amount_is_not_a_duplicate() {
        let (db, _dir) = setup_db().await;
        let record = make_record(date(2024, 6, 10), "Groceries run", 1660.0);
        insert_transaction(&db, &record).await.unwrap();

        let mut pricier = record.clone();
        pricier.amount = 1661.0;
        let outcome = insert_transaction(&db, &pricier).await.unwrap();
        assert!(matches!(outcome, InsertOutcome::Saved(_)));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn dedup_tuple_excludes_the_owner() {
        let (db, _dir) = setup_db().await;
        let record = make_record(date(2024, 6, 10), "Shared dinner", 900.0);
        insert_transaction(&db, &record).await.unwrap();

        let mut other_owner = record.clone();
        other_owner.user_email = "someone@example.com".to_string();
        let outcome = insert_transaction(&db, &other_owner).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Duplicate);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_orders_by_date_descending() {
        let (db, _dir) = setup_db().await;
        for (day, desc) in [(8, "first"), (10, "third"), (9, "second")] {
            let record = make_record(date(2024, 6, day), desc, day as f64);
            insert_transaction(&db, &record).await.unwrap();
        }

        let rows = list_transactions(&db, OWNER, &DateFilter::All, date(2024, 6, 10))
            .await
            .unwrap();
        let dates: Vec<&str> = rows.iter().map(|r| r.transaction_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-10", "2024-06-09", "2024-06-08"]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_range_filter_is_inclusive() {
        let (db, _dir) = setup_db().await;
        for day in 5..=12 {
            let record = make_record(date(2024, 6, day), &format!("day {day}"), day as f64);
            insert_transaction(&db, &record).await.unwrap();
        }

        let filter = DateFilter::Range {
            from: date(2024, 6, 7),
            to: date(2024, 6, 10),
        };
        let rows = list_transactions(&db, OWNER, &filter, date(2024, 6, 12))
            .await
            .unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].transaction_date, "2024-06-10");
        assert_eq!(rows[3].transaction_date, "2024-06-07");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_presets_resolve_against_the_given_today() {
        let (db, _dir) = setup_db().await;
        let today = date(2024, 6, 10);
        for day in [9, 10] {
            let record = make_record(date(2024, 6, day), &format!("day {day}"), day as f64);
            insert_transaction(&db, &record).await.unwrap();
        }

        let todays = list_transactions(&db, OWNER, &DateFilter::Today, today)
            .await
            .unwrap();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].transaction_date, "2024-06-10");

        let yesterdays = list_transactions(&db, OWNER, &DateFilter::Yesterday, today)
            .await
            .unwrap();
        assert_eq!(yesterdays.len(), 1);
        assert_eq!(yesterdays[0].transaction_date, "2024-06-09");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_owner() {
        let (db, _dir) = setup_db().await;
        insert_transaction(&db, &make_record(date(2024, 6, 10), "mine", 10.0))
            .await
            .unwrap();

        let rows = list_transactions(&db, "someone@example.com", &DateFilter::All, date(2024, 6, 10))
            .await
            .unwrap();
        assert!(rows.is_empty());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_given_ids() {
        let (db, _dir) = setup_db().await;
        let mut ids = Vec::new();
        for day in 1..=4 {
            let record = make_record(date(2024, 6, day), &format!("day {day}"), day as f64);
            match insert_transaction(&db, &record).await.unwrap() {
                InsertOutcome::Saved(id) => ids.push(id),
                InsertOutcome::Duplicate => panic!("unexpected duplicate"),
            }
        }

        let deleted = delete_transactions(&db, OWNER, &[ids[0], ids[2]]).await.unwrap();
        assert_eq!(deleted, 2);

        let remaining = list_transactions(&db, OWNER, &DateFilter::All, date(2024, 6, 10))
            .await
            .unwrap();
        let remaining_ids: Vec<i64> = remaining.iter().map(|r| r.id).collect();
        assert_eq!(remaining.len(), 2);
        assert!(remaining_ids.contains(&ids[1]));
        assert!(remaining_ids.contains(&ids[3]));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_of_unknown_ids_is_a_noop() {
        let (db, _dir) = setup_db().await;
        let record = make_record(date(2024, 6, 10), "keeper", 1.0);
        insert_transaction(&db, &record).await.unwrap();

        let deleted = delete_transactions(&db, OWNER, &[9999]).await.unwrap();
        assert_eq!(deleted, 0);

        let rows = list_transactions(&db, OWNER, &DateFilter::All, date(2024, 6, 10))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_with_empty_id_set_touches_nothing() {
        let (db, _dir) = setup_db().await;
        let deleted = delete_transactions(&db, OWNER, &[]).await.unwrap();
        assert_eq!(deleted, 0);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_owner() {
        let (db, _dir) = setup_db().await;
        let record = make_record(date(2024, 6, 10), "mine", 10.0);
        let id = match insert_transaction(&db, &record).await.unwrap() {
            InsertOutcome::Saved(id) => id,
            InsertOutcome::Duplicate => panic!("unexpected duplicate"),
        };

        let deleted = delete_transactions(&db, "someone@example.com", &[id])
            .await
            .unwrap();
        assert_eq!(deleted, 0);

        let rows = list_transactions(&db, OWNER, &DateFilter::All, date(2024, 6, 10))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);

        db.close().await.unwrap();
    }
}
