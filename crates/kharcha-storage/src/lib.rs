// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Kharcha expense tracker.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, and typed CRUD
//! operations for transaction records: dedup-guarded insert, owner-scoped
//! filtered retrieval, and atomic bulk delete.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use database::Database;
pub use models::{InsertOutcome, StoredTransaction};
pub use queries::transactions::{delete_transactions, insert_transaction, list_transactions};
