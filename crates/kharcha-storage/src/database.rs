// SPDX-FileCopyrightText: 2026 Kharcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All access is serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes: the
//! check-then-insert duplicate guard relies on this single-writer model.

use std::path::Path;

use kharcha_core::KharchaError;
use tracing::debug;

use crate::migrations;

/// Handle to the SQLite database backing the record store.
///
/// Opening runs all pending migrations; every operation borrows the single
/// serialized connection via [`Database::connection`].
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (creating if needed) the database at `path` with WAL mode.
    pub async fn open(path: &str) -> Result<Self, KharchaError> {
        Self::open_with(path, true).await
    }

    /// Open the database at `path`, optionally enabling WAL mode.
    ///
    /// The parent directory is created if it does not exist. Migrations run
    /// before the handle is returned.
    pub async fn open_with(path: &str, wal_mode: bool) -> Result<Self, KharchaError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| KharchaError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path.to_owned())
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        conn.call(move |conn| {
            if wal_mode {
                conn.execute_batch("PRAGMA journal_mode = WAL;")?;
            }
            conn.execute_batch(
                "PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = 5000;
                 PRAGMA synchronous = NORMAL;",
            )?;
            migrations::run_migrations(conn)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying serialized connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the connection.
    pub async fn close(self) -> Result<(), KharchaError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        self.conn.close().await.map_err(map_tr_err)?;
        debug!("database closed");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the storage error taxonomy.
pub(crate) fn map_tr_err(err: tokio_rusqlite::Error) -> KharchaError {
    KharchaError::Storage {
        source: Box::new(err),
    }
}
