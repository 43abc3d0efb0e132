//! SQLite-backed key-value partition.
//!
//! # Responsibility
//! - Provide the durable, single-device storage partition as one
//!   `kv(key, value)` table.
//! - Bootstrap connections before returning a usable handle.
//!
//! # Invariants
//! - Returned handles always have the `kv` table in place.
//! - One row per collection key; writes replace the whole blob.

use super::{KvBackend, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Durable [`KvBackend`] over a local SQLite file.
pub struct SqliteKv {
    conn: Connection,
}

impl SqliteKv {
    /// Opens (creating if needed) the store at `path`.
    ///
    /// This is the one hard failure in the persistence layer: without a
    /// store handle there is no session to degrade into.
    ///
    /// # Side effects
    /// - Bootstraps the `kv` schema.
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode=file");
        let conn = Connection::open(path)?;
        Self::bootstrap(conn, "file", started_at)
    }

    /// Opens a throwaway in-memory store. Used by tests and demos.
    pub fn open_in_memory() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode=memory");
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn, "memory", started_at)
    }

    fn bootstrap(conn: Connection, mode: &str, started_at: Instant) -> StoreResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        let result = conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        );
        match result {
            Ok(()) => {
                info!(
                    "event=store_open module=store status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode={mode} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }
}

impl KvBackend for SqliteKv {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
