//! Local key-value persistence adapter.
//!
//! # Responsibility
//! - Define the backend contract the collection services are injected with.
//! - Translate whole collections to/from their persisted JSON-array form.
//!
//! # Invariants
//! - The persisted unit is always the full collection under one fixed key.
//! - `load_collection` never fails toward the caller: absent, unreadable,
//!   malformed, or non-array payloads all degrade to an empty collection.
//! - `save_collection` never fails toward the caller: the in-memory state
//!   stays authoritative for the session even when the write is lost.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKv;

/// Versioned storage key for the task collection. An incompatible schema
/// change bumps the suffix instead of migrating old data.
pub const TASKS_KEY: &str = "deskpad.tasks.v1";
/// Versioned storage key for the note collection.
pub const NOTES_KEY: &str = "deskpad.notes.v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Backend-level failure for reads and writes of the key-value partition.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// Backend refused the write (quota, poisoned fake, read-only media).
    WriteRejected(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::WriteRejected(reason) => write!(f, "write rejected: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::WriteRejected(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed blob storage contract.
///
/// Modeled as an injected dependency so the collection services can be
/// exercised against [`MemoryKv`] in tests. Implementations use interior
/// mutability where needed; both methods take `&self`.
pub trait KvBackend {
    /// Returns the blob stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

// Lets one backend handle serve both collections, and lets tests keep a
// handle on the backend they injected.
impl<B: KvBackend + ?Sized> KvBackend for &B {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).write(key, value)
    }
}

/// Loads the collection stored under `key`.
///
/// # Contract
/// - Absent key, backend read failure, unparseable JSON, or a payload that
///   is not a JSON array: all yield an empty vec, logged, never an error.
/// - Date-valued fields come back as instants via their serde
///   representation; element contents are otherwise passed through.
pub fn load_collection<T: DeserializeOwned>(backend: &impl KvBackend, key: &str) -> Vec<T> {
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=collection_load module=store status=error key={key} error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => items,
        Err(err) => {
            warn!("event=collection_load module=store status=discarded key={key} error={err}");
            Vec::new()
        }
    }
}

/// Persists the full collection under `key`.
///
/// # Contract
/// - Serialization or write failures are swallowed after logging; the
///   caller's in-memory state remains the source of truth for the session.
pub fn save_collection<T: Serialize>(backend: &impl KvBackend, key: &str, items: &[T]) {
    let payload = match serde_json::to_string(items) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("event=collection_save module=store status=error key={key} error={err}");
            return;
        }
    };

    if let Err(err) = backend.write(key, &payload) {
        warn!("event=collection_save module=store status=lost key={key} error={err}");
    }
}
