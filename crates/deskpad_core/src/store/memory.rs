//! In-memory key-value backend.
//!
//! The injectable fake for the [`KvBackend`] seam: tests and embedders run
//! the collection services against it without touching disk. `fail_writes`
//! simulates a full or read-only partition so write-swallowing behavior can
//! be exercised.

use super::{KvBackend, StoreError, StoreResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Volatile [`KvBackend`] holding blobs in a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a raw blob, bypassing the write-failure toggle. Lets tests
    /// stage malformed payloads that `write` would never produce.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// When set, every `write` is rejected with [`StoreError::WriteRejected`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Returns the raw stored blob, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KvBackend for MemoryKv {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::WriteRejected(
                "memory backend poisoned by test".to_string(),
            ));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
