//! Core domain logic for DeskPad.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::task::{Task, TaskFilter, TaskId};
pub use service::note_service::{NoteDraft, NoteService};
pub use service::task_service::{TaskCounts, TaskService};
pub use store::sqlite::SqliteKv;
pub use store::{KvBackend, MemoryKv, StoreError, StoreResult, NOTES_KEY, TASKS_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
