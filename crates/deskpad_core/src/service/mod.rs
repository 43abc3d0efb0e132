//! Collection services owning the two persisted lists.
//!
//! # Responsibility
//! - Own the in-memory collections and their mutation entry points.
//! - Compute derived views as pure functions over the current snapshot.
//!
//! # Invariants
//! - Every state-changing operation writes the full collection back to the
//!   injected backend before returning.
//! - Derived views are recomputed on read, never cached, so they cannot
//!   diverge from the source collection.

pub mod note_service;
pub mod task_service;
