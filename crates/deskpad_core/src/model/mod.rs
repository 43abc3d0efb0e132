//! Domain model for the two DeskPad collections.
//!
//! # Responsibility
//! - Define the canonical task and note records owned by the services.
//! - Define their JSON wire shape (camelCase keys, RFC 3339 timestamps).
//!
//! # Invariants
//! - Every record carries a stable, never-reused id.
//! - `created_at` is immutable after construction.

pub mod note;
pub mod task;
