//! Note domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` is immutable; `updated_at` moves forward on every
//!   committed mutation (edit or pin toggle).
//! - `tags` exists in the persisted schema but no in-scope operation
//!   populates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Title stored when a note is submitted without one.
pub const UNTITLED: &str = "Untitled";

/// A freeform note with pin state and search-relevant text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    /// Display title; falls back to [`UNTITLED`] when submitted empty.
    pub title: String,
    /// Freeform body, may be empty.
    pub content: String,
    pub pinned: bool,
    /// Present on the wire for forward compatibility, never populated here.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new unpinned note with a generated stable id.
    ///
    /// The caller decides title fallback and trimming; both timestamps
    /// start at the same instant.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            pinned: false,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at` to now. Called by the service on every
    /// committed mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match against title, content, or any tag.
    ///
    /// An empty query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}
