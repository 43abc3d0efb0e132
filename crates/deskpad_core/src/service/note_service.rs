//! Note collection service.
//!
//! # Responsibility
//! - Own the ordered note list and the transient edit draft.
//! - Provide add/edit/pin/search/delete plus the searched-and-sorted view
//!   consumed by the presentation layer.
//!
//! # Invariants
//! - A note whose title and content are both empty after trimming is never
//!   created; an empty title alone falls back to `"Untitled"`.
//! - `updated_at` is refreshed on every committed mutation (edit commit,
//!   pin toggle) and only then.
//! - `visible()` sorts in two stable passes, recency first, pinned
//!   partition second, so pin state always beats recency.

use crate::model::note::{Note, NoteId, UNTITLED};
use crate::store::{load_collection, save_collection, KvBackend, NOTES_KEY};
use log::debug;
use std::cmp::Ordering;

/// Uncommitted edit state for one note. Held only between `start_edit` and
/// the `save_edit`/`cancel_edit` that ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// Collection manager for notes, generic over the injected storage backend.
pub struct NoteService<B: KvBackend> {
    backend: B,
    notes: Vec<Note>,
    draft: Option<NoteDraft>,
}

impl<B: KvBackend> NoteService<B> {
    /// Hydrates the service from whatever the backend holds under the note
    /// key. A missing or damaged blob starts the session empty.
    pub fn load(backend: B) -> Self {
        let notes = load_collection(&backend, NOTES_KEY);
        debug!(
            "event=notes_hydrate module=service status=ok count={}",
            notes.len()
        );
        Self {
            backend,
            notes,
            draft: None,
        }
    }

    /// Prepends a new note.
    ///
    /// No-op when both fields are empty after trimming. An empty title with
    /// non-empty content stores the `"Untitled"` placeholder. Returns the
    /// new note's id when one was created.
    pub fn add(&mut self, title: &str, content: &str) -> Option<NoteId> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() && content.is_empty() {
            return None;
        }
        let effective_title = if title.is_empty() { UNTITLED } else { title };
        let note = Note::new(effective_title, content);
        let id = note.id;
        self.notes.insert(0, note);
        self.persist();
        Some(id)
    }

    /// Stages the matching note's current title and content into the
    /// scratch draft. Unknown id is a no-op.
    pub fn start_edit(&mut self, id: NoteId) {
        if let Some(note) = self.notes.iter().find(|note| note.id == id) {
            self.draft = Some(NoteDraft {
                id,
                title: note.title.clone(),
                content: note.content.clone(),
            });
        }
    }

    /// Commits an edit: replaces title (placeholder when empty) and trimmed
    /// content, refreshes `updated_at`, and clears the draft.
    ///
    /// When the target no longer exists the collection is untouched but the
    /// draft is still discarded; either way the edit session is over.
    pub fn save_edit(&mut self, id: NoteId, title: &str, content: &str) {
        self.draft = None;
        let title = title.trim();
        let content = content.trim();
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            note.title = if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title.to_string()
            };
            note.content = content.to_string();
            note.touch();
            self.persist();
        }
    }

    /// Discards the scratch draft without mutating the collection.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Current scratch draft, if an edit session is open.
    pub fn draft(&self) -> Option<&NoteDraft> {
        self.draft.as_ref()
    }

    /// Removes the matching note. Unknown id is a no-op.
    pub fn delete(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() != before {
            self.persist();
        }
    }

    /// Flips `pinned` and refreshes `updated_at`. Unknown id is a no-op.
    pub fn toggle_pin(&mut self, id: NoteId) {
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            note.pinned = !note.pinned;
            note.touch();
            self.persist();
        }
    }

    /// Full list snapshot in insertion order, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes matching `query`, pinned-first and most recently touched first
    /// within each pin partition.
    ///
    /// Two explicit stable passes keep the precedence auditable: recency is
    /// applied first, then the pinned partition on top of it.
    pub fn visible(&self, query: &str) -> Vec<&Note> {
        let query = query.trim();
        let mut hits: Vec<&Note> = self
            .notes
            .iter()
            .filter(|note| note.matches(query))
            .collect();
        hits.sort_by(|a, b| recency_desc(a, b));
        hits.sort_by(|a, b| pinned_first(a, b));
        hits
    }

    fn persist(&self) {
        save_collection(&self.backend, NOTES_KEY, &self.notes);
    }
}

/// Most recently touched first. Equal instants keep their relative order.
fn recency_desc(a: &Note, b: &Note) -> Ordering {
    b.updated_at.cmp(&a.updated_at)
}

/// Pinned notes before unpinned ones. Stable within each partition.
fn pinned_first(a: &Note, b: &Note) -> Ordering {
    b.pinned.cmp(&a.pinned)
}
