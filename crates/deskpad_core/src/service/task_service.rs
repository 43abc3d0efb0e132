//! Task collection service.
//!
//! # Responsibility
//! - Own the ordered task list (newest-first by insertion).
//! - Provide add/toggle/edit/delete plus the derived count, progress, and
//!   filter views consumed by the presentation layer.
//!
//! # Invariants
//! - Titles are trimmed before storage and never empty; whitespace-only
//!   submissions are rejected as silent no-ops, for `edit` as well as `add`.
//! - Operations on an unknown id are silent no-ops.
//! - Filtered views preserve insertion order; they never re-sort.

use crate::model::task::{Task, TaskFilter, TaskId};
use crate::store::{load_collection, save_collection, KvBackend, TASKS_KEY};
use log::debug;

/// Aggregate counters derived from the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

/// Collection manager for tasks, generic over the injected storage backend.
pub struct TaskService<B: KvBackend> {
    backend: B,
    tasks: Vec<Task>,
}

impl<B: KvBackend> TaskService<B> {
    /// Hydrates the service from whatever the backend holds under the task
    /// key. A missing or damaged blob starts the session empty.
    pub fn load(backend: B) -> Self {
        let tasks = load_collection(&backend, TASKS_KEY);
        debug!(
            "event=tasks_hydrate module=service status=ok count={}",
            tasks.len()
        );
        Self { backend, tasks }
    }

    /// Prepends a new open task.
    ///
    /// No-op when `title` is empty after trimming. Returns the new task's
    /// id when one was created.
    pub fn add(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title);
        let id = task.id;
        self.tasks.insert(0, task);
        self.persist();
        Some(id)
    }

    /// Flips `completed` on the matching task. Unknown id is a no-op.
    pub fn toggle(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
            self.persist();
        }
    }

    /// Replaces the title of the matching task.
    ///
    /// Enforces the same non-empty-after-trim rule as [`add`](Self::add);
    /// a whitespace-only title leaves the task untouched.
    pub fn edit(&mut self, id: TaskId, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.title = title.to_string();
            self.persist();
        }
    }

    /// Removes the matching task. Unknown id is a no-op.
    pub fn delete(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Full list snapshot, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Derived counters; `all == active + completed` by construction.
    pub fn counts(&self) -> TaskCounts {
        let all = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            all,
            active: all - completed,
            completed,
        }
    }

    /// Completed share of the list as a rounded percentage; `0` when empty.
    pub fn completion_rate(&self) -> u8 {
        let counts = self.counts();
        if counts.all == 0 {
            return 0;
        }
        ((counts.completed as f64 / counts.all as f64) * 100.0).round() as u8
    }

    /// Slice of the list admitted by `filter`, in insertion order.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| filter.admits(task))
            .collect()
    }

    fn persist(&self) {
        save_collection(&self.backend, TASKS_KEY, &self.tasks);
    }
}
