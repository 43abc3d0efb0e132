//! Task domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is never empty after trimming; the service rejects empty
//!   submissions before a `Task` is ever constructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single actionable item in the tracker.
///
/// Serialized with camelCase keys and RFC 3339 timestamps; equality of two
/// round-tripped tasks is by timestamp instant, not string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Display text, already trimmed by the service.
    pub title: String,
    pub completed: bool,
    /// Immutable creation instant.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task with a generated stable id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Visibility filter for the task list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Returns whether `task` belongs to this filter's slice of the list.
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(format!(
                "unsupported filter `{other}`; expected all|active|completed"
            )),
        }
    }
}
