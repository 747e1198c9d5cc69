use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a todo. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl TodoId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single task record.
///
/// The task text is fixed at creation. Completion is flipped only through
/// [`crate::store::TodoStore::toggle`], which is why the fields are private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    task: String,
    #[serde(default)]
    is_completed: bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    pub(crate) fn new(id: TodoId, task: String) -> Self {
        Self {
            id,
            task,
            is_completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flips completion and returns the new state.
    pub(crate) fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}
