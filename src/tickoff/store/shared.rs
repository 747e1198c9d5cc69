use super::TodoStore;
use crate::model::{Todo, TodoId};
use std::sync::{Arc, Mutex, MutexGuard};

/// A [`TodoStore`] behind one mutex.
///
/// Every call takes the lock for its whole duration, snapshot reads included.
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct SharedTodoStore {
    inner: Arc<Mutex<TodoStore>>,
}

impl SharedTodoStore {
    pub fn new(store: TodoStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TodoStore> {
        // Every store edit is a single Vec operation, so a poisoned lock
        // still guards a consistent store.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs `f` with exclusive access, for multi-step edits that must not
    /// interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut TodoStore) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add(&self, task: impl Into<String>) -> Option<Todo> {
        self.lock().add(task)
    }

    pub fn remove_by_id(&self, id: TodoId) -> Option<Todo> {
        self.lock().remove_by_id(id)
    }

    pub fn remove_by_task(&self, task: &str) -> Option<Todo> {
        self.lock().remove_by_task(task)
    }

    pub fn toggle(&self, id: TodoId) -> Option<bool> {
        self.lock().toggle(id)
    }

    pub fn list_all(&self) -> Vec<Todo> {
        self.lock().list_all()
    }

    pub fn count_completed(&self) -> usize {
        self.lock().count_completed()
    }

    pub fn count_pending(&self) -> usize {
        self.lock().count_pending()
    }

    pub fn clear_completed(&self) -> usize {
        self.lock().clear_completed()
    }

    /// Copy of the whole store, counter included.
    pub fn snapshot(&self) -> TodoStore {
        self.lock().clone()
    }
}

impl From<TodoStore> for SharedTodoStore {
    fn from(store: TodoStore) -> Self {
        Self::new(store)
    }
}
