//! # Storage Layer
//!
//! [`TodoStore`] is the authoritative, ordered set of todos for a session. It
//! is a plain `Vec<Todo>` plus a counter for the next id, nothing more.
//!
//! ## Ordering
//!
//! Insertion order is the only order. Removing a todo keeps the relative
//! order of the rest, and toggling edits the record where it sits.
//!
//! ## Ids
//!
//! Ids start at 1 and the counter only ever moves forward, so an id is never
//! handed out twice by the same store, even after the todo holding it is
//! removed or cleared. `u64::MAX` is never assigned: once the counter reaches
//! it, `add` returns `None`.
//!
//! A loaded store is checked before use. Id 0, a repeated id, or an id of
//! `u64::MAX` fails deserialization with an [`InvalidStore`] message, and a
//! stale counter is raised past the highest stored id.
//!
//! ## Not Found
//!
//! Lookups that miss return `None` and leave the store untouched. Callers
//! decide how loudly to report it.
//!
//! ## Wrappers
//!
//! - [`shared::SharedTodoStore`]: the store behind a single mutex, for
//!   callers that need to reach it from several threads
//! - [`fs::FileStore`]: loads and saves a store snapshot as JSON

use crate::model::{Todo, TodoId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

pub mod fs;
pub mod shared;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredTodos")]
pub struct TodoStore {
    next_id: u64,
    todos: Vec<Todo>,
}

/// Why a stored list cannot become a [`TodoStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidStore {
    #[error("todo id 0 is not allowed")]
    ZeroId,
    #[error("todo id {0} appears more than once")]
    DuplicateId(TodoId),
    #[error("todo id {0} leaves no ids to assign")]
    IdsExhausted(TodoId),
}

/// On-disk shape of a store, before ids and the counter are checked.
#[derive(Deserialize)]
struct StoredTodos {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    todos: Vec<Todo>,
}

fn first_id() -> u64 {
    1
}

impl TryFrom<StoredTodos> for TodoStore {
    type Error = InvalidStore;

    fn try_from(stored: StoredTodos) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(stored.todos.len());
        let mut past_max = first_id();
        for todo in &stored.todos {
            let id = todo.id();
            if id.get() == 0 {
                return Err(InvalidStore::ZeroId);
            }
            if !seen.insert(id) {
                return Err(InvalidStore::DuplicateId(id));
            }
            let following = id
                .get()
                .checked_add(1)
                .ok_or(InvalidStore::IdsExhausted(id))?;
            past_max = past_max.max(following);
        }
        Ok(Self {
            next_id: stored.next_id.max(past_max),
            todos: stored.todos,
        })
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            next_id: first_id(),
            todos: Vec::new(),
        }
    }

    /// Appends a pending todo with the next id and returns a copy of it.
    ///
    /// Empty or duplicate task text is accepted as is. Returns `None`, leaving
    /// the store untouched, when the counter has no ids left.
    pub fn add(&mut self, task: impl Into<String>) -> Option<Todo> {
        let Some(following) = self.next_id.checked_add(1) else {
            debug!(next_id = self.next_id, "no ids left to assign");
            return None;
        };
        let todo = Todo::new(TodoId(self.next_id), task.into());
        self.next_id = following;
        debug!(id = %todo.id(), task = todo.task(), "added todo");
        self.todos.push(todo.clone());
        Some(todo)
    }

    /// Removes the todo with `id`, returning it.
    pub fn remove_by_id(&mut self, id: TodoId) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.id() == id)?;
        let removed = self.todos.remove(pos);
        debug!(id = %id, "removed todo by id");
        Some(removed)
    }

    /// Removes the first todo whose task text is exactly `task`.
    ///
    /// When several todos share the text only the earliest one goes.
    pub fn remove_by_task(&mut self, task: &str) -> Option<Todo> {
        let pos = self.todos.iter().position(|t| t.task() == task)?;
        let removed = self.todos.remove(pos);
        debug!(id = %removed.id(), task, "removed todo by task");
        Some(removed)
    }

    /// Flips completion of the todo with `id` and returns the new state.
    pub fn toggle(&mut self, id: TodoId) -> Option<bool> {
        let todo = self.todos.iter_mut().find(|t| t.id() == id)?;
        let now_completed = todo.toggle();
        debug!(id = %id, completed = now_completed, "toggled todo");
        Some(now_completed)
    }

    /// Owned copy of every todo in insertion order.
    pub fn list_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn count_completed(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed()).count()
    }

    pub fn count_pending(&self) -> usize {
        self.todos.iter().filter(|t| !t.is_completed()).count()
    }

    /// Drops every completed todo and returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.is_completed());
        let removed = before - self.todos.len();
        debug!(removed, "cleared completed todos");
        removed
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> TodoId {
        TodoId(self.next_id)
    }
}

impl<'a> IntoIterator for &'a TodoStore {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a store with the given tasks added in order.
    pub fn store_with(tasks: &[&str]) -> TodoStore {
        let mut store = TodoStore::new();
        for task in tasks {
            store.add(*task);
        }
        store
    }

    pub fn tasks(store: &TodoStore) -> Vec<String> {
        store.iter().map(|t| t.task().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{store_with, tasks};
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = store_with(&["A", "B", "C"]);
        let ids: Vec<u64> = store.iter().map(|t| t.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = store_with(&["A", "B"]);
        store.remove_by_id(TodoId(2)).unwrap();
        store.remove_by_id(TodoId(1)).unwrap();
        assert!(store.is_empty());

        let c = store.add("C").unwrap();
        assert_eq!(c.id(), TodoId(3));
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut store = store_with(&["A", "B"]);
        store.toggle(TodoId(2));
        assert_eq!(store.clear_completed(), 1);
        assert_eq!(store.add("C").unwrap().id(), TodoId(3));
    }

    #[test]
    fn add_appends_pending_todo() {
        let mut store = store_with(&["first"]);
        let created = store.add("second").unwrap();

        let all = store.list_all();
        let last = all.last().unwrap();
        assert_eq!(last, &created);
        assert_eq!(last.task(), "second");
        assert!(!last.is_completed());
    }

    #[test]
    fn add_accepts_empty_and_duplicate_text() {
        let mut store = TodoStore::new();
        store.add("");
        store.add("same");
        store.add("same");
        assert_eq!(store.len(), 3);
        assert_eq!(tasks(&store), vec!["", "same", "same"]);
    }

    #[test]
    fn remove_by_id_preserves_order() {
        let mut store = store_with(&["A", "B", "C"]);
        let removed = store.remove_by_id(TodoId(2)).unwrap();
        assert_eq!(removed.task(), "B");
        assert_eq!(tasks(&store), vec!["A", "C"]);
    }

    #[test]
    fn remove_missing_id_is_a_no_op() {
        let mut store = store_with(&["A", "B"]);
        let before = store.list_all();
        assert!(store.remove_by_id(TodoId(99)).is_none());
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn remove_by_task_is_exact_and_case_sensitive() {
        let mut store = store_with(&["Walk", "walk"]);
        assert!(store.remove_by_task("WALK").is_none());
        assert!(store.remove_by_task("Wal").is_none());

        let removed = store.remove_by_task("walk").unwrap();
        assert_eq!(removed.id(), TodoId(2));
        assert_eq!(tasks(&store), vec!["Walk"]);
    }

    #[test]
    fn remove_by_task_takes_first_duplicate() {
        let mut store = store_with(&["dup", "other", "dup"]);
        let removed = store.remove_by_task("dup").unwrap();
        assert_eq!(removed.id(), TodoId(1));

        let remaining: Vec<u64> = store.iter().map(|t| t.id().get()).collect();
        assert_eq!(remaining, vec![2, 3]);
    }

    #[test]
    fn toggle_twice_restores_state_and_position() {
        let mut store = store_with(&["A", "B", "C"]);
        let before = store.list_all();

        assert_eq!(store.toggle(TodoId(2)), Some(true));
        assert_eq!(tasks(&store), vec!["A", "B", "C"]);
        assert_eq!(store.toggle(TodoId(2)), Some(false));

        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn toggle_missing_id_is_a_no_op() {
        let mut store = store_with(&["A"]);
        assert_eq!(store.toggle(TodoId(5)), None);
        assert_eq!(store.count_completed(), 0);
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut store = store_with(&["A", "B"]);
        let snapshot = store.list_all();

        store.toggle(TodoId(1));
        store.remove_by_id(TodoId(2));
        store.add("C");

        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot[0].is_completed());
        assert_eq!(snapshot[1].task(), "B");
    }

    #[test]
    fn counts_follow_toggles() {
        let mut store = store_with(&["A", "B", "C"]);
        store.toggle(TodoId(1));
        store.toggle(TodoId(3));
        assert_eq!(store.count_completed(), 2);
        assert_eq!(store.count_pending(), 1);
    }

    #[test]
    fn clear_completed_keeps_pending_in_order() {
        let mut store = store_with(&["A", "B", "C", "D", "E"]);
        store.toggle(TodoId(2));
        store.toggle(TodoId(4));
        let pending_before = store.count_pending();

        assert_eq!(store.clear_completed(), 2);
        assert_eq!(tasks(&store), vec!["A", "C", "E"]);
        assert_eq!(store.count_completed(), 0);
        assert_eq!(store.count_pending(), pending_before);
    }

    #[test]
    fn clear_completed_on_all_pending_removes_nothing() {
        let mut store = store_with(&["A"]);
        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn abc_walkthrough() {
        let mut store = TodoStore::new();
        let ids: Vec<TodoId> = ["A", "B", "C"].iter().map(|t| store.add(*t).unwrap().id()).collect();
        assert_eq!(ids, vec![TodoId(1), TodoId(2), TodoId(3)]);

        assert_eq!(store.toggle(TodoId(2)), Some(true));
        assert_eq!(tasks(&store), vec!["A", "B", "C"]);
        assert!(store.get(TodoId(2)).unwrap().is_completed());

        assert_eq!(store.clear_completed(), 1);
        assert_eq!(tasks(&store), vec!["A", "C"]);
        assert_eq!(store.count_completed(), 0);
        assert_eq!(store.count_pending(), 2);

        assert!(store.remove_by_task("A").is_some());
        assert_eq!(tasks(&store), vec!["C"]);
    }

    #[test]
    fn deserialize_repairs_stale_counter() {
        let json = r#"{
            "next_id": 1,
            "todos": [
                {"id": 4, "task": "x", "is_completed": true, "created_at": "2024-01-01T00:00:00Z"}
            ]
        }"#;
        let mut store: TodoStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.next_id(), TodoId(5));
        assert_eq!(store.add("y").unwrap().id(), TodoId(5));
    }

    #[test]
    fn deserialize_empty_object_is_fresh_store() {
        let store: TodoStore = serde_json::from_str("{}").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), TodoId(1));
    }

    #[test]
    fn deserialize_rejects_zero_id() {
        let json = r#"{"todos": [
            {"id": 0, "task": "a", "created_at": "2024-01-01T00:00:00Z"}
        ]}"#;
        let err = serde_json::from_str::<TodoStore>(json).unwrap_err();
        assert!(err.to_string().contains("todo id 0 is not allowed"));
    }

    #[test]
    fn deserialize_rejects_repeated_ids() {
        let json = r#"{"todos": [
            {"id": 2, "task": "a", "created_at": "2024-01-01T00:00:00Z"},
            {"id": 2, "task": "b", "created_at": "2024-01-01T00:00:00Z"}
        ]}"#;
        let err = serde_json::from_str::<TodoStore>(json).unwrap_err();
        assert!(err.to_string().contains("todo id #2 appears more than once"));
    }

    #[test]
    fn deserialize_rejects_id_with_no_successor() {
        let json = r#"{"next_id": 1, "todos": [
            {"id": 18446744073709551615, "task": "x", "created_at": "2024-01-01T00:00:00Z"}
        ]}"#;
        let err = serde_json::from_str::<TodoStore>(json).unwrap_err();
        assert!(err.to_string().contains("leaves no ids to assign"));
    }

    #[test]
    fn add_on_exhausted_counter_returns_none() {
        let json = r#"{"next_id": 18446744073709551615, "todos": [
            {"id": 3, "task": "x", "created_at": "2024-01-01T00:00:00Z"}
        ]}"#;
        let mut store: TodoStore = serde_json::from_str(json).unwrap();
        let before = store.list_all();

        assert!(store.add("y").is_none());
        assert_eq!(store.list_all(), before);
        assert_eq!(store.next_id(), TodoId(u64::MAX));
    }

    #[test]
    fn last_assignable_id_is_one_below_max() {
        let json = r#"{"next_id": 18446744073709551614}"#;
        let mut store: TodoStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.add("last").unwrap().id(), TodoId(u64::MAX - 1));
        assert!(store.add("one more").is_none());
        assert_eq!(store.len(), 1);
    }
}
