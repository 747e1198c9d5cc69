//! # API Facade
//!
//! [`TickoffApi`] is the single entry point clients use. It owns the
//! [`TodoStore`], turns raw user input into selectors and dispatches to the
//! command modules. It holds no business logic of its own and never prints.
//!
//! Methods taking raw input words return `Result` because the input may
//! select nothing at all. A selector that is well formed but matches no todo
//! is still `Ok`, with [`CmdResult::not_found`] set. The `*_task` variants
//! always match task text, so a todo named `3` can still be reached.

use crate::commands;
use crate::error::{Result, TickoffError};
use crate::selector::{parse_selector, task_selector, TodoSelector};
use crate::store::TodoStore;

pub use crate::commands::list::ListFilter;
pub use crate::commands::{CmdMessage, CmdResult, Counts, MessageLevel};

pub struct TickoffApi {
    store: TodoStore,
}

impl TickoffApi {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn add(&mut self, task: impl Into<String>) -> CmdResult {
        commands::add::run(&mut self.store, task.into())
    }

    pub fn remove<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selector = require_selector(parse_selector(inputs))?;
        Ok(self.remove_by(&selector))
    }

    pub fn remove_task<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selector = require_selector(task_selector(inputs))?;
        Ok(self.remove_by(&selector))
    }

    pub fn remove_by(&mut self, selector: &TodoSelector) -> CmdResult {
        commands::remove::run(&mut self.store, selector)
    }

    pub fn toggle<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selector = require_selector(parse_selector(inputs))?;
        Ok(self.toggle_by(&selector))
    }

    pub fn toggle_task<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selector = require_selector(task_selector(inputs))?;
        Ok(self.toggle_by(&selector))
    }

    pub fn toggle_by(&mut self, selector: &TodoSelector) -> CmdResult {
        commands::toggle::run(&mut self.store, selector)
    }

    pub fn list(&self, filter: ListFilter) -> CmdResult {
        commands::list::run(&self.store, filter)
    }

    pub fn status(&self) -> CmdResult {
        commands::status::run(&self.store)
    }

    pub fn clear_completed(&mut self) -> CmdResult {
        commands::clear::run(&mut self.store)
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn into_store(self) -> TodoStore {
        self.store
    }
}

impl Default for TickoffApi {
    fn default() -> Self {
        Self::new(TodoStore::new())
    }
}

fn require_selector(selector: Option<TodoSelector>) -> Result<TodoSelector> {
    selector.ok_or_else(|| TickoffError::Api("No todo selected".to_string()))
}
