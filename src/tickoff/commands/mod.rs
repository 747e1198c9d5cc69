//! # Command Layer
//!
//! Each submodule runs one operation against a [`TodoStore`] and reports what
//! happened as a [`CmdResult`]. Nothing here prints; the messages are data for
//! whichever client is calling.
//!
//! A selector that matches nothing is not an error: the command adds a
//! warning message, sets [`CmdResult::not_found`] and leaves the store as it
//! was.
//!
//! [`TodoStore`]: crate::store::TodoStore

use crate::model::Todo;
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod status;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Completed and pending totals at the time a command ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub completed: usize,
    pub pending: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.completed + self.pending
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Todos created, removed or toggled by this command.
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<Todo>,
    pub counts: Option<Counts>,
    pub not_found: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<Todo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_counts(mut self, counts: Counts) -> Self {
        self.counts = Some(counts);
        self
    }

    /// Result for a selector that matched nothing.
    pub fn missing(selector: &crate::selector::TodoSelector) -> Self {
        let mut result = CmdResult {
            not_found: true,
            ..Default::default()
        };
        result.add_message(CmdMessage::warning(format!("Todo not found: {}", selector)));
        result
    }
}
