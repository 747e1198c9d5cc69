//! # Tickoff Architecture
//!
//! Tickoff is a small todo-list library with a command-line client on top. The
//! library knows nothing about terminals; the binary is one client among many.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw strings → TodoSelector)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResult + messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TodoStore: ordered Vec<Todo> + monotonic id counter      │
//! │  - SharedTodoStore: mutex wrapper for multi-threaded use    │
//! │  - FileStore: JSON snapshot on disk for the CLI             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not Found Is Not An Error
//!
//! Looking up a todo that does not exist is an ordinary outcome. The store
//! answers with `None`, the command layer turns that into a warning message
//! and sets [`commands::CmdResult::not_found`]. [`error::TickoffError`] is
//! reserved for I/O and serialization failures of the file-backed client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: `TodoStore` and its wrappers
//! - [`model`]: `Todo` and `TodoId`
//! - [`selector`]: Parsing `3`, `#3` or task text into a [`selector::TodoSelector`]
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod selector;
pub mod store;
