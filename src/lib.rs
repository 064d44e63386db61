//! To-do List Library
//!
//! This library provides a single-user to-do list with dated reminders.
//! Tasks are kept in insertion order, can be edited, selected and deleted
//! one at a time or in bulk, and the whole list is written to a local
//! key-value store after every change. A periodic tick checks which
//! reminders are due and announces them.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Session Layer**: [`Session`] and `handlers` - Interactive terminal commands
//! - **Domain Layer**: [`TodoStore`], `todo` and `reminder` modules - List state and reminder scanning
//! - **Persistence Layer**: `storage` module - `localStorage`-shaped key-value storage
//!
//! # Example
//!
//! ```
//! use todo_reminder::{MemoryStore, TodoStore};
//!
//! let mut store = TodoStore::load(MemoryStore::new());
//! let item = store.add("Buy milk", "2024-01-01", "09:00").unwrap();
//! assert_eq!(item.reminder, "2024-01-01T09:00");
//! assert_eq!(store.items().len(), 1);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod reminder;
pub mod session;
pub mod storage;
pub mod store;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result, ValidationError};
pub use reminder::{Notifier, RecordingNotifier, Reminder, ReminderChecker, ReminderMode};
pub use session::{InputForm, Outcome, Session, run};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Storage, THEME_KEY, TODO_LIST_KEY};
pub use store::TodoStore;
pub use todo::{Selection, Theme, TodoId, TodoItem, TodoList};
