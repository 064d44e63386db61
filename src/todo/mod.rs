//! To-do domain models
//!
//! This module contains the core data structures of the to-do list.
//! It is split into submodules:
//! - `todo_item`: A single task record and its reminder timestamp
//! - `todo_list`: Ordered list container with id generation
//! - `selection`: Ids marked for bulk action
//! - `theme`: Light/dark presentation preference
//! - `serde_impl`: Snapshot serialization, including id normalization on load

mod selection;
mod serde_impl;
mod theme;
mod todo_item;
mod todo_list;

// Re-export all public types
pub use selection::Selection;
pub use theme::Theme;
pub use todo_item::{TodoId, TodoItem, compose_reminder, local_now};
pub use todo_list::TodoList;
