//! Command handlers for the interactive session
//!
//! This module contains the implementation of every session command.
//! Each group of related commands is in a separate file.

pub mod add;
pub mod delete;
pub mod edit;
pub mod select;
pub mod view;
