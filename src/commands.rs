//! Command grammar of the interactive session
//!
//! Each input line is split on whitespace and parsed with clap, so `help`
//! and `<command> --help` come for free. Free text (the task of `task`,
//! `add` and `edit`) is then cut from the raw line instead, so it keeps
//! its spacing exactly as typed.

use crate::todo::TodoId;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the task text of the input form
    Task {
        #[arg(value_name = "TEXT", trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
        /// Raw text after the command word
        #[arg(skip)]
        text: String,
    },

    /// Set the date of the input form (YYYY-MM-DD)
    Date { date: String },

    /// Set the reminder time of the input form (HH:MM)
    Time { time: String },

    /// Submit the input form; `add <DATE> <TIME> <TEXT>...` fills it first
    Add {
        date: Option<String>,
        time: Option<String>,
        #[arg(value_name = "TEXT", trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
        /// Raw text after the time; empty keeps the form's text
        #[arg(skip)]
        text: String,
    },

    /// Show all tasks
    #[command(alias = "ls")]
    List,

    /// Change the text of a task; asks for it when omitted
    Edit {
        id: TodoId,
        #[arg(value_name = "TEXT", trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
        /// Raw text after the id; empty opens the prompt
        #[arg(skip)]
        text: String,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: TodoId },

    /// Select or unselect a task for bulk deletion
    Select { id: TodoId },

    /// Select every task, or none if all are selected
    SelectAll,

    /// Unselect every task
    ClearSelection,

    /// Delete every selected task
    DeleteSelected,

    /// Switch between light and dark theme
    Theme,

    /// Show the current time
    Clock,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Return what follows the first `count` words of `line`
///
/// Exactly one whitespace character after the last word is the separator
/// and is dropped; everything after it is returned untouched.
fn rest_after_words(line: &str, count: usize) -> &str {
    let mut rest = line.trim_start();
    for i in 0..count {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = &rest[end..];
        if i + 1 < count {
            rest = rest.trim_start();
        }
    }

    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}

/// Parse one input line
///
/// # Returns
/// `Ok(None)` for a blank line, the parsed command, or a clap error whose
/// rendering is the message to show (this includes help output)
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }

    let mut command = CommandLine::try_parse_from(words)?.command;
    match &mut command {
        Command::Task { text, .. } => {
            *text = rest_after_words(line, 1).to_string();
        }
        Command::Add {
            date, time, text, ..
        } => {
            let leading = 1 + usize::from(date.is_some()) + usize::from(time.is_some());
            *text = rest_after_words(line, leading).to_string();
        }
        Command::Edit { text, .. } => {
            *text = rest_after_words(line, 2).to_string();
        }
        _ => {}
    }
    Ok(Some(command))
}
