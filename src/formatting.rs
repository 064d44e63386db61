//! Formatting helper functions for the terminal session
//!
//! This module renders the list, the clock and the prompt as plain text.

use crate::todo::{Selection, TodoItem};
use chrono::NaiveDateTime;

/// Render a checkbox
fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Format a single item line
///
/// # Example output
/// `[ ] 3. Buy milk - 2024-01-01`
pub fn format_item(item: &TodoItem, selected: bool) -> String {
    format!(
        "{} {}. {} - {}",
        checkbox(selected),
        item.id,
        item.value,
        item.date
    )
}

/// Format the whole list with its select-all row
///
/// # Arguments
/// * `items` - Items in display order
/// * `selection` - Currently selected ids
///
/// # Description
/// The select-all row is checked when the selection size equals the item
/// count. A hint for bulk deletion follows the list while anything is
/// selected.
pub fn format_list(items: &[TodoItem], selection: &Selection) -> String {
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!(
        "{} Select All",
        checkbox(selection.len() == items.len())
    ));

    if items.is_empty() {
        lines.push("    No tasks yet.".to_string());
    }
    for item in items {
        lines.push(format!("    {}", format_item(item, selection.contains(item.id))));
    }

    if !selection.is_empty() {
        lines.push(format!(
            "{} selected. Use `delete-selected` to remove them.",
            selection.len()
        ));
    }

    lines.join("\n")
}

/// Format the displayed clock
pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Format the input prompt
pub fn format_prompt(clock: &str) -> String {
    format!("{} todo> ", clock)
}
