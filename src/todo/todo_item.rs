use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formats accepted for the stored `reminder` string
const REMINDER_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Get the current wall-clock time in the local timezone
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Build the stored reminder timestamp from a date and a time of day
///
/// # Examples
/// ```
/// # use todo_reminder::todo::compose_reminder;
/// assert_eq!(compose_reminder("2024-01-01", "09:00"), "2024-01-01T09:00");
/// ```
pub fn compose_reminder(date: &str, time: &str) -> String {
    format!("{}T{}", date, time)
}

/// Identifier of a to-do item
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .map(TodoId)
            .map_err(|_| format!("Invalid id '{}'. Use the number shown by `list`", s))
    }
}

/// A single task record
///
/// Field names match the persisted `todoList` snapshot:
/// `{id, value, date, reminder, completed}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier within the list
    pub id: TodoId,
    /// Task description
    pub value: String,
    /// Calendar date (format: YYYY-MM-DD)
    pub date: String,
    /// Local reminder timestamp, `date + "T" + time`
    pub reminder: String,
    /// Completion flag; nothing in the store sets it
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, incomplete item
    ///
    /// # Arguments
    /// * `id` - Identifier issued by the owning list
    /// * `value` - Task description
    /// * `date` - Date string
    /// * `time` - Time-of-day string, appended to `date` to form the reminder
    pub fn new(id: TodoId, value: &str, date: &str, time: &str) -> Self {
        Self {
            id,
            value: value.to_string(),
            date: date.to_string(),
            reminder: compose_reminder(date, time),
            completed: false,
        }
    }

    /// Parse the reminder timestamp as a local date-time
    ///
    /// Returns `None` for an empty or unparseable reminder.
    pub fn reminder_at(&self) -> Option<NaiveDateTime> {
        REMINDER_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&self.reminder, fmt).ok())
    }

    /// Whether the reminder should fire at `now`
    ///
    /// An item is due when it is not completed and its reminder is at or
    /// before `now`. Items with an unparseable reminder are never due.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        !self.completed && self.reminder_at().is_some_and(|at| at <= now)
    }
}
