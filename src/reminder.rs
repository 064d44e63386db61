//! Reminder scanning
//!
//! [`ReminderChecker::scan`] is called once per tick with the current list
//! and the current local time. In [`ReminderMode::Repeat`] an item that is
//! due keeps firing on every tick until it is deleted; nothing ever marks
//! it acknowledged. [`ReminderMode::Once`] remembers what it already
//! announced during this session and stays quiet about it afterwards.

use crate::todo::{TodoId, TodoItem};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, warn};

/// How often a due reminder is announced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMode {
    /// Announce on every tick while due
    #[default]
    Repeat,
    /// Announce once per session
    Once,
}

impl FromStr for ReminderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repeat" => Ok(ReminderMode::Repeat),
            "once" => Ok(ReminderMode::Once),
            _ => Err(format!(
                "Invalid reminder mode '{}'. Valid options are: repeat, once",
                s
            )),
        }
    }
}

/// A due reminder to show to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: TodoId,
    pub value: String,
    pub due_at: NaiveDateTime,
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reminder: {}", self.value)
    }
}

/// Receives due reminders
pub trait Notifier {
    fn notify(&mut self, reminder: &Reminder);
}

/// Prints reminders as alert lines on a writer (stdout for the session)
pub struct WriterNotifier<W> {
    out: W,
}

impl<W: Write> WriterNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Notifier for WriterNotifier<W> {
    fn notify(&mut self, reminder: &Reminder) {
        // Best effort: a closed terminal must not stop the tick loop
        if let Err(e) = writeln!(self.out, "\u{7}{}", reminder).and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to print reminder");
        }
    }
}

/// Collects reminders in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub received: Vec<Reminder>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, reminder: &Reminder) {
        self.received.push(reminder.clone());
    }
}

/// Finds due, incomplete items
#[derive(Debug, Default)]
pub struct ReminderChecker {
    mode: ReminderMode,
    announced: HashSet<TodoId>,
}

impl ReminderChecker {
    pub fn new(mode: ReminderMode) -> Self {
        Self {
            mode,
            announced: HashSet::new(),
        }
    }

    /// Return the reminders to announce at `now`, in list order
    ///
    /// # Arguments
    /// * `items` - Current list contents
    /// * `now` - Current local time
    pub fn scan(&mut self, items: &[TodoItem], now: NaiveDateTime) -> Vec<Reminder> {
        if self.mode == ReminderMode::Once {
            // Forget deleted items
            self.announced
                .retain(|id| items.iter().any(|item| item.id == *id));
        }

        let mut due = Vec::new();
        for item in items {
            if !item.is_due(now) {
                continue;
            }
            if self.mode == ReminderMode::Once && !self.announced.insert(item.id) {
                continue;
            }
            if let Some(due_at) = item.reminder_at() {
                due.push(Reminder {
                    id: item.id,
                    value: item.value.clone(),
                    due_at,
                });
            }
        }

        if !due.is_empty() {
            debug!(count = due.len(), "reminders due");
        }
        due
    }

    /// Scan and hand every due reminder to `notifier`
    ///
    /// # Returns
    /// The number of reminders delivered
    pub fn check(
        &mut self,
        items: &[TodoItem],
        now: NaiveDateTime,
        notifier: &mut dyn Notifier,
    ) -> usize {
        let due = self.scan(items, now);
        for reminder in &due {
            notifier.notify(reminder);
        }
        due.len()
    }
}
