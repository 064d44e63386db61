//! Interactive terminal session
//!
//! A [`Session`] is the terminal counterpart of the to-do page: an input
//! form, a command line, a blocking edit prompt and a clock. [`run`] drives
//! it from one tokio task, interleaving input lines with timer ticks, so
//! every command runs to completion before the next tick is handled.

use crate::commands::{self, Command};
use crate::formatting;
use crate::reminder::{Notifier, ReminderChecker, ReminderMode};
use crate::storage::KeyValueStore;
use crate::store::TodoStore;
use crate::todo::{TodoId, TodoItem, local_now};
use anyhow::Result;
use chrono::NaiveDateTime;
use std::fmt::Display;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

/// What the event loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// The three input fields of the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputForm {
    pub text: String,
    pub date: String,
    pub time: String,
}

impl InputForm {
    /// Add the form's contents to `store`
    ///
    /// The fields are cleared only when the item was added.
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut TodoStore<S>) -> crate::Result<TodoItem> {
        let item = store.add(&self.text, &self.date, &self.time)?;
        *self = InputForm::default();
        Ok(item)
    }
}

/// Interactive session over a [`TodoStore`]
///
/// Holds the add form, the pending edit prompt and the displayed clock,
/// writes command output to `out` and hands due reminders to `notifier`.
/// Commands are implemented in the `handlers` module.
pub struct Session<S, W, N> {
    pub(crate) store: TodoStore<S>,
    pub(crate) checker: ReminderChecker,
    pub(crate) form: InputForm,
    /// Item awaiting an answer to the edit prompt
    pub(crate) pending_edit: Option<TodoId>,
    pub(crate) clock: String,
    pub(crate) out: W,
    pub(crate) notifier: N,
}

impl<S: KeyValueStore, W: Write, N: Notifier> Session<S, W, N> {
    pub fn new(store: TodoStore<S>, mode: ReminderMode, out: W, notifier: N) -> Self {
        Self {
            store,
            checker: ReminderChecker::new(mode),
            form: InputForm::default(),
            pending_edit: None,
            clock: formatting::format_clock(local_now()),
            out,
            notifier,
        }
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn pending_edit(&self) -> Option<TodoId> {
        self.pending_edit
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Text shown before reading the next line
    pub fn prompt(&self) -> String {
        if self.pending_edit.is_some() {
            "Edit the todo: ".to_string()
        } else {
            formatting::format_prompt(&self.clock)
        }
    }

    pub fn print_prompt(&mut self) -> Result<()> {
        let prompt = self.prompt();
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(())
    }

    /// Write one line of output
    pub(crate) fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Turn a store result into user-facing output
    ///
    /// Validation failures become alerts; storage failures are logged and
    /// reported. Either way the operation had no effect.
    pub(crate) fn report<T>(&mut self, result: crate::Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                if let Some(invalid) = e.as_validation() {
                    self.say(invalid)?;
                } else {
                    error!(error = %e, "failed to save");
                    self.say(format!("Failed to save: {}", e))?;
                }
                Ok(None)
            }
        }
    }

    /// Refresh the clock and announce due reminders
    ///
    /// # Returns
    /// The number of reminders announced
    pub fn tick(&mut self, now: NaiveDateTime) -> usize {
        self.clock = formatting::format_clock(now);
        self.checker
            .check(self.store.items(), now, &mut self.notifier)
    }

    /// Handle one line of user input
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        if let Some(id) = self.pending_edit.take() {
            self.handle_edit_answer(id, line)?;
            return Ok(Outcome::Continue);
        }

        let command = match commands::parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Outcome::Continue),
            Err(e) => {
                self.say(e.render().to_string().trim_end())?;
                return Ok(Outcome::Continue);
            }
        };

        match command {
            Command::Task { text, .. } => self.handle_set_text(&text)?,
            Command::Date { date } => self.handle_set_date(date)?,
            Command::Time { time } => self.handle_set_time(time)?,
            Command::Add {
                date, time, text, ..
            } => self.handle_add(date, time, text)?,
            Command::List => self.handle_list()?,
            Command::Edit { id, text, .. } => self.handle_edit(id, &text)?,
            Command::Delete { id } => self.handle_delete(id)?,
            Command::Select { id } => self.handle_select(id)?,
            Command::SelectAll => self.handle_select_all()?,
            Command::ClearSelection => self.handle_clear_selection()?,
            Command::DeleteSelected => self.handle_delete_selected()?,
            Command::Theme => self.handle_theme()?,
            Command::Clock => self.handle_clock()?,
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }
}

/// Whether a finished Ctrl-C wait means the user asked to stop
///
/// A failure to install the signal handler is logged and ignored; the
/// session then only ends on `quit` or end of input.
fn shutdown_requested(result: std::io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C");
            false
        }
    }
}

/// Drive `session` until the input ends, `quit` is entered or Ctrl-C
///
/// # Arguments
/// * `session` - Session to drive
/// * `input` - Line source (stdin for the binary)
/// * `tick_interval` - Period of clock refreshes and reminder scans
///
/// # Returns
/// The session in its final state
pub async fn run<S, W, N, R>(
    mut session: Session<S, W, N>,
    input: R,
    tick_interval: Duration,
) -> Result<Session<S, W, N>>
where
    S: KeyValueStore,
    W: Write,
    N: Notifier,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut watch_signal = true;

    info!(interval_ms = tick_interval.as_millis() as u64, "session started");
    session.print_prompt()?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                session.tick(local_now());
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if session.handle_line(&line)? == Outcome::Quit {
                    break;
                }
                session.print_prompt()?;
            }
            result = &mut shutdown, if watch_signal => {
                if shutdown_requested(result) {
                    break;
                }
                watch_signal = false;
            }
        }
    }

    session.say("")?;
    info!("session closed");
    Ok(session)
}
