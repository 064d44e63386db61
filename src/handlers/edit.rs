//! Edit handlers

use crate::reminder::Notifier;
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::todo::TodoId;
use anyhow::Result;
use std::io::Write;

impl<S: KeyValueStore, W: Write, N: Notifier> Session<S, W, N> {
    /// Edits the item right away, or opens the edit prompt when no text was given.
    pub(crate) fn handle_edit(&mut self, id: TodoId, text: &str) -> Result<()> {
        if self.store.list().get(id).is_none() {
            self.say(format!(
                "Task {} does not exist. Use `list` to see available tasks.",
                id
            ))?;
            return Ok(());
        }

        if text.is_empty() {
            // The next line answers the prompt
            self.pending_edit = Some(id);
            return Ok(());
        }

        self.apply_edit(id, text)
    }

    /// Takes the answer to the edit prompt. A blank answer cancels.
    pub(crate) fn handle_edit_answer(&mut self, id: TodoId, answer: &str) -> Result<()> {
        if answer.trim().is_empty() {
            self.say("Edit cancelled.")?;
            return Ok(());
        }
        self.apply_edit(id, answer)
    }

    fn apply_edit(&mut self, id: TodoId, text: &str) -> Result<()> {
        let result = self.store.edit(id, text);
        match self.report(result)? {
            Some(true) => self.say(format!("Updated #{}", id)),
            // Deleted while the prompt was open, or blank text
            Some(false) => self.say(format!("Task {} was not changed.", id)),
            None => Ok(()),
        }
    }
}
