//! Selection handlers

use crate::reminder::Notifier;
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::todo::TodoId;
use anyhow::Result;
use std::io::Write;

impl<S: KeyValueStore, W: Write, N: Notifier> Session<S, W, N> {
    pub(crate) fn handle_select(&mut self, id: TodoId) -> Result<()> {
        if self.store.list().get(id).is_none() {
            return self.say(format!("Task {} does not exist.", id));
        }

        let selected = self.store.toggle_select(id);
        let state = if selected { "Selected" } else { "Unselected" };
        self.say(format!(
            "{} #{} ({} selected)",
            state,
            id,
            self.store.selection().len()
        ))
    }

    pub(crate) fn handle_select_all(&mut self) -> Result<()> {
        self.store.select_all();
        let count = self.store.selection().len();
        self.say(format!("{} selected", count))
    }

    pub(crate) fn handle_clear_selection(&mut self) -> Result<()> {
        self.store.clear_selection();
        self.say("Selection cleared")
    }
}
