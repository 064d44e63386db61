//! Delete handlers

use crate::reminder::Notifier;
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::todo::TodoId;
use anyhow::Result;
use std::io::Write;

impl<S: KeyValueStore, W: Write, N: Notifier> Session<S, W, N> {
    /// Deletes one item. A missing id is not an error.
    pub(crate) fn handle_delete(&mut self, id: TodoId) -> Result<()> {
        let result = self.store.delete(id);
        if let Some(removed) = self.report(result)? {
            if removed {
                self.say(format!("Deleted #{}", id))?;
            } else {
                self.say(format!("Task {} does not exist.", id))?;
            }
        }
        Ok(())
    }

    /// Deletes every selected item. Refused while nothing is selected.
    pub(crate) fn handle_delete_selected(&mut self) -> Result<()> {
        if self.store.selection().is_empty() {
            self.say("Nothing selected. Use `select <id>` or `select-all` first.")?;
            return Ok(());
        }

        let result = self.store.bulk_delete();
        if let Some(count) = self.report(result)? {
            self.say(format!("Deleted {} task(s)", count))?;
        }
        Ok(())
    }
}
