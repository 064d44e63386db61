//! Add form handlers

use crate::reminder::Notifier;
use crate::session::Session;
use crate::storage::KeyValueStore;
use anyhow::Result;
use std::io::Write;

impl<S: KeyValueStore, W: Write, N: Notifier> Session<S, W, N> {
    /// Sets the task field of the form.
    pub(crate) fn handle_set_text(&mut self, text: &str) -> Result<()> {
        self.form.text = text.to_string();
        Ok(())
    }

    /// Sets the date field of the form.
    pub(crate) fn handle_set_date(&mut self, date: String) -> Result<()> {
        self.form.date = date;
        Ok(())
    }

    /// Sets the time field of the form.
    pub(crate) fn handle_set_time(&mut self, time: String) -> Result<()> {
        self.form.time = time;
        Ok(())
    }

    /// Submits the form, after copying any fields given on the command line into it.
    pub(crate) fn handle_add(
        &mut self,
        date: Option<String>,
        time: Option<String>,
        text: String,
    ) -> Result<()> {
        if let Some(date) = date {
            self.form.date = date;
        }
        if let Some(time) = time {
            self.form.time = time;
        }
        if !text.is_empty() {
            self.form.text = text;
        }

        let result = self.form.submit(&mut self.store);
        if let Some(item) = self.report(result)? {
            self.say(format!(
                "Added #{}: {} (reminder {})",
                item.id, item.value, item.reminder
            ))?;
        }
        Ok(())
    }
}
