//! List, clock and theme handlers

use crate::formatting;
use crate::reminder::Notifier;
use crate::session::Session;
use crate::storage::KeyValueStore;
use anyhow::Result;
use std::io::Write;

impl<S: KeyValueStore, W: Write, N: Notifier> Session<S, W, N> {
    pub(crate) fn handle_list(&mut self) -> Result<()> {
        let text = formatting::format_list(self.store.items(), self.store.selection());
        self.say(text)
    }

    pub(crate) fn handle_clock(&mut self) -> Result<()> {
        let clock = self.clock.clone();
        self.say(clock)
    }

    pub(crate) fn handle_theme(&mut self) -> Result<()> {
        let result = self.store.toggle_theme();
        if let Some(theme) = self.report(result)? {
            self.say(format!("Theme: {}", theme))?;
        }
        Ok(())
    }
}
