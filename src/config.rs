//! Session configuration
//!
//! Read from an optional TOML file; command-line flags override it.
//!
//! ```toml
//! data_file = "todo-reminder.json"
//! tick_interval_ms = 1000
//! reminder_mode = "repeat"   # or "once"
//! ```

use crate::reminder::ReminderMode;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "todo-reminder.json";

/// Default reminder and clock period
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the key-value data file
    pub data_file: PathBuf,
    /// Milliseconds between clock refreshes and reminder scans
    pub tick_interval_ms: u64,
    /// Whether due reminders repeat on every tick
    pub reminder_mode: ReminderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            reminder_mode: ReminderMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be greater than zero");
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
