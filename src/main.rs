//! To-do Reminder - Main Entry Point
//!
//! This is the main entry point for the interactive to-do session.
//! The actual implementation is in the `todo_reminder` library.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use todo_reminder::reminder::WriterNotifier;
use todo_reminder::{Config, FileStore, ReminderMode, Session, TodoStore};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// To-do list with dated reminders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the data file (overrides the config file)
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Announce each due reminder only once per session
    #[arg(long)]
    remind_once: bool,

    /// Milliseconds between clock refreshes and reminder scans
    #[arg(long)]
    tick_ms: Option<u64>,
}

impl Args {
    /// Resolve the effective configuration; flags win over the file
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(file) = self.file {
            config.data_file = file;
        }
        if self.remind_once {
            config.reminder_mode = ReminderMode::Once;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing() {
    // Logs go to stderr so they never mix with session output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Args::parse().into_config()?;
    info!(data_file = %config.data_file.display(), mode = ?config.reminder_mode, "starting");

    let store = TodoStore::load(FileStore::open(&config.data_file));
    let mut session = Session::new(
        store,
        config.reminder_mode,
        io::stdout(),
        WriterNotifier::new(io::stdout()),
    );
    session.handle_line("list")?;

    let input = BufReader::new(tokio::io::stdin());
    todo_reminder::run(session, input, config.tick_interval()).await?;
    Ok(())
}
