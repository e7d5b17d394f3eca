//! Subcommand handlers.
//!
//! Every handler opens a [`Session`], applies at most one core command and
//! prints the result as JSON.

pub mod chart;
pub mod config;
pub mod goal;
pub mod prefs;
pub mod profile;
pub mod progress;
pub mod streak;
pub mod workout;

use forgeflow_core::{Command, Config, Database, Outcome, TimeWindow, TrackerState};
use serde::Serialize;

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Loaded state plus the store and clock snapshot it belongs to.
pub struct Session {
    pub db: Database,
    pub window: TimeWindow,
    pub state: TrackerState,
}

impl Session {
    /// Open the store, load the state and persist any boundary reset.
    pub fn open(config: &Config) -> CliResult<Self> {
        let db = Database::open(&config.storage)?;
        let window = TimeWindow::local();
        let (state, reset) = TrackerState::load(&db, &window)?;
        if reset.day_reset || reset.week_reset || !reset.pruned.is_empty() {
            tracing::info!(pruned = reset.pruned.len(), "persisting boundary reset");
            state.save(&db)?;
        }
        Ok(Self { db, window, state })
    }

    /// Apply a command and write the state through.
    pub fn apply(&mut self, command: Command) -> CliResult<Outcome> {
        let outcome = self.state.apply(command, &self.window)?;
        self.state.save(&self.db)?;
        Ok(outcome)
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn reset(confirmed: bool, config: &Config) -> CliResult {
    if !confirmed {
        return Err("refusing to reset progress without --yes".into());
    }
    let mut session = Session::open(config)?;
    let outcome = session.apply(Command::ResetProgress)?;
    print_json(&outcome)
}
