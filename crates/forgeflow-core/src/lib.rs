//! # Forge Flow Core Library
//!
//! Business logic for the Forge Flow workout log. The CLI is a thin layer
//! over this crate: every user action is a [`Command`] applied to an explicit
//! [`TrackerState`], which is loaded from and saved to a key-value store.
//!
//! ## Architecture
//!
//! - **Time windows**: local-calendar day/week (Sunday)/month boundaries,
//!   snapshot once per command
//! - **Completion ledger**: live completed records merged with archived
//!   timestamps, deduplicated
//! - **Boundary resets**: watermark-guarded pruning that fires once per
//!   calendar transition
//! - **Progress**: bucket counts, goal progress, chart series, streaks
//! - **Storage**: SQLite key-value store and TOML configuration
//!
//! ## Key Components
//!
//! - [`TrackerState`]: persisted state and command dispatch
//! - [`TimeWindow`]: calendar boundaries for one tick
//! - [`CompletionLedger`]: archived completion instants
//! - [`Database`]: SQLite key-value store
//! - [`Config`]: application configuration

pub mod category;
pub mod chart;
pub mod error;
pub mod ledger;
pub mod motivation;
pub mod progress;
pub mod reset;
pub mod state;
pub mod storage;
pub mod streak;
pub mod suggest;
pub mod window;
pub mod workout;

pub use category::{Category, CategoryFilter};
pub use chart::{chart_series, ChartSeries, ChartType, TimeView};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use ledger::{merge, CompletionLedger};
pub use motivation::random_quote;
pub use progress::{count, goal_progress, Goal, GoalPeriod, GoalProgress, ProgressSummary};
pub use reset::{apply_boundary_resets, ResetOutcome, ResetWatermarks};
pub use state::{Command, Outcome, Preferences, Snapshot, TrackerState};
pub use storage::{Config, Database, KeyValueStore, MemoryStore};
pub use streak::{StreakState, StreakTransition};
pub use suggest::{suggest, suggest_random, BodyPart, FitnessLevel, SuggestionProfile, TrainingGoal};
pub use window::{Bucket, TimeWindow};
pub use workout::{TimeUnit, WorkoutDetails, WorkoutRecord};
