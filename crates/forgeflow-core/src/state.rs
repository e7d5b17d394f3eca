//! Tracker state: load/save boundary and command dispatch.
//!
//! Everything the tracker knows lives in one [`TrackerState`]. It is read
//! from a [`KeyValueStore`] once, boundary resets run, a [`Command`] is
//! applied, and the whole state is written back.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::{Category, CategoryFilter};
use crate::chart::{chart_series, ChartSeries, ChartType, TimeView};
use crate::error::{Result, ValidationError};
use crate::ledger::CompletionLedger;
use crate::progress::{goal_progress, Goal, GoalProgress, ProgressSummary};
use crate::reset::{apply_boundary_resets, ResetOutcome, ResetWatermarks};
use crate::storage::KeyValueStore;
use crate::streak::{StreakState, StreakTransition};
use crate::suggest::SuggestionProfile;
use crate::window::TimeWindow;
use crate::workout::WorkoutRecord;

/// Persisted key names.
pub mod keys {
    pub const WORKOUTS: &str = "workouts";
    pub const COMPLETED_WORKOUTS: &str = "completedWorkouts";
    pub const LAST_RESET_DAY: &str = "lastResetDay";
    pub const LAST_RESET_WEEK: &str = "lastResetWeek";
    pub const WORKOUT_GOAL: &str = "workoutGoal";
    pub const LAST_WORKOUT_DATE: &str = "lastWorkoutDate";
    pub const CURRENT_STREAK: &str = "currentStreak";
    pub const CHART_TYPE: &str = "chartType";
    pub const TIME_VIEW: &str = "timeView";
    pub const FILTER_TYPE: &str = "filterType";
    pub const USER_GOAL: &str = "userGoal";
}

/// Display preferences owned by the renderer but persisted with the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub chart_type: ChartType,
    pub time_view: TimeView,
    pub filter: CategoryFilter,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub workouts: Vec<WorkoutRecord>,
    pub ledger: CompletionLedger,
    pub watermarks: ResetWatermarks,
    pub goal: Goal,
    pub streak: StreakState,
    pub preferences: Preferences,
    pub profile: SuggestionProfile,
}

/// A user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddWorkout { text: String },
    EditWorkout { index: usize, text: String },
    SetCompleted { index: usize, completed: bool },
    DeleteWorkout { index: usize },
    /// Remove every live record, archiving the completed ones.
    ClearWorkouts,
    SetGoal(Goal),
    /// Wipe records, archive, watermarks, streak and goal. Preferences and
    /// the suggestion profile survive.
    ResetProgress,
    SetPreferences {
        chart_type: Option<ChartType>,
        time_view: Option<TimeView>,
        filter: Option<CategoryFilter>,
    },
    SaveProfile(SuggestionProfile),
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Added {
        index: usize,
        record: WorkoutRecord,
    },
    Edited {
        index: usize,
        record: WorkoutRecord,
    },
    CompletionChanged {
        index: usize,
        completed: bool,
        changed: bool,
        streak: Option<StreakTransition>,
    },
    Deleted {
        record: WorkoutRecord,
        unarchived: bool,
    },
    Cleared {
        removed: usize,
        archived: usize,
    },
    GoalSet {
        goal: Goal,
    },
    ProgressReset,
    PreferencesUpdated {
        preferences: Preferences,
    },
    ProfileSaved {
        profile: SuggestionProfile,
    },
}

/// A workout as shown to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutView {
    pub index: usize,
    pub text: String,
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
    pub category: Category,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub workouts: Vec<WorkoutView>,
    pub progress: ProgressSummary,
    pub goal: GoalProgress,
    pub streak: StreakState,
    pub chart: ChartSeries,
    pub preferences: Preferences,
}

fn read_raw(store: &dyn KeyValueStore, key: &str) -> Result<Option<String>> {
    Ok(store
        .get(key)?
        .map(|v| v.trim().trim_matches('"').to_string())
        .filter(|v| !v.is_empty() && v != "null" && v != "undefined"))
}

fn read_parsed<T: FromStr>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = read_raw(store, key)? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(v) => Ok(Some(v)),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring malformed stored value");
            Ok(None)
        }
    }
}

fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring malformed stored JSON");
            Ok(None)
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn read_instant(store: &dyn KeyValueStore, key: &str) -> Result<Option<DateTime<Utc>>> {
    let raw = read_raw(store, key)?;
    let parsed = raw.as_deref().and_then(parse_instant);
    if raw.is_some() && parsed.is_none() {
        tracing::warn!(key, "ignoring malformed stored instant");
    }
    Ok(parsed)
}

impl TrackerState {
    /// Read every key leniently, then run the boundary resets.
    ///
    /// # Errors
    /// Only storage failures propagate; malformed values fall back to defaults.
    pub fn load<Tz: TimeZone>(
        store: &dyn KeyValueStore,
        window: &TimeWindow<Tz>,
    ) -> Result<(Self, ResetOutcome)> {
        let mut state = Self::read(store)?;
        let outcome = apply_boundary_resets(&state.watermarks, window, &mut state.ledger);
        state.watermarks = outcome.watermarks;
        Ok((state, outcome))
    }

    fn read(store: &dyn KeyValueStore) -> Result<Self> {
        let raw_workouts: Vec<serde_json::Value> =
            read_json(store, keys::WORKOUTS)?.unwrap_or_default();
        let total = raw_workouts.len();
        let workouts: Vec<WorkoutRecord> = raw_workouts
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        if workouts.len() < total {
            tracing::warn!(dropped = total - workouts.len(), "dropped malformed workout records");
        }

        let raw_completed: Vec<serde_json::Value> =
            read_json(store, keys::COMPLETED_WORKOUTS)?.unwrap_or_default();
        let strings: Vec<String> = raw_completed
            .into_iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
        let (ledger, dropped) = CompletionLedger::parse_lenient(&strings);
        if dropped > 0 {
            tracing::warn!(dropped, "dropped malformed archived timestamps");
        }

        let preferences = Preferences {
            chart_type: read_parsed(store, keys::CHART_TYPE)?.unwrap_or_default(),
            time_view: read_parsed(store, keys::TIME_VIEW)?.unwrap_or_default(),
            filter: read_parsed(store, keys::FILTER_TYPE)?.unwrap_or_default(),
        };

        Ok(Self {
            workouts,
            ledger,
            watermarks: ResetWatermarks {
                last_reset_day: read_instant(store, keys::LAST_RESET_DAY)?,
                last_reset_week: read_instant(store, keys::LAST_RESET_WEEK)?,
            },
            goal: read_json(store, keys::WORKOUT_GOAL)?.unwrap_or_default(),
            streak: StreakState {
                last_workout_date: read_parsed::<NaiveDate>(store, keys::LAST_WORKOUT_DATE)?,
                current_streak: read_parsed(store, keys::CURRENT_STREAK)?.unwrap_or(0),
            },
            preferences,
            profile: read_json(store, keys::USER_GOAL)?.unwrap_or_default(),
        })
    }

    /// Write the full state back as one batch.
    ///
    /// # Errors
    /// Returns an error if the store rejects the batch; a [`Database`]
    /// then keeps the previously saved state.
    ///
    /// [`Database`]: crate::storage::Database
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<()> {
        let entries = [
            (keys::WORKOUTS, Some(serde_json::to_string(&self.workouts)?)),
            (keys::COMPLETED_WORKOUTS, Some(serde_json::to_string(&self.ledger)?)),
            (
                keys::LAST_RESET_DAY,
                self.watermarks.last_reset_day.map(|t| t.to_rfc3339()),
            ),
            (
                keys::LAST_RESET_WEEK,
                self.watermarks.last_reset_week.map(|t| t.to_rfc3339()),
            ),
            (keys::WORKOUT_GOAL, Some(serde_json::to_string(&self.goal)?)),
            (
                keys::LAST_WORKOUT_DATE,
                self.streak.last_workout_date.map(|d| d.to_string()),
            ),
            (keys::CURRENT_STREAK, Some(self.streak.current_streak.to_string())),
            (keys::CHART_TYPE, Some(json_str(&self.preferences.chart_type)?)),
            (keys::TIME_VIEW, Some(json_str(&self.preferences.time_view)?)),
            (keys::FILTER_TYPE, Some(self.preferences.filter.as_str().to_string())),
            (keys::USER_GOAL, Some(serde_json::to_string(&self.profile)?)),
        ];
        store.set_many(&entries)
    }

    fn index_check(&self, index: usize) -> Result<(), ValidationError> {
        if index < self.workouts.len() {
            Ok(())
        } else {
            Err(ValidationError::OutOfBounds {
                collection: "workouts".into(),
                index,
                len: self.workouts.len(),
            })
        }
    }

    /// Creation instant for a new record, nudged forward until neither a
    /// live record nor the archive already carries it.
    fn fresh_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let mut t = now;
        while self.workouts.iter().any(|w| w.timestamp == t) || self.ledger.contains(t) {
            t += Duration::milliseconds(1);
        }
        t
    }

    /// Apply one command against the window's `now`.
    ///
    /// # Errors
    /// Fails on an out-of-range index or empty workout text, leaving the
    /// state untouched.
    pub fn apply<Tz: TimeZone>(&mut self, command: Command, window: &TimeWindow<Tz>) -> Result<Outcome> {
        tracing::debug!(?command, "applying command");
        let outcome = match command {
            Command::AddWorkout { text } => {
                let text = non_empty(text)?;
                let record = WorkoutRecord::new(text, self.fresh_timestamp(window.now));
                self.workouts.push(record.clone());
                Outcome::Added {
                    index: self.workouts.len() - 1,
                    record,
                }
            }
            Command::EditWorkout { index, text } => {
                self.index_check(index)?;
                let text = non_empty(text)?;
                let record = &mut self.workouts[index];
                record.text = text;
                if record.completed {
                    self.ledger.archive(record.timestamp);
                }
                Outcome::Edited {
                    index,
                    record: record.clone(),
                }
            }
            Command::SetCompleted { index, completed } => {
                self.index_check(index)?;
                let record = &mut self.workouts[index];
                let was_completed = record.completed;
                record.completed = completed;
                let timestamp = record.timestamp;

                let streak = if completed {
                    let newly_archived = self.ledger.archive(timestamp);
                    (!was_completed && newly_archived)
                        .then(|| self.streak.record_completion(window.date))
                } else {
                    self.ledger.unarchive(timestamp);
                    None
                };
                Outcome::CompletionChanged {
                    index,
                    completed,
                    changed: was_completed != completed,
                    streak,
                }
            }
            Command::DeleteWorkout { index } => {
                self.index_check(index)?;
                let record = self.workouts.remove(index);
                let unarchived = self.ledger.unarchive(record.timestamp);
                Outcome::Deleted { record, unarchived }
            }
            Command::ClearWorkouts => {
                let removed = self.workouts.len();
                let archived = std::mem::take(&mut self.workouts)
                    .into_iter()
                    .filter(|w| w.completed)
                    .filter(|w| self.ledger.archive(w.timestamp))
                    .count();
                tracing::info!(removed, archived, "cleared workouts");
                Outcome::Cleared { removed, archived }
            }
            Command::SetGoal(goal) => {
                self.goal = goal;
                Outcome::GoalSet { goal }
            }
            Command::ResetProgress => {
                *self = Self {
                    preferences: self.preferences,
                    profile: std::mem::take(&mut self.profile),
                    ..Self::default()
                };
                tracing::info!("progress reset");
                Outcome::ProgressReset
            }
            Command::SetPreferences {
                chart_type,
                time_view,
                filter,
            } => {
                let prefs = &mut self.preferences;
                prefs.chart_type = chart_type.unwrap_or(prefs.chart_type);
                prefs.time_view = time_view.unwrap_or(prefs.time_view);
                prefs.filter = filter.unwrap_or(prefs.filter);
                Outcome::PreferencesUpdated {
                    preferences: *prefs,
                }
            }
            Command::SaveProfile(profile) => {
                self.profile = profile.clone();
                Outcome::ProfileSaved { profile }
            }
        };
        Ok(outcome)
    }

    pub fn progress<Tz: TimeZone>(&self, window: &TimeWindow<Tz>, filter: CategoryFilter) -> ProgressSummary {
        ProgressSummary::compute(window, &self.workouts, &self.ledger, filter)
    }

    pub fn goal_progress<Tz: TimeZone>(&self, window: &TimeWindow<Tz>) -> GoalProgress {
        goal_progress(&self.goal, window, &self.workouts, &self.ledger)
    }

    pub fn chart<Tz: TimeZone>(&self, window: &TimeWindow<Tz>, view: TimeView, filter: CategoryFilter) -> ChartSeries {
        chart_series(view, filter, &self.workouts, &self.ledger, window)
    }

    /// Render-ready view using the stored preferences.
    pub fn snapshot<Tz: TimeZone>(&self, window: &TimeWindow<Tz>) -> Snapshot {
        let prefs = self.preferences;
        Snapshot {
            workouts: self
                .workouts
                .iter()
                .enumerate()
                .map(|(index, w)| WorkoutView {
                    index,
                    text: w.text.clone(),
                    completed: w.completed,
                    timestamp: w.timestamp,
                    category: w.category(),
                })
                .collect(),
            progress: self.progress(window, CategoryFilter::All),
            goal: self.goal_progress(window),
            streak: self.streak,
            chart: self.chart(window, prefs.time_view, prefs.filter),
            preferences: prefs,
        }
    }
}

fn non_empty(text: String) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyDescription)
    } else {
        Ok(trimmed.to_string())
    }
}

fn json_str<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_value(value)?
        .as_str()
        .map(str::to_string)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::GoalPeriod;
    use crate::storage::MemoryStore;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn window(s: &str) -> TimeWindow<Utc> {
        TimeWindow::at(utc(s))
    }

    fn add(state: &mut TrackerState, w: &TimeWindow<Utc>, text: &str) -> usize {
        match state
            .apply(Command::AddWorkout { text: text.into() }, w)
            .unwrap()
        {
            Outcome::Added { index, .. } => index,
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    fn complete(state: &mut TrackerState, w: &TimeWindow<Utc>, index: usize) -> Outcome {
        state
            .apply(Command::SetCompleted { index, completed: true }, w)
            .unwrap()
    }

    #[test]
    fn completing_archives_and_starts_streak() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let i = add(&mut state, &w, "Plank");
        let outcome = complete(&mut state, &w, i);
        assert_eq!(
            outcome,
            Outcome::CompletionChanged {
                index: 0,
                completed: true,
                changed: true,
                streak: Some(StreakTransition::Started)
            }
        );
        assert!(state.ledger.contains(state.workouts[0].timestamp));
        assert_eq!(state.progress(&w, CategoryFilter::All).today, 1);
    }

    #[test]
    fn same_day_completions_do_not_inflate_streak() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let a = add(&mut state, &w, "Plank");
        let b = add(&mut state, &w, "Squat");
        complete(&mut state, &w, a);
        complete(&mut state, &w, b);
        assert_eq!(state.streak.current_streak, 1);
        assert_eq!(state.progress(&w, CategoryFilter::All).today, 2);
    }

    #[test]
    fn adds_in_the_same_instant_get_distinct_timestamps() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        add(&mut state, &w, "A");
        add(&mut state, &w, "B");
        assert_ne!(state.workouts[0].timestamp, state.workouts[1].timestamp);
    }

    #[test]
    fn uncompleting_unarchives_but_keeps_streak() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let i = add(&mut state, &w, "Plank");
        complete(&mut state, &w, i);
        state
            .apply(Command::SetCompleted { index: i, completed: false }, &w)
            .unwrap();
        assert!(state.ledger.is_empty());
        assert_eq!(state.streak.current_streak, 1);
        assert_eq!(state.progress(&w, CategoryFilter::All).today, 0);
    }

    #[test]
    fn deleting_completed_record_removes_archived_timestamp() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let i = add(&mut state, &w, "Plank");
        complete(&mut state, &w, i);
        let ts = state.workouts[i].timestamp;
        let outcome = state.apply(Command::DeleteWorkout { index: i }, &w).unwrap();
        assert!(matches!(outcome, Outcome::Deleted { unarchived: true, .. }));
        assert!(!state.ledger.contains(ts));
        assert!(state.workouts.is_empty());
    }

    #[test]
    fn clear_archives_completed_records_only() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let a = add(&mut state, &w, "Plank");
        add(&mut state, &w, "Squat");
        let c = add(&mut state, &w, "Run");
        complete(&mut state, &w, a);
        state.workouts[c].completed = true;

        let outcome = state.apply(Command::ClearWorkouts, &w).unwrap();
        assert_eq!(outcome, Outcome::Cleared { removed: 3, archived: 1 });
        assert!(state.workouts.is_empty());
        assert_eq!(state.ledger.len(), 2);
        assert_eq!(state.progress(&w, CategoryFilter::All).today, 2);
    }

    #[test]
    fn edit_keeps_identity_and_skips_streak() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let i = add(&mut state, &w, "Plank");
        complete(&mut state, &w, i);
        let ts = state.workouts[i].timestamp;
        let next_day = window("2024-06-13T12:00:00Z");
        state
            .apply(Command::EditWorkout { index: i, text: "Side plank".into() }, &next_day)
            .unwrap();
        assert_eq!(state.workouts[i].text, "Side plank");
        assert_eq!(state.workouts[i].timestamp, ts);
        assert!(state.workouts[i].completed);
        assert_eq!(state.streak.current_streak, 1);
    }

    #[test]
    fn invalid_commands_leave_state_untouched() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        add(&mut state, &w, "Plank");
        let before = state.clone();

        let err = state.apply(Command::DeleteWorkout { index: 3 }, &w).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
        assert!(state.apply(Command::AddWorkout { text: "   ".into() }, &w).is_err());
        assert!(state
            .apply(Command::EditWorkout { index: 0, text: "".into() }, &w)
            .is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn reset_progress_keeps_preferences_and_profile() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let i = add(&mut state, &w, "Plank");
        complete(&mut state, &w, i);
        state.apply(Command::SetGoal(Goal::new(3, GoalPeriod::Weekly)), &w).unwrap();
        state
            .apply(
                Command::SetPreferences {
                    chart_type: Some(ChartType::Pie),
                    time_view: None,
                    filter: None,
                },
                &w,
            )
            .unwrap();
        state.profile.body_parts = vec![crate::suggest::BodyPart::Abs];

        state.apply(Command::ResetProgress, &w).unwrap();
        assert!(state.workouts.is_empty());
        assert!(state.ledger.is_empty());
        assert_eq!(state.streak, StreakState::default());
        assert_eq!(state.goal, Goal::default());
        assert_eq!(state.preferences.chart_type, ChartType::Pie);
        assert_eq!(state.profile.body_parts.len(), 1);
    }

    #[test]
    fn save_then_load_round_trips() {
        let w = window("2024-06-12T12:00:00Z");
        let store = MemoryStore::new();
        let mut state = TrackerState::default();
        let i = add(&mut state, &w, "Bench press: 3 sets");
        complete(&mut state, &w, i);
        state.apply(Command::SetGoal(Goal::new(4, GoalPeriod::Monthly)), &w).unwrap();
        state.watermarks = ResetWatermarks {
            last_reset_day: Some(w.now),
            last_reset_week: Some(w.now),
        };
        state.save(&store).unwrap();

        let (loaded, outcome) = TrackerState::load(&store, &w).unwrap();
        assert!(outcome.pruned.is_empty());
        assert_eq!(loaded, state);
        assert_eq!(store.get(keys::LAST_WORKOUT_DATE).unwrap().as_deref(), Some("2024-06-12"));
        assert_eq!(store.get(keys::CHART_TYPE).unwrap().as_deref(), Some("bar"));
    }

    #[test]
    fn load_tolerates_malformed_values() {
        let store = MemoryStore::new();
        store
            .set(
                keys::WORKOUTS,
                r#"[{"text":"Plank","completed":true,"timestamp":"2024-06-12T08:00:00.000Z"},{"text":"Bad","timestamp":"garbage"},42]"#,
            )
            .unwrap();
        store
            .set(keys::COMPLETED_WORKOUTS, r#"["2024-06-12T08:00:00.000Z","nope",7]"#)
            .unwrap();
        store.set(keys::LAST_RESET_DAY, "null").unwrap();
        store.set(keys::LAST_RESET_WEEK, "yesterday-ish").unwrap();
        store.set(keys::WORKOUT_GOAL, "{not json").unwrap();
        store.set(keys::CURRENT_STREAK, "NaN").unwrap();
        store.set(keys::FILTER_TYPE, "legs").unwrap();
        store.set(keys::TIME_VIEW, "decade").unwrap();

        let w = window("2024-06-12T12:00:00Z");
        let (state, outcome) = TrackerState::load(&store, &w).unwrap();
        assert_eq!(state.workouts.len(), 1);
        assert_eq!(state.ledger.len(), 1);
        assert!(outcome.day_reset && outcome.week_reset);
        assert_eq!(state.goal, Goal::default());
        assert_eq!(state.streak.current_streak, 0);
        assert_eq!(state.preferences.filter, CategoryFilter::Only(Category::Legs));
        assert_eq!(state.preferences.time_view, TimeView::Weekly);
    }

    #[test]
    fn load_accepts_legacy_plain_strings() {
        let store = MemoryStore::new();
        store.set(keys::LAST_RESET_DAY, "2024-06-12T01:00:00.000Z").unwrap();
        store.set(keys::LAST_RESET_WEEK, "\"2024-06-10T01:00:00.000Z\"").unwrap();
        store.set(keys::LAST_WORKOUT_DATE, "2024-06-11").unwrap();
        store.set(keys::CURRENT_STREAK, "4").unwrap();

        let w = window("2024-06-12T12:00:00Z");
        let (state, outcome) = TrackerState::load(&store, &w).unwrap();
        assert!(!outcome.day_reset && !outcome.week_reset);
        assert_eq!(state.streak.current_streak, 4);
        assert_eq!(
            state.streak.last_workout_date,
            NaiveDate::from_ymd_opt(2024, 6, 11)
        );
    }

    /// Wednesday 2024-06-12 with one archived completion this week and one
    /// from the previous week.
    fn scenario_store(last_reset_week: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store
            .set(
                keys::COMPLETED_WORKOUTS,
                r#"["2024-06-10T08:00:00Z","2024-06-05T08:00:00Z"]"#,
            )
            .unwrap();
        store.set(keys::LAST_RESET_DAY, "2024-06-12T06:00:00Z").unwrap();
        store.set(keys::LAST_RESET_WEEK, last_reset_week).unwrap();
        store
    }

    #[test]
    fn week_prune_scenario_before_and_after_boundary_pass() {
        let w = window("2024-06-12T12:00:00Z");

        // Week pass already ran this week: nothing pruned yet.
        let (state, outcome) = TrackerState::load(&scenario_store("2024-06-09T10:00:00Z"), &w).unwrap();
        assert!(!outcome.week_reset);
        let summary = state.progress(&w, CategoryFilter::All);
        assert_eq!(summary.week, 1);
        assert_eq!(summary.month, 2);

        // Week pass last ran in the previous week: 06-05 is pruned.
        let (state, outcome) = TrackerState::load(&scenario_store("2024-06-07T10:00:00Z"), &w).unwrap();
        assert!(outcome.week_reset);
        assert_eq!(outcome.pruned, vec![utc("2024-06-05T08:00:00Z")]);
        let summary = state.progress(&w, CategoryFilter::All);
        assert_eq!(summary.week, 1);
        assert_eq!(summary.month, 1);
    }

    #[test]
    fn snapshot_reflects_preferences() {
        let w = window("2024-06-12T12:00:00Z");
        let mut state = TrackerState::default();
        let i = add(&mut state, &w, "Jog");
        complete(&mut state, &w, i);
        state.preferences.filter = CategoryFilter::Only(Category::Cardio);
        let snap = state.snapshot(&w);
        assert_eq!(snap.workouts[0].category, Category::Cardio);
        assert_eq!(snap.chart.data.iter().sum::<usize>(), 1);
        assert_eq!(snap.goal, GoalProgress::NotSet);
        assert_eq!(snap.streak.current_streak, 1);
    }
}
