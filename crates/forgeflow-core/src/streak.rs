//! Consecutive-day completion streak.
//!
//! Only a fresh completion (incomplete to complete) feeds the tracker.
//! Un-completing a workout never takes a counted day back.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a completion changed the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// First completion ever recorded.
    Started,
    /// The day was already counted.
    AlreadyCounted,
    /// Completion on the day after the last one.
    Extended,
    /// Gap of two or more days, or a day earlier than the last one.
    Restarted,
}

/// Persisted streak counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub last_workout_date: Option<NaiveDate>,
    pub current_streak: u32,
}

impl StreakState {
    /// Feed a new completion on local calendar day `day`.
    pub fn record_completion(&mut self, day: NaiveDate) -> StreakTransition {
        let transition = match self.last_workout_date {
            None => StreakTransition::Started,
            Some(last) if last == day => return StreakTransition::AlreadyCounted,
            Some(last) if last + Duration::days(1) == day => StreakTransition::Extended,
            Some(_) => StreakTransition::Restarted,
        };

        self.current_streak = match transition {
            StreakTransition::Extended => self.current_streak.saturating_add(1),
            _ => 1,
        };
        self.last_workout_date = Some(day);
        tracing::debug!(?transition, streak = self.current_streak, %day, "streak updated");
        transition
    }

    pub fn is_active(&self) -> bool {
        self.current_streak > 0
    }
}

impl fmt::Display for StreakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.current_streak;
        write!(f, "Streak: {n} day{}", if n == 1 { "" } else { "s" })
    }
}
