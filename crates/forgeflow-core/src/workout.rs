//! Workout records and the description format used to build them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::Category;

/// A logged workout.
///
/// The creation timestamp doubles as the record's identity in the completion
/// ledger; it never changes after creation, edits only touch `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
}

impl WorkoutRecord {
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            timestamp,
        }
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.text)
    }
}

/// Unit for a timed exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Seconds,
    Minutes,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            other => Err(format!("unknown time unit: {other}")),
        }
    }
}

/// Structured form of a workout description.
///
/// Renders to `"Squat: 3 sets, 10 reps, 60kg"`; the exercise name stands
/// alone when no details are given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDetails {
    pub exercise: String,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight_kg: Option<f64>,
    pub distance_km: Option<f64>,
    pub duration: Option<(u32, TimeUnit)>,
}

impl WorkoutDetails {
    pub fn new(exercise: impl Into<String>) -> Self {
        Self {
            exercise: exercise.into(),
            ..Self::default()
        }
    }

    /// Recover details from a rendered description. Unknown fragments are ignored.
    pub fn parse(text: &str) -> Self {
        let (exercise, rest) = match text.split_once(": ") {
            Some((exercise, rest)) => (exercise, Some(rest)),
            None => (text, None),
        };
        let mut details = Self::new(exercise.trim());

        for fragment in rest.into_iter().flat_map(|r| r.split(", ")) {
            let fragment = fragment.trim();
            let mut words = fragment.split_whitespace();
            let first = words.next().unwrap_or_default();
            let second = words.next();

            if let Some(kg) = first.strip_suffix("kg") {
                details.weight_kg = kg.parse().ok();
            } else if let Some(km) = first.strip_suffix("km") {
                details.distance_km = km.parse().ok();
            } else if let Some(word) = second {
                let value = first.parse().ok();
                if word.starts_with("set") {
                    details.sets = value;
                } else if word.starts_with("rep") {
                    details.reps = value;
                } else if let (Some(v), Ok(unit)) = (value, word.parse::<TimeUnit>()) {
                    details.duration = Some((v, unit));
                }
            }
        }
        details
    }
}

fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

impl fmt::Display for WorkoutDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(sets) = self.sets {
            parts.push(plural(sets, "set"));
        }
        if let Some(reps) = self.reps {
            parts.push(plural(reps, "rep"));
        }
        if let Some(kg) = self.weight_kg {
            parts.push(format!("{kg}kg"));
        }
        if let Some(km) = self.distance_km {
            parts.push(format!("{km}km"));
        }
        if let Some((value, unit)) = self.duration {
            parts.push(format!("{value} {}", unit.as_str()));
        }

        f.write_str(self.exercise.trim())?;
        if !parts.is_empty() {
            write!(f, ": {}", parts.join(", "))?;
        }
        Ok(())
    }
}
