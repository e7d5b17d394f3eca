//! Bucket counts and goal progress.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::CategoryFilter;
use crate::ledger::CompletionLedger;
use crate::window::{Bucket, TimeWindow};
use crate::workout::WorkoutRecord;

/// Count merged completions at or after `bucket_start`.
pub fn count(
    bucket_start: DateTime<Utc>,
    live: &[WorkoutRecord],
    ledger: &CompletionLedger,
    filter: CategoryFilter,
) -> usize {
    match filter {
        CategoryFilter::All => ledger.merge(live).range(bucket_start..).count(),
        CategoryFilter::Only(_) => ledger
            .merge_classified(live)
            .range(bucket_start..)
            .filter(|(_, category)| filter.matches(**category))
            .count(),
    }
}

/// Completion counts for the current day, week and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub today: usize,
    pub week: usize,
    pub month: usize,
}

impl ProgressSummary {
    pub fn compute<Tz: TimeZone>(
        window: &TimeWindow<Tz>,
        live: &[WorkoutRecord],
        ledger: &CompletionLedger,
        filter: CategoryFilter,
    ) -> Self {
        let at = |bucket| count(window.bucket_start(bucket), live, ledger, filter);
        Self {
            today: at(Bucket::Today),
            week: at(Bucket::Week),
            month: at(Bucket::Month),
        }
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Today: {} | Week: {} | Month: {}",
            self.today, self.week, self.month
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    #[default]
    Weekly,
    Monthly,
}

impl GoalPeriod {
    pub fn bucket(&self) -> Bucket {
        match self {
            GoalPeriod::Weekly => Bucket::Week,
            GoalPeriod::Monthly => Bucket::Month,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPeriod::Weekly => "weekly",
            GoalPeriod::Monthly => "monthly",
        }
    }
}

impl FromStr for GoalPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(GoalPeriod::Weekly),
            "monthly" | "month" => Ok(GoalPeriod::Monthly),
            other => Err(format!("unknown goal period: {other}")),
        }
    }
}

/// Target completion count per period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub value: Option<u32>,
    #[serde(default)]
    pub period: GoalPeriod,
}

impl Goal {
    pub fn new(value: u32, period: GoalPeriod) -> Self {
        Self {
            value: Some(value),
            period,
        }
    }

    /// Target, if one is set. Zero counts as unset.
    pub fn target(&self) -> Option<u32> {
        self.value.filter(|v| *v > 0)
    }
}

/// Progress toward the goal for the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalProgress {
    NotSet,
    Tracking {
        count: usize,
        target: u32,
        period: GoalPeriod,
        /// Whole percent, capped at 100.
        percent: u8,
        achieved: bool,
    },
}

impl GoalProgress {
    pub fn is_achieved(&self) -> bool {
        matches!(self, GoalProgress::Tracking { achieved: true, .. })
    }
}

impl fmt::Display for GoalProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalProgress::NotSet => f.write_str("Goal: Not set"),
            GoalProgress::Tracking {
                count,
                target,
                period,
                percent,
                ..
            } => write!(f, "Goal: {count}/{target} ({}) {percent}%", period.as_str()),
        }
    }
}

pub fn goal_progress<Tz: TimeZone>(
    goal: &Goal,
    window: &TimeWindow<Tz>,
    live: &[WorkoutRecord],
    ledger: &CompletionLedger,
) -> GoalProgress {
    let Some(target) = goal.target() else {
        return GoalProgress::NotSet;
    };
    let start = window.bucket_start(goal.period.bucket());
    let count = count(start, live, ledger, CategoryFilter::All);
    let percent = (count as u64 * 100 / u64::from(target)).min(100) as u8;

    GoalProgress::Tracking {
        count,
        target,
        period: goal.period,
        percent,
        achieved: count as u64 >= u64::from(target),
    }
}
