//! Day and week boundary resets for the archived ledger.
//!
//! Runs once per load. Each boundary carries its own watermark so a pass
//! fires at most once per calendar transition, however often the state is
//! loaded.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::ledger::CompletionLedger;
use crate::window::TimeWindow;

/// Last instants at which the day and week passes ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetWatermarks {
    pub last_reset_day: Option<DateTime<Utc>>,
    pub last_reset_week: Option<DateTime<Utc>>,
}

impl ResetWatermarks {
    fn due(mark: Option<DateTime<Utc>>, boundary: DateTime<Utc>) -> bool {
        mark.map_or(true, |m| m < boundary)
    }

    pub fn day_reset_due(&self, today: DateTime<Utc>) -> bool {
        Self::due(self.last_reset_day, today)
    }

    pub fn week_reset_due(&self, week_start: DateTime<Utc>) -> bool {
        Self::due(self.last_reset_week, week_start)
    }
}

/// What a reset pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetOutcome {
    pub watermarks: ResetWatermarks,
    /// Every instant removed from the archive, in ascending order.
    pub pruned: Vec<DateTime<Utc>>,
    pub day_reset: bool,
    pub week_reset: bool,
}

/// Prune the archive against the window and advance the watermarks.
///
/// 1. Instants after `now` or before the month start are always dropped.
/// 2. When the day watermark predates today, instants before today are
///    dropped and the watermark moves to `now`.
/// 3. Independently, the same for the week watermark and the week start.
pub fn apply_boundary_resets<Tz: TimeZone>(
    watermarks: &ResetWatermarks,
    window: &TimeWindow<Tz>,
    ledger: &mut CompletionLedger,
) -> ResetOutcome {
    let now = window.now;
    let month_start = window.month_start;
    let mut outcome = ResetOutcome {
        watermarks: *watermarks,
        pruned: ledger.prune_where(|t| *t > now || *t < month_start),
        ..ResetOutcome::default()
    };

    if watermarks.day_reset_due(window.today) {
        let today = window.today;
        outcome.pruned.extend(ledger.prune_where(|t| *t < today));
        outcome.watermarks.last_reset_day = Some(now);
        outcome.day_reset = true;
    }

    if watermarks.week_reset_due(window.week_start) {
        let week_start = window.week_start;
        outcome.pruned.extend(ledger.prune_where(|t| *t < week_start));
        outcome.watermarks.last_reset_week = Some(now);
        outcome.week_reset = true;
    }

    outcome.pruned.sort_unstable();
    if !outcome.pruned.is_empty() || outcome.day_reset || outcome.week_reset {
        tracing::debug!(
            pruned = outcome.pruned.len(),
            day_reset = outcome.day_reset,
            week_reset = outcome.week_reset,
            "applied boundary resets"
        );
    }
    outcome
}
