//! Completion ledger.
//!
//! Two records overlap: the `completed` flag on live workouts and the archived
//! timestamp set that outlives cleared workouts. Everything that counts
//! completions goes through [`merge`] so an instant present in both is
//! counted once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::category::Category;
use crate::workout::WorkoutRecord;

/// Archived completion instants, deduplicated and ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLedger {
    archived: BTreeSet<DateTime<Utc>>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse stored ISO-8601 strings, skipping anything unparseable.
    ///
    /// Returns the ledger and the number of entries dropped.
    pub fn parse_lenient<S: AsRef<str>>(raw: &[S]) -> (Self, usize) {
        let mut dropped = 0;
        let archived = raw
            .iter()
            .filter_map(|s| match DateTime::parse_from_rfc3339(s.as_ref().trim()) {
                Ok(t) => Some(t.with_timezone(&Utc)),
                Err(_) => {
                    dropped += 1;
                    None
                }
            })
            .collect();
        (Self { archived }, dropped)
    }

    /// Add an instant. Returns `true` if it was not already archived.
    pub fn archive(&mut self, timestamp: DateTime<Utc>) -> bool {
        self.archived.insert(timestamp)
    }

    /// Remove an instant. Returns `true` if it was archived.
    pub fn unarchive(&mut self, timestamp: DateTime<Utc>) -> bool {
        self.archived.remove(&timestamp)
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.archived.contains(&timestamp)
    }

    pub fn len(&self) -> usize {
        self.archived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archived.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateTime<Utc>> + '_ {
        self.archived.iter()
    }

    /// Drop every entry matching `prune`, returning the removed instants.
    pub(crate) fn prune_where(
        &mut self,
        mut prune: impl FnMut(&DateTime<Utc>) -> bool,
    ) -> Vec<DateTime<Utc>> {
        let (removed, kept): (BTreeSet<_>, BTreeSet<_>) =
            std::mem::take(&mut self.archived).into_iter().partition(|t| prune(t));
        self.archived = kept;
        removed.into_iter().collect()
    }

    /// Union of this ledger with the completed live records.
    pub fn merge(&self, live: &[WorkoutRecord]) -> BTreeSet<DateTime<Utc>> {
        merge(live, self.iter())
    }

    /// Merged instants paired with the category each one counts under.
    pub fn merge_classified(&self, live: &[WorkoutRecord]) -> BTreeMap<DateTime<Utc>, Category> {
        merge_classified(live, self.iter())
    }
}

impl FromIterator<DateTime<Utc>> for CompletionLedger {
    fn from_iter<I: IntoIterator<Item = DateTime<Utc>>>(iter: I) -> Self {
        Self {
            archived: iter.into_iter().collect(),
        }
    }
}

/// Deduplicated union of completed live-record timestamps and archived instants.
pub fn merge<'a>(
    live: &[WorkoutRecord],
    archived: impl IntoIterator<Item = &'a DateTime<Utc>>,
) -> BTreeSet<DateTime<Utc>> {
    live.iter()
        .filter(|w| w.completed)
        .map(|w| w.timestamp)
        .chain(archived.into_iter().copied())
        .collect()
}

/// Like [`merge`], keyed to a category.
///
/// An instant takes the category of the first live record carrying it;
/// archived instants whose record is gone count as [`Category::Other`].
pub fn merge_classified<'a>(
    live: &[WorkoutRecord],
    archived: impl IntoIterator<Item = &'a DateTime<Utc>>,
) -> BTreeMap<DateTime<Utc>, Category> {
    let lookup = |t: &DateTime<Utc>| {
        live.iter()
            .find(|w| w.timestamp == *t)
            .map(WorkoutRecord::category)
            .unwrap_or(Category::Other)
    };
    merge(live, archived)
        .into_iter()
        .map(|t| (t, lookup(&t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn completed(text: &str, t: DateTime<Utc>) -> WorkoutRecord {
        WorkoutRecord {
            completed: true,
            ..WorkoutRecord::new(text, t)
        }
    }

    #[test]
    fn archive_and_unarchive_are_idempotent() {
        let mut ledger = CompletionLedger::new();
        assert!(ledger.archive(ts(10)));
        assert!(!ledger.archive(ts(10)));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.unarchive(ts(10)));
        assert!(!ledger.unarchive(ts(10)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn merge_counts_shared_instant_once() {
        let live = vec![completed("Plank", ts(100)), WorkoutRecord::new("Run", ts(200))];
        let ledger: CompletionLedger = [ts(100), ts(300)].into_iter().collect();
        let merged = ledger.merge(&live);
        assert_eq!(merged.into_iter().collect::<Vec<_>>(), vec![ts(100), ts(300)]);
    }

    #[test]
    fn parse_lenient_drops_garbage_and_dedups_instants() {
        let raw = [
            "2024-06-10T08:00:00.000Z",
            "2024-06-10T08:00:00Z",
            "not a date",
            "2024-06-10T10:00:00+02:00",
        ];
        let (ledger, dropped) = CompletionLedger::parse_lenient(&raw);
        assert_eq!(dropped, 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn classified_merge_uses_live_text_or_other() {
        let live = vec![completed("Bench press", ts(1))];
        let ledger: CompletionLedger = [ts(1), ts(2)].into_iter().collect();
        let classified = ledger.merge_classified(&live);
        assert_eq!(classified[&ts(1)], Category::Chest);
        assert_eq!(classified[&ts(2)], Category::Other);
    }

    #[test]
    fn ledger_serializes_as_plain_array() {
        let ledger: CompletionLedger = [ts(0)].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&ledger).unwrap(),
            "[\"1970-01-01T00:00:00Z\"]"
        );
    }

    fn records(instants: &[i64]) -> Vec<WorkoutRecord> {
        instants.iter().map(|&s| completed("Workout", ts(s))).collect()
    }

    proptest! {
        #[test]
        fn merge_is_order_independent(
            a in proptest::collection::vec(0i64..50, 0..20),
            b in proptest::collection::vec(0i64..50, 0..20),
        ) {
            let a_instants: Vec<_> = a.iter().map(|&s| ts(s)).collect();
            let b_instants: Vec<_> = b.iter().map(|&s| ts(s)).collect();
            let ab = merge(&records(&a), &b_instants);
            let ba = merge(&records(&b), &a_instants);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn merge_with_itself_dedups(a in proptest::collection::vec(0i64..50, 0..30)) {
            let instants: Vec<_> = a.iter().map(|&s| ts(s)).collect();
            let unique: BTreeSet<_> = instants.iter().copied().collect();
            let merged = merge(&records(&a), &instants);
            prop_assert_eq!(merged.len(), unique.len());
        }
    }
}
