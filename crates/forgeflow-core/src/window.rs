//! Calendar boundaries for a single "tick".
//!
//! A [`TimeWindow`] snapshots `now` once and derives the local-calendar
//! boundaries every other component counts against: start of day, start of
//! the week (Sunday) and start of the month. All boundaries are returned as
//! UTC instants so they compare directly with stored timestamps.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A counting window with a fixed start and an open end (now).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Today,
    Week,
    Month,
}

/// Boundaries of the current day, week and month in a given time zone.
#[derive(Debug, Clone)]
pub struct TimeWindow<Tz: TimeZone = Local> {
    tz: Tz,
    /// The instant this window was taken at.
    pub now: DateTime<Utc>,
    /// Local calendar day containing `now`.
    pub date: NaiveDate,
    /// Midnight of `date`.
    pub today: DateTime<Utc>,
    /// Midnight of the most recent Sunday (equal to `today` on Sundays).
    pub week_start: DateTime<Utc>,
    /// Midnight of the first day of the month.
    pub month_start: DateTime<Utc>,
}

impl TimeWindow<Local> {
    /// Window for the host clock and calendar.
    pub fn local() -> Self {
        Self::at(Local::now())
    }
}

impl<Tz: TimeZone> TimeWindow<Tz> {
    /// Window around `now`, using the time zone `now` is expressed in.
    pub fn at(now: DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let date = now.date_naive();
        let week_start_date =
            date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
        let month_start_date = date - Duration::days(i64::from(date.day0()));

        Self {
            today: local_midnight(&tz, date),
            week_start: local_midnight(&tz, week_start_date),
            month_start: local_midnight(&tz, month_start_date),
            now: now.with_timezone(&Utc),
            date,
            tz,
        }
    }

    /// Start instant of a counting bucket.
    pub fn bucket_start(&self, bucket: Bucket) -> DateTime<Utc> {
        match bucket {
            Bucket::Today => self.today,
            Bucket::Week => self.week_start,
            Bucket::Month => self.month_start,
        }
    }

    /// Local calendar day an instant falls on.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }
}

/// First valid instant of a local day.
///
/// Midnight can be skipped by a DST transition in some zones; the day then
/// starts at the first representable local time after it.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=8)
        .map(|quarter| midnight + Duration::minutes(15 * quarter))
        .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
