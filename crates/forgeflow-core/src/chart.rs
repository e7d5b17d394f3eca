//! Chart series built from the merged ledger.
//!
//! Rendering is left to the caller; this module only produces labelled
//! counts for the selected view and category filter.

use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::CategoryFilter;
use crate::ledger::CompletionLedger;
use crate::window::TimeWindow;
use crate::workout::WorkoutRecord;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Presentation style of the chart. Stored as a preference only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            other => Err(format!("unknown chart type: {other}")),
        }
    }
}

/// Time span a chart covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeView {
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for TimeView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(TimeView::Weekly),
            "monthly" | "month" => Ok(TimeView::Monthly),
            "yearly" | "year" => Ok(TimeView::Yearly),
            other => Err(format!("unknown time view: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

impl ChartSeries {
    fn no_data() -> Self {
        Self {
            labels: vec!["No Data".to_string()],
            data: vec![0],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|v| *v == 0)
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// Per-slot completion counts for the view containing `window.now`.
pub fn chart_series<Tz: TimeZone>(
    view: TimeView,
    filter: CategoryFilter,
    live: &[WorkoutRecord],
    ledger: &CompletionLedger,
    window: &TimeWindow<Tz>,
) -> ChartSeries {
    let today = window.date;
    let (labels, slots): (Vec<String>, usize) = match view {
        TimeView::Weekly => (WEEKDAYS.iter().map(|d| d.to_string()).collect(), 7),
        TimeView::Monthly => {
            let n = days_in_month(today);
            ((1..=n).map(|d| d.to_string()).collect(), n as usize)
        }
        TimeView::Yearly => (MONTHS.iter().map(|m| m.to_string()).collect(), 12),
    };

    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    let slot_of = |date: NaiveDate| -> Option<usize> {
        match view {
            TimeView::Weekly => (date >= week_start && date < week_start + Duration::days(7))
                .then(|| date.weekday().num_days_from_monday() as usize),
            TimeView::Monthly => (date.year() == today.year() && date.month() == today.month())
                .then(|| date.day0() as usize),
            TimeView::Yearly => (date.year() == today.year()).then(|| date.month0() as usize),
        }
    };

    let mut data = vec![0usize; slots];
    for (instant, category) in ledger.merge_classified(live) {
        if !filter.matches(category) {
            continue;
        }
        if let Some(slot) = slot_of(window.local_date(instant)) {
            data[slot] += 1;
        }
    }

    let series = ChartSeries { labels, data };
    if series.is_empty() {
        ChartSeries::no_data()
    } else {
        series
    }
}
