//! Weekly activity trend and the trailing-week counter.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::corpus::TrackedEntries;

/// Default number of weekly buckets.
pub const DEFAULT_WEEK_COUNT: usize = 16;

/// One Monday-anchored week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrendEntry {
    /// Short `M/D` label of the week's Monday
    pub week_label: String,
    pub week_start: NaiveDate,
    pub count: u32,
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(back.into())).unwrap_or(date)
}

/// Bucket tracked entries into `week_count` weeks, oldest first.
///
/// The newest bucket is the current week, Monday through Sunday, so entries
/// dated later this week still land in it. Anything outside the span is
/// dropped. A span reaching past the calendar's first representable
/// Monday yields no buckets at all.
pub fn compute_weekly_trend(
    corpus: &TrackedEntries<'_>,
    week_count: usize,
    now: DateTime<FixedOffset>,
) -> Vec<WeeklyTrendEntry> {
    if week_count == 0 {
        return Vec::new();
    }

    let anchor = week_start(now.date_naive());
    let Some(oldest) = (week_count as u64 - 1)
        .checked_mul(7)
        .and_then(|days| anchor.checked_sub_days(Days::new(days)))
    else {
        tracing::warn!(week_count, "Weekly trend span exceeds the calendar range");
        return Vec::new();
    };
    let newest_end = anchor.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);

    let mut weeks: Vec<WeeklyTrendEntry> = oldest
        .iter_weeks()
        .take(week_count)
        .map(|start| WeeklyTrendEntry {
            week_label: format!("{}/{}", start.month(), start.day()),
            week_start: start,
            count: 0,
        })
        .collect();

    let mut dropped = 0usize;
    for entry in corpus.iter() {
        let Some(date) = entry.canonical_date(now.offset()) else {
            dropped += 1;
            continue;
        };
        if date < oldest || date > newest_end {
            dropped += 1;
            continue;
        }
        let idx = ((date - oldest).num_days() / 7) as usize;
        if let Some(week) = weeks.get_mut(idx) {
            week.count += 1;
        }
    }

    tracing::debug!(week_count, dropped, "Computed weekly trend");
    weeks
}

/// Entries dated within the 7 days ending today.
pub fn count_this_week(corpus: &TrackedEntries<'_>, now: DateTime<FixedOffset>) -> u32 {
    let today = now.date_naive();
    let cutoff = today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN);

    corpus
        .iter()
        .filter_map(|e| e.canonical_date(now.offset()))
        .filter(|date| *date >= cutoff && *date <= today)
        .count() as u32
}
