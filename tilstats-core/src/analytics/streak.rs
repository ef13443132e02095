//! Consecutive-day activity streak.

use std::collections::HashSet;

use chrono::{DateTime, Days, FixedOffset, NaiveDate};

use crate::corpus::TrackedEntries;

/// Longest look-back, in days, including today.
pub const MAX_STREAK_SCAN_DAYS: u32 = 365;

/// Distinct canonical dates with at least one tracked entry.
pub fn active_dates(corpus: &TrackedEntries<'_>, offset: &FixedOffset) -> HashSet<NaiveDate> {
    corpus.iter().filter_map(|e| e.canonical_date(offset)).collect()
}

/// Count of consecutive active days ending today.
///
/// An inactive today does not break the streak: counting resumes from
/// yesterday. Any other inactive day ends the walk. Only today gets that
/// grace, so two idle days in a row reset the streak to zero.
pub fn compute_streak(corpus: &TrackedEntries<'_>, now: DateTime<FixedOffset>) -> u32 {
    let active = active_dates(corpus, now.offset());
    let streak = streak_from(&active, now.date_naive());

    tracing::debug!(active_days = active.len(), streak, "Computed streak");
    streak
}

fn streak_from(active: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    if active.is_empty() {
        return 0;
    }

    let mut streak = 0;
    let mut cursor = today;
    for i in 0..MAX_STREAK_SCAN_DAYS {
        if active.contains(&cursor) {
            streak += 1;
        } else if i != 0 {
            break;
        }
        match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}
