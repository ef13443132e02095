//! Calendar heatmap over the trailing year.

use std::collections::HashMap;

use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::corpus::TrackedEntries;

/// Cells in the heatmap, today included.
pub const HEATMAP_DAYS: usize = 365;

/// One day of the heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub count: u32,
    /// Intensity bucket, 0 (none) to 4 (busiest quartile)
    pub level: u8,
}

/// 365 contiguous days, oldest first, ending today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapData {
    pub cells: Vec<HeatmapCell>,
    /// Busiest day inside the window
    pub max_count: u32,
}

/// Build the heatmap for the 365 days ending on `now`'s date.
///
/// Entries dated outside the window affect neither the cells nor `max_count`.
pub fn compute_heatmap(corpus: &TrackedEntries<'_>, now: DateTime<FixedOffset>) -> HeatmapData {
    let today = now.date_naive();
    let start = today
        .checked_sub_days(Days::new(HEATMAP_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MIN);

    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for date in corpus.iter().filter_map(|e| e.canonical_date(now.offset())) {
        if date >= start && date <= today {
            *counts.entry(date).or_insert(0) += 1;
        }
    }

    let max_count = counts.values().copied().max().unwrap_or(0);

    let cells: Vec<HeatmapCell> = start
        .iter_days()
        .take(HEATMAP_DAYS)
        .map(|date| {
            let count = counts.get(&date).copied().unwrap_or(0);
            HeatmapCell {
                date,
                count,
                level: intensity_level(count, max_count),
            }
        })
        .collect();

    tracing::debug!(active_days = counts.len(), max_count, "Computed heatmap");

    HeatmapData { cells, max_count }
}

/// Quartile bucket of `count` relative to `max_count`.
pub fn intensity_level(count: u32, max_count: u32) -> u8 {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let ratio = count as f64 / max_count as f64;
    if ratio <= 0.25 {
        1
    } else if ratio <= 0.5 {
        2
    } else if ratio <= 0.75 {
        3
    } else {
        4
    }
}
