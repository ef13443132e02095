//! Dashboard analytics bundle.
//!
//! Composes every view into the single structure consumed by the text
//! formatter and the JSON export.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::backlog::{compute_backlog_rollup, BacklogRollup};
use super::category::group_by_category;
use super::distribution::{compute_category_distribution, CategoryDistribution};
use super::heatmap::{compute_heatmap, HeatmapData};
use super::streak::compute_streak;
use super::trend::{compute_weekly_trend, count_this_week, WeeklyTrendEntry, DEFAULT_WEEK_COUNT};
use crate::corpus::TrackedEntries;
use crate::types::BacklogProgressEntry;

/// Headline counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    /// Tracked entries
    pub total_entries: u32,
    pub category_count: u32,
    /// Entries dated within the last 7 days, today included
    pub this_week_count: u32,
    /// Current consecutive-day streak
    pub streak: u32,
}

/// One file in a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFile {
    pub path: String,
    pub filename: String,
    /// Modification time in the caller's offset
    pub modified_at: DateTime<FixedOffset>,
}

/// A category with its files, most recently modified first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub name: String,
    pub count: u32,
    pub files: Vec<CategoryFile>,
}

/// Tunables for [`DashboardStats::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Buckets in the weekly trend
    pub week_count: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            week_count: DEFAULT_WEEK_COUNT,
        }
    }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub summary: SummaryCards,
    pub heatmap: HeatmapData,
    pub categories: Vec<CategoryListing>,
    pub backlog: BacklogRollup,
    pub weekly_trend: Vec<WeeklyTrendEntry>,
    pub category_distribution: Vec<CategoryDistribution>,
}

impl DashboardStats {
    /// Compute every dashboard view for `corpus` as of `now`.
    pub fn compute(
        corpus: &TrackedEntries<'_>,
        backlog: &[BacklogProgressEntry],
        now: DateTime<FixedOffset>,
        options: DashboardOptions,
    ) -> Self {
        let categories = compute_category_listings(corpus, now.offset());

        let summary = SummaryCards {
            total_entries: corpus.len() as u32,
            category_count: categories.len() as u32,
            this_week_count: count_this_week(corpus, now),
            streak: compute_streak(corpus, now),
        };

        tracing::debug!(
            root = corpus.root(),
            entries = summary.total_entries,
            categories = summary.category_count,
            streak = summary.streak,
            backlog_records = backlog.len(),
            "Computed dashboard stats"
        );

        Self {
            summary,
            heatmap: compute_heatmap(corpus, now),
            categories,
            backlog: compute_backlog_rollup(backlog),
            weekly_trend: compute_weekly_trend(corpus, options.week_count, now),
            category_distribution: compute_category_distribution(corpus),
        }
    }
}

/// Categories by size, each listing its files by modification time, newest first.
pub fn compute_category_listings(
    corpus: &TrackedEntries<'_>,
    offset: &FixedOffset,
) -> Vec<CategoryListing> {
    let mut listings: Vec<CategoryListing> = group_by_category(corpus)
        .into_iter()
        .map(|(name, mut entries)| {
            entries.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
            CategoryListing {
                name: name.to_string(),
                count: entries.len() as u32,
                files: entries
                    .into_iter()
                    .map(|e| CategoryFile {
                        path: e.path.clone(),
                        filename: e.filename().to_string(),
                        modified_at: e.modified_at.with_timezone(offset),
                    })
                    .collect(),
            }
        })
        .collect();
    listings.sort_by(|a, b| b.count.cmp(&a.count));
    listings
}
