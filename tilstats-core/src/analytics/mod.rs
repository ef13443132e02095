//! Analytics over the tracked corpus
//!
//! Every view is a pure function of a [`TrackedEntries`] corpus and, where
//! calendar days matter, an explicit "now":
//! - Activity streak ([`streak`])
//! - 365-day heatmap ([`heatmap`])
//! - Weekly trend and trailing-week count ([`trend`])
//! - Category share ([`distribution`]) and its treemap layout ([`treemap`])
//! - Backlog rollup ([`backlog`])
//! - Recent entries and review picks ([`recent`])
//! - The combined dashboard bundle ([`dashboard`])
//!
//! [`TrackedEntries`]: crate::corpus::TrackedEntries

pub mod backlog;
pub mod category;
pub mod dashboard;
pub mod distribution;
pub mod heatmap;
pub mod recent;
pub mod streak;
pub mod summary;
pub mod treemap;
pub mod trend;

pub use backlog::{compute_backlog_rollup, format_progress_bar, BacklogRollup};
pub use category::{category_of, UNCATEGORIZED};
pub use dashboard::{
    compute_category_listings, CategoryFile, CategoryListing, DashboardOptions, DashboardStats,
    SummaryCards,
};
pub use distribution::{compute_category_distribution, CategoryDistribution};
pub use heatmap::{compute_heatmap, HeatmapCell, HeatmapData, HEATMAP_DAYS};
pub use recent::{pick_review_items, select_recent, ReviewEntry, ReviewPick};
pub use streak::compute_streak;
pub use summary::{extract_summary, DEFAULT_SUMMARY_LEN};
pub use treemap::{compute_treemap_layout, TreemapRect, DEFAULT_MAX_SEGMENTS, OTHERS_LABEL};
pub use trend::{compute_weekly_trend, count_this_week, WeeklyTrendEntry, DEFAULT_WEEK_COUNT};
