//! Backlog progress rollup.
//!
//! Checklist parsing happens upstream; this only sums and ranks the
//! per-category `{done, total}` records it is handed.

use serde::Serialize;

use super::distribution::percentage_of;
use crate::types::BacklogProgressEntry;

/// Backlog progress across all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogRollup {
    /// Records sorted by completion ratio, most complete first
    pub categories: Vec<BacklogProgressEntry>,
    pub total_done: u64,
    pub total_items: u64,
}

impl BacklogRollup {
    /// Overall completion as an integer percentage.
    pub fn percentage(&self) -> u32 {
        percentage_of(self.total_done, self.total_items)
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Sum done/total and rank records by completion ratio.
///
/// Records with `total == 0` rank as 0%. Equal ratios keep input order.
pub fn compute_backlog_rollup(records: &[BacklogProgressEntry]) -> BacklogRollup {
    let total_done = records.iter().map(|r| r.done as u64).sum();
    let total_items = records.iter().map(|r| r.total as u64).sum();

    let mut categories = records.to_vec();
    categories.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

    BacklogRollup {
        categories,
        total_done,
        total_items,
    }
}

/// Ten-cell text progress bar, e.g. `█████░░░░░` for 5/10.
pub fn format_progress_bar(done: u64, total: u64) -> String {
    const WIDTH: usize = 10;
    let filled = if total == 0 {
        0
    } else {
        ((done as f64 / total as f64) * WIDTH as f64).round() as usize
    }
    .min(WIDTH);

    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}
