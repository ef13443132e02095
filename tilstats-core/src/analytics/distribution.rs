//! Category share of the tracked corpus.

use serde::{Deserialize, Serialize};

use super::category::group_by_category;
use crate::corpus::TrackedEntries;

/// Count and rounded share of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDistribution {
    pub name: String,
    pub count: u32,
    /// `round(count / total * 100)`, rounded independently per category
    pub percentage: u32,
}

/// Integer percentage of `count` in `total`; zero for an empty total.
pub fn percentage_of(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Per-category counts sorted by count descending.
///
/// Percentages are not normalized, so they may sum to 99 or 101.
/// Equal counts keep the order in which categories were first seen.
pub fn compute_category_distribution(corpus: &TrackedEntries<'_>) -> Vec<CategoryDistribution> {
    let total = corpus.len() as u64;
    if total == 0 {
        return Vec::new();
    }

    let mut distribution: Vec<CategoryDistribution> = group_by_category(corpus)
        .into_iter()
        .map(|(name, entries)| CategoryDistribution {
            name: name.to_string(),
            count: entries.len() as u32,
            percentage: percentage_of(entries.len() as u64, total),
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::debug!(
        categories = distribution.len(),
        total,
        "Computed category distribution"
    );
    distribution
}
