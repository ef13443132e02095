//! Area-proportional treemap layout by recursive bisection.
//!
//! Items are split into two runs whose count sums are as close as possible,
//! the rectangle is cut across its longer side in proportion to those sums,
//! and each half recurses. The result tiles the bounding box exactly and
//! keeps cells closer to square than a single-axis slice would.

use serde::Serialize;

use super::distribution::{percentage_of, CategoryDistribution};

/// Segments shown before the tail folds into [`OTHERS_LABEL`].
pub const DEFAULT_MAX_SEGMENTS: usize = 7;

/// Name of the synthetic segment holding the folded tail.
pub const OTHERS_LABEL: &str = "Others";

/// A laid-out treemap cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub name: String,
    pub count: u32,
    pub percentage: u32,
    /// Position in the (collapsed) input, independent of where the cell ends up
    pub color_index: usize,
}

#[derive(Debug, Clone)]
struct Segment {
    name: String,
    count: u32,
    percentage: u32,
    color_index: usize,
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Lay out `data` (sorted by count descending) inside `width` x `height`.
///
/// Returns nothing for empty data, a non-positive side, or a zero total.
pub fn compute_treemap_layout(
    data: &[CategoryDistribution],
    width: f64,
    height: f64,
    max_segments: usize,
) -> Vec<TreemapRect> {
    // Also rejects NaN sides
    if data.is_empty() || !(width > 0.0) || !(height > 0.0) {
        return Vec::new();
    }

    let total: u64 = data.iter().map(|d| d.count as u64).sum();
    if total == 0 {
        return Vec::new();
    }

    let segments = collapse(data, max_segments, total);
    let mut rects = Vec::with_capacity(segments.len());
    bisect(
        &segments,
        Bounds {
            x: 0.0,
            y: 0.0,
            width,
            height,
        },
        &mut rects,
    );

    tracing::debug!(
        segments = segments.len(),
        rects = rects.len(),
        width,
        height,
        "Computed treemap layout"
    );
    rects
}

/// Keep the first `max_segments` items and fold the rest into "Others".
fn collapse(data: &[CategoryDistribution], max_segments: usize, total: u64) -> Vec<Segment> {
    let kept = data.len().min(max_segments);
    let mut segments: Vec<Segment> = data[..kept]
        .iter()
        .enumerate()
        .map(|(i, d)| Segment {
            name: d.name.clone(),
            count: d.count,
            percentage: d.percentage,
            color_index: i,
        })
        .collect();

    if data.len() > kept {
        let other_count: u64 = data[kept..].iter().map(|d| d.count as u64).sum();
        segments.push(Segment {
            name: OTHERS_LABEL.to_string(),
            count: u32::try_from(other_count).unwrap_or(u32::MAX),
            percentage: percentage_of(other_count, total),
            color_index: kept,
        });
    }
    segments
}

fn bisect(items: &[Segment], bounds: Bounds, out: &mut Vec<TreemapRect>) {
    match items {
        [] => return,
        [only] => {
            out.push(TreemapRect {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
                name: only.name.clone(),
                count: only.count,
                percentage: only.percentage,
                color_index: only.color_index,
            });
            return;
        }
        _ => {}
    }

    let total: u64 = items.iter().map(|s| s.count as u64).sum();
    if total == 0 {
        return;
    }

    let split = balanced_split(items, total);
    let (left, right) = items.split_at(split);
    let left_total: u64 = left.iter().map(|s| s.count as u64).sum();
    let frac = left_total as f64 / total as f64;

    if bounds.width >= bounds.height {
        let left_width = bounds.width * frac;
        bisect(
            left,
            Bounds {
                width: left_width,
                ..bounds
            },
            out,
        );
        bisect(
            right,
            Bounds {
                x: bounds.x + left_width,
                width: bounds.width - left_width,
                ..bounds
            },
            out,
        );
    } else {
        let left_height = bounds.height * frac;
        bisect(
            left,
            Bounds {
                height: left_height,
                ..bounds
            },
            out,
        );
        bisect(
            right,
            Bounds {
                y: bounds.y + left_height,
                height: bounds.height - left_height,
                ..bounds
            },
            out,
        );
    }
}

/// Index `k` in `1..len` minimizing `|sum(..k) - sum(k..)|`; first minimum wins.
fn balanced_split(items: &[Segment], total: u64) -> usize {
    let mut best_split = 1;
    let mut best_diff = u64::MAX;
    let mut left_sum = 0u64;

    for (i, item) in items[..items.len() - 1].iter().enumerate() {
        left_sum += item.count as u64;
        let diff = left_sum.abs_diff(total - left_sum);
        if diff < best_diff {
            best_diff = diff;
            best_split = i + 1;
        }
    }
    best_split
}
