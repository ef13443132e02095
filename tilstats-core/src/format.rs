//! Plain-text rendering of the dashboard bundle.
//!
//! Pure presentation: every number shown here was computed in
//! [`crate::analytics`]. Sections without content are omitted.

use crate::analytics::backlog::format_progress_bar;
use crate::analytics::heatmap::HeatmapCell;
use crate::analytics::treemap::TreemapRect;
use crate::analytics::DashboardStats;
use crate::types::Entry;

/// Sparkline glyphs from quietest to busiest week.
const SPARKS: [&str; 5] = ["▁", "▂", "▃", "▅", "▇"];

/// Render `stats` as a markdown-flavored report.
pub fn format_dashboard_text(stats: &DashboardStats) -> String {
    let mut lines: Vec<String> = Vec::new();

    let s = &stats.summary;
    lines.push("## Learning Dashboard\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Total entries | {} |", s.total_entries));
    lines.push(format!("| Categories | {} |", s.category_count));
    lines.push(format!("| This week | {} |", s.this_week_count));
    lines.push(format!("| Streak | {} |", day_count(s.streak)));

    let cells = &stats.heatmap.cells;
    if !cells.is_empty() {
        lines.push(format!("\n### Activity ({} days)\n", cells.len()));
        lines.push(sparkline(cells));
    }

    if !stats.categories.is_empty() {
        lines.push("\n### Categories\n".to_string());
        lines.push("| Category | Count | Last modified |".to_string());
        lines.push("|----------|-------|---------------|".to_string());
        for cat in &stats.categories {
            let latest = cat
                .files
                .first()
                .map(|f| f.modified_at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            lines.push(format!("| {} | {} | {} |", cat.name, cat.count, latest));
        }
    }

    let b = &stats.backlog;
    if b.total_items > 0 {
        lines.push("\n### Backlog Progress\n".to_string());
        lines.push(format!(
            "Overall: {}/{} ({}%) {}\n",
            b.total_done,
            b.total_items,
            b.percentage(),
            format_progress_bar(b.total_done, b.total_items)
        ));
        lines.push("| Category | Progress | Done | Bar |".to_string());
        lines.push("|----------|----------|------|-----|".to_string());
        for c in &b.categories {
            lines.push(format!(
                "| {} | {}% | {}/{} | {} |",
                c.category,
                (c.ratio() * 100.0).round() as u32,
                c.done,
                c.total,
                format_progress_bar(c.done.into(), c.total.into())
            ));
        }
    }

    lines.join("\n")
}

fn day_count(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// One glyph per 7-cell week; the last week may be partial.
pub fn sparkline(cells: &[HeatmapCell]) -> String {
    let weeks: Vec<u32> = cells
        .chunks(7)
        .map(|week| week.iter().map(|c| c.count).sum())
        .collect();
    let max_week = weeks.iter().copied().max().unwrap_or(0).max(1);

    weeks
        .iter()
        .map(|&w| {
            let ratio = (w as f64 / max_week as f64).min(1.0);
            SPARKS[((ratio * 4.0).floor() as usize).min(4)]
        })
        .collect()
}

/// One line per treemap cell.
pub fn format_treemap_text(rects: &[TreemapRect]) -> String {
    rects
        .iter()
        .map(|r| {
            format!(
                "{} ({}, {}%): x={:.1} y={:.1} w={:.1} h={:.1} color={}",
                r.name, r.count, r.percentage, r.x, r.y, r.width, r.height, r.color_index
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bullet list of entry paths.
pub fn format_recent_text(entries: &[&Entry]) -> String {
    entries
        .iter()
        .map(|e| format!("- {}", e.path))
        .collect::<Vec<_>>()
        .join("\n")
}
