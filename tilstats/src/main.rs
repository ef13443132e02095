//! tilstats - Learning-log dashboard report
//!
//! Reads an entry snapshot (and optionally a backlog snapshot) and prints
//! the dashboard as a markdown report or a JSON bundle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use clap::Parser;
use tilstats_core::analytics::{
    compute_treemap_layout, select_recent, DashboardOptions, DashboardStats, TreemapRect,
};
use tilstats_core::format::{format_dashboard_text, format_recent_text, format_treemap_text};
use tilstats_core::{load_backlog, load_entries, Config, Entry, TrackedEntries};

#[derive(Parser, Debug)]
#[command(name = "tilstats")]
#[command(about = "Learning-log dashboard: streak, heatmap, trends and categories")]
#[command(version)]
struct Args {
    /// JSON array of entries
    #[arg(long)]
    entries: PathBuf,

    /// JSON array of backlog progress records
    #[arg(long)]
    backlog: Option<PathBuf>,

    /// Tracked root folder (default: from config)
    #[arg(long)]
    root: Option<String>,

    /// Reference time as RFC 3339 (default: local clock)
    #[arg(long)]
    now: Option<String>,

    /// Number of weekly trend buckets (default: from config)
    #[arg(long)]
    weeks: Option<usize>,

    /// Export format (text = markdown report, json = JSON)
    #[arg(long)]
    export: Option<String>,

    /// Include a treemap layout, optionally sized as WIDTHxHEIGHT
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    treemap: Option<String>,

    /// List the most recent entries, optionally how many
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    recent: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = tilstats_core::logging::init(&config.logging).ok();

    let now = match &args.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --now value {raw:?}, expected RFC 3339"))?,
        None => Local::now().fixed_offset(),
    };

    let entries = load_entries(&args.entries)
        .with_context(|| format!("failed to read entries from {}", args.entries.display()))?;
    let backlog = match &args.backlog {
        Some(path) => load_backlog(path)
            .with_context(|| format!("failed to read backlog from {}", path.display()))?,
        None => Vec::new(),
    };

    let root = args.root.as_deref().unwrap_or(&config.dashboard.root);
    let filter = config.filter.to_filter();
    let corpus = TrackedEntries::with_filter(&entries, root, &filter);

    let options = DashboardOptions {
        week_count: args.weeks.unwrap_or(config.dashboard.week_count),
    };
    let stats = DashboardStats::compute(&corpus, &backlog, now, options);

    let treemap = match args.treemap.as_deref() {
        Some(size) => {
            let (width, height) = if size.is_empty() {
                (config.treemap.width, config.treemap.height)
            } else {
                parse_size(size)?
            };
            Some(compute_treemap_layout(
                &stats.category_distribution,
                width,
                height,
                config.treemap.max_segments,
            ))
        }
        None => None,
    };

    let recent = match args.recent.as_deref() {
        Some(count) => {
            let count = if count.is_empty() {
                config.dashboard.recent_count
            } else {
                count
                    .parse()
                    .with_context(|| format!("invalid --recent value {count:?}"))?
            };
            Some(select_recent(&corpus, count, now.offset()))
        }
        None => None,
    };

    match args.export.as_deref() {
        Some("json") => print_json(&stats, treemap.as_deref(), recent.as_deref(), now)?,
        Some("text") | None => print_text(&stats, treemap.as_deref(), recent.as_deref()),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'text' or 'json'", other),
    }

    Ok(())
}

/// Parse `WIDTHxHEIGHT`, e.g. `400x160`.
fn parse_size(raw: &str) -> Result<(f64, f64)> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .with_context(|| format!("invalid --treemap size {raw:?}, expected WIDTHxHEIGHT"))?;
    let width: f64 = w
        .trim()
        .parse()
        .with_context(|| format!("invalid treemap width {w:?}"))?;
    let height: f64 = h
        .trim()
        .parse()
        .with_context(|| format!("invalid treemap height {h:?}"))?;
    Ok((width, height))
}

fn print_text(
    stats: &DashboardStats,
    treemap: Option<&[TreemapRect]>,
    recent: Option<&[&Entry]>,
) {
    println!("{}", format_dashboard_text(stats));

    if let Some(rects) = treemap {
        println!();
        println!("### Treemap");
        println!();
        println!("{}", format_treemap_text(rects));
    }

    if let Some(entries) = recent {
        println!();
        println!("### Recent");
        println!();
        println!("{}", format_recent_text(entries));
    }
}

fn print_json(
    stats: &DashboardStats,
    treemap: Option<&[TreemapRect]>,
    recent: Option<&[&Entry]>,
    now: DateTime<FixedOffset>,
) -> Result<()> {
    let mut json = serde_json::to_value(stats)?;
    json["generatedAt"] = serde_json::json!(now.to_rfc3339());
    if let Some(rects) = treemap {
        json["treemap"] = serde_json::to_value(rects)?;
    }
    if let Some(entries) = recent {
        json["recent"] = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "path": e.path,
                    "filename": e.filename(),
                    "canonicalDate": e.canonical_date(now.offset()),
                })
            })
            .collect();
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
