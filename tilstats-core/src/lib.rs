//! # tilstats-core
//!
//! Analytics engine for a personal learning log.
//!
//! This library provides:
//! - Domain types for entries and backlog records
//! - The tracked-corpus filter
//! - Streak, heatmap, weekly trend, category share and treemap views
//! - A dashboard bundle and its plain-text rendering
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one way:
//! - **Input:** caller-supplied [`Entry`] snapshots (never mutated)
//! - **Corpus:** [`TrackedEntries`], filtered once per call
//! - **Views:** pure functions in [`analytics`], recomputed on every call
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use tilstats_core::analytics::{DashboardOptions, DashboardStats};
//! use tilstats_core::{format::format_dashboard_text, load_entries, TrackedEntries};
//!
//! let entries = load_entries("entries.json".as_ref()).expect("failed to load entries");
//! let corpus = TrackedEntries::new(&entries, "til");
//! let stats = DashboardStats::compute(
//!     &corpus,
//!     &[],
//!     Local::now().fixed_offset(),
//!     DashboardOptions::default(),
//! );
//! println!("{}", format_dashboard_text(&stats));
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use corpus::{EntryFilter, TrackedEntries};
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod logging;
pub mod types;
