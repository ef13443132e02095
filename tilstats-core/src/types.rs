//! Core domain types for tilstats
//!
//! These types describe what the storage collaborator hands to the engine.
//! Everything derived from them lives in [`crate::analytics`].
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Entry** | One tracked note in the learning log |
//! | **Root** | Path prefix under which entries belong to the analyzed corpus (e.g. `til`) |
//! | **Canonical date** | Explicit front-matter date if present, else the creation day |
//! | **Category** | First path segment under the root |
//! | **Backlog** | Externally parsed checklist of planned topics, per category |

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::Result;

// ============================================
// Entry
// ============================================

/// One note as reported by the storage collaborator.
///
/// Timestamps travel as epoch milliseconds. An out-of-range value fails
/// deserialization, so every `Entry` in memory carries valid instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Slash-separated vault path, unique per entry
    pub path: String,
    /// File extension without the dot
    pub extension: String,
    /// Filesystem creation time
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Filesystem modification time
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub modified_at: DateTime<Utc>,
    /// Author-declared date, `YYYY-MM-DD` or `YYYY-MM-DDTHH:mm:ss`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_date: Option<String>,
    /// Author-declared tags; absent or null means none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Date-time layouts accepted for a zone-less explicit date.
const EXPLICIT_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

impl Entry {
    /// Last path segment.
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The day this entry is bucketed under.
    ///
    /// Uses the date part of `explicit_date` when present. Otherwise the
    /// creation instant is moved into `offset` and truncated to a day.
    /// A malformed explicit date yields `None`: the entry still counts
    /// toward totals but falls into no day bucket.
    pub fn canonical_date(&self, offset: &FixedOffset) -> Option<NaiveDate> {
        match &self.explicit_date {
            Some(raw) => date_part(raw),
            None => Some(self.created_at.with_timezone(offset).date_naive()),
        }
    }

    /// The explicit date as an instant, when it carries a time of day.
    ///
    /// Zone-less values are read as wall-clock time in `offset`.
    pub fn explicit_datetime(&self, offset: &FixedOffset) -> Option<DateTime<Utc>> {
        let raw = self.explicit_date.as_deref()?;
        if !raw.contains('T') {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        EXPLICIT_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .and_then(|naive| offset.from_local_datetime(&naive).single())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Tie-break instant for entries sharing a canonical date.
    pub fn recency_key(&self, offset: &FixedOffset) -> DateTime<Utc> {
        self.explicit_datetime(offset).unwrap_or(self.created_at)
    }
}

/// Leading `YYYY-MM-DD` of a date or date-time string.
pub fn date_part(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

// ============================================
// Backlog
// ============================================

/// Pre-aggregated checklist progress for one category's backlog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogProgressEntry {
    pub category: String,
    pub file_path: String,
    /// Checked items
    pub done: u32,
    /// All items, checked or not
    pub total: u32,
}

impl BacklogProgressEntry {
    /// Completion ratio in `[0, 1]`; zero when the backlog is empty.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64
        }
    }
}

/// An unchecked backlog item, as listed by the checklist collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogItem {
    pub display_name: String,
    pub path: String,
    pub category: String,
}

// ============================================
// Snapshot loading
// ============================================

/// Parse a JSON array of entries.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of entries from disk.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let content = std::fs::read_to_string(path)?;
    let entries = parse_entries(&content)?;
    tracing::debug!(path = %path.display(), count = entries.len(), "Loaded entry snapshot");
    Ok(entries)
}

/// Read a JSON array of backlog progress records from disk.
pub fn load_backlog(path: &Path) -> Result<Vec<BacklogProgressEntry>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<BacklogProgressEntry> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), count = records.len(), "Loaded backlog snapshot");
    Ok(records)
}
