//! The tracked corpus: entries that count toward analytics.
//!
//! Every analytics function takes a [`TrackedEntries`], so the filter runs
//! exactly once per invocation and no view can drift from the others.

use crate::types::Entry;

/// Rules deciding whether an entry belongs to the tracked corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilter {
    /// Tracked text extension, without the dot
    pub extension: String,
    /// Filename reserved for the backlog tracker
    pub backlog_filename: String,
    /// Label every tracked entry must carry
    pub tracking_label: String,
    /// Label marking index / table-of-contents notes
    pub index_label: String,
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            backlog_filename: "backlog.md".to_string(),
            tracking_label: "til".to_string(),
            index_label: "moc".to_string(),
        }
    }
}

impl EntryFilter {
    /// Whether `entry` is tracked under `root` (already stripped of trailing slashes).
    pub fn accepts(&self, entry: &Entry, root: &str) -> bool {
        let under_root = entry
            .path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'));

        under_root
            && entry.extension == self.extension
            && entry.filename() != self.backlog_filename
            && entry.has_label(&self.tracking_label)
            && !entry.has_label(&self.index_label)
    }
}

/// Filtered view over a caller-owned entry list.
#[derive(Debug, Clone)]
pub struct TrackedEntries<'a> {
    root: &'a str,
    entries: Vec<&'a Entry>,
}

impl<'a> TrackedEntries<'a> {
    /// Filter with the default rules.
    pub fn new(entries: &'a [Entry], root: &'a str) -> Self {
        Self::with_filter(entries, root, &EntryFilter::default())
    }

    pub fn with_filter(entries: &'a [Entry], root: &'a str, filter: &EntryFilter) -> Self {
        let root = root.trim_end_matches('/');
        let tracked: Vec<&Entry> = entries.iter().filter(|e| filter.accepts(e, root)).collect();

        tracing::debug!(
            root,
            input = entries.len(),
            tracked = tracked.len(),
            "Filtered tracked entries"
        );

        Self {
            root,
            entries: tracked,
        }
    }

    /// Tracked root, without trailing slash.
    pub fn root(&self) -> &'a str {
        self.root
    }

    pub fn entries(&self) -> &[&'a Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
