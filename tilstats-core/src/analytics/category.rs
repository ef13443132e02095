//! Category extraction from entry paths.

use std::collections::HashMap;

use crate::corpus::TrackedEntries;
use crate::types::Entry;

/// Label for entries sitting directly under the root.
pub const UNCATEGORIZED: &str = "(uncategorized)";

/// Category of `path` under `root`: the first segment below the root.
///
/// `til/rust/borrowck.md` is `rust`; `til/standalone.md` has no
/// sub-folder and is [`UNCATEGORIZED`].
pub fn category_of<'p>(path: &'p str, root: &str) -> &'p str {
    let root = root.trim_end_matches('/');
    let relative = path
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path);

    let mut segments = relative.split('/');
    match (segments.next(), segments.next()) {
        (Some(first), Some(_)) => first,
        _ => UNCATEGORIZED,
    }
}

/// Tracked entries grouped by category, in first-seen order.
pub fn group_by_category<'a>(corpus: &TrackedEntries<'a>) -> Vec<(&'a str, Vec<&'a Entry>)> {
    let mut groups: Vec<(&'a str, Vec<&'a Entry>)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for entry in corpus.iter() {
        let category = category_of(&entry.path, corpus.root());
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push((category, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(entry);
    }
    groups
}
