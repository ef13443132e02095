//! Recent-entry selection and random review picks.

use chrono::FixedOffset;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::category::category_of;
use crate::corpus::TrackedEntries;
use crate::types::{BacklogItem, Entry};

/// The `count` most recent tracked entries.
///
/// Ordered by canonical date, newest first. Entries sharing a date are
/// ordered by their explicit date-time when they carry one, otherwise by
/// creation time. Entries without a readable date come last.
pub fn select_recent<'a>(
    corpus: &TrackedEntries<'a>,
    count: usize,
    offset: &FixedOffset,
) -> Vec<&'a Entry> {
    let mut keyed: Vec<_> = corpus
        .iter()
        .map(|e| ((e.canonical_date(offset), e.recency_key(offset)), e))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    keyed.into_iter().take(count).map(|(_, e)| e).collect()
}

/// A tracked entry suggested for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub path: String,
    pub filename: String,
    pub category: String,
}

/// One written entry to revisit and one open backlog item to tackle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<ReviewEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlog: Option<BacklogItem>,
}

/// Pick one tracked entry and one incomplete backlog item uniformly at random.
///
/// Either side is `None` when its pool is empty.
pub fn pick_review_items<R: Rng + ?Sized>(
    corpus: &TrackedEntries<'_>,
    incomplete_backlog: &[BacklogItem],
    rng: &mut R,
) -> ReviewPick {
    let entry = corpus.entries().choose(rng).map(|e| ReviewEntry {
        path: e.path.clone(),
        filename: e.filename().to_string(),
        category: category_of(&e.path, corpus.root()).to_string(),
    });
    let backlog = incomplete_backlog.choose(rng).cloned();

    ReviewPick { entry, backlog }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn entry(path: &str, explicit: Option<&str>, labels: &[&str]) -> Entry {
        let ts: DateTime<Utc> = "2026-02-21T12:00:00Z".parse().unwrap();
        Entry {
            path: path.to_string(),
            extension: "md".to_string(),
            created_at: ts,
            modified_at: ts,
            explicit_date: explicit.map(str::to_string),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn recent_paths(entries: &[Entry], count: usize) -> Vec<String> {
        select_recent(&TrackedEntries::new(entries, "til"), count, &utc())
            .into_iter()
            .map(|e| e.path.clone())
            .collect()
    }

    #[test]
    fn test_recent_empty() {
        assert!(recent_paths(&[], 5).is_empty());
    }

    #[test]
    fn test_recent_by_explicit_date() {
        let entries = vec![
            entry("til/ts/old.md", Some("2026-02-10"), &["til"]),
            entry("til/ts/mid.md", Some("2026-02-15"), &["til"]),
            entry("til/ts/new.md", Some("2026-02-21"), &["til"]),
        ];
        assert_eq!(recent_paths(&entries, 2), vec!["til/ts/new.md", "til/ts/mid.md"]);
        assert_eq!(recent_paths(&entries, 10).len(), 3);
    }

    #[test]
    fn test_recent_same_day_uses_time_of_day() {
        let entries = vec![
            entry("til/ts/morning.md", Some("2026-02-21T09:00:00"), &["til"]),
            entry("til/ts/evening.md", Some("2026-02-21T18:30:00"), &["til"]),
            entry("til/ts/afternoon.md", Some("2026-02-21T14:00:00"), &["til"]),
        ];
        assert_eq!(
            recent_paths(&entries, 3),
            vec!["til/ts/evening.md", "til/ts/afternoon.md", "til/ts/morning.md"]
        );
    }

    #[test]
    fn test_recent_mixed_date_and_datetime() {
        // Date-only entries fall back to creation time (12:00Z)
        let entries = vec![
            entry("til/ts/old.md", Some("2026-02-20"), &["til"]),
            entry("til/ts/new-time.md", Some("2026-02-21T14:00:00"), &["til"]),
            entry("til/ts/new-date.md", Some("2026-02-21"), &["til"]),
        ];
        assert_eq!(
            recent_paths(&entries, 3),
            vec!["til/ts/new-time.md", "til/ts/new-date.md", "til/ts/old.md"]
        );
    }

    #[test]
    fn test_recent_excludes_untracked() {
        let entries = vec![
            entry("til/ts/a.md", None, &["til"]),
            entry("til/ts/backlog.md", None, &["til"]),
            entry("til/TIL MOC.md", None, &["moc", "til"]),
            entry("notes/random.md", None, &["til"]),
        ];
        assert_eq!(recent_paths(&entries, 5), vec!["til/ts/a.md"]);
    }

    #[test]
    fn test_recent_unreadable_dates_last() {
        let entries = vec![
            entry("til/ts/broken.md", Some("someday"), &["til"]),
            entry("til/ts/ok.md", Some("2020-01-01"), &["til"]),
        ];
        assert_eq!(recent_paths(&entries, 2), vec!["til/ts/ok.md", "til/ts/broken.md"]);
    }

    fn backlog_items() -> Vec<BacklogItem> {
        vec![
            BacklogItem {
                display_name: "Generics".to_string(),
                path: "til/ts/generics.md".to_string(),
                category: "ts".to_string(),
            },
            BacklogItem {
                display_name: "Hooks".to_string(),
                path: "til/react/hooks.md".to_string(),
                category: "react".to_string(),
            },
        ]
    }

    #[test]
    fn test_pick_empty() {
        let corpus = TrackedEntries::new(&[], "til");
        let pick = pick_review_items(&corpus, &[], &mut StepRng::new(0, 0));
        assert_eq!(pick, ReviewPick::default());
    }

    #[test]
    fn test_pick_first_with_zero_rng() {
        let entries = vec![
            entry("til/ts/a.md", None, &["til"]),
            entry("til/react/b.md", None, &["til"]),
        ];
        let corpus = TrackedEntries::new(&entries, "til");
        let pick = pick_review_items(&corpus, &backlog_items(), &mut StepRng::new(0, 0));

        assert_eq!(
            pick.entry,
            Some(ReviewEntry {
                path: "til/ts/a.md".to_string(),
                filename: "a.md".to_string(),
                category: "ts".to_string(),
            })
        );
        assert_eq!(pick.backlog.unwrap().display_name, "Generics");
    }

    #[test]
    fn test_pick_is_deterministic_for_seed() {
        let entries: Vec<Entry> = (0..20)
            .map(|i| entry(&format!("til/c{}/e{i}.md", i % 3), None, &["til"]))
            .collect();
        let corpus = TrackedEntries::new(&entries, "til");

        let first = pick_review_items(&corpus, &backlog_items(), &mut StdRng::seed_from_u64(7));
        let second = pick_review_items(&corpus, &backlog_items(), &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);

        let picked = first.entry.unwrap();
        assert!(entries.iter().any(|e| e.path == picked.path));
        assert!(backlog_items().contains(&first.backlog.unwrap()));
    }

    #[test]
    fn test_pick_skips_untracked() {
        let entries = vec![
            entry("til/ts/backlog.md", None, &["til"]),
            entry("til/ts/moc.md", None, &["moc", "til"]),
            entry("til/ts/real.md", None, &["til"]),
            entry("notes/random.md", None, &["til"]),
        ];
        let corpus = TrackedEntries::new(&entries, "til");
        let pick = pick_review_items(&corpus, &[], &mut StepRng::new(0, 0));
        assert_eq!(pick.entry.unwrap().path, "til/ts/real.md");
        assert!(pick.backlog.is_none());
    }
}
