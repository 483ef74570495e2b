//! Grouping of raw release rows into calendar entries.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate};

use crate::entry::{NO_PLATFORM_LABEL, ReleaseEntry, UNKNOWN_LABEL};
use crate::record::{NameMap, ReleaseRecord};

#[derive(Default)]
struct Grouped {
    platforms: BTreeSet<String>,
    slug: Option<String>,
}

/// Collapse raw per-platform release rows into one entry per
/// (title, release date, status).
///
/// Rows missing a title or date are dropped. Platform and status ids absent
/// from the lookup tables degrade to a placeholder label instead of failing.
/// Output order follows the key, so identical input always produces the
/// same entry sequence.
pub fn group_records(
    records: &[ReleaseRecord],
    platform_names: &NameMap,
    status_names: &NameMap,
) -> Vec<ReleaseEntry> {
    let mut grouped: BTreeMap<(String, NaiveDate, String), Grouped> = BTreeMap::new();

    for record in records {
        let (Some(title), Some(timestamp)) = (&record.title, record.timestamp) else {
            continue;
        };
        let Some(date) = DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive()) else {
            continue;
        };

        let status = record
            .status
            .and_then(|id| status_names.get(&id).cloned())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        let group = grouped.entry((title.clone(), date, status)).or_default();

        for platform_id in &record.platforms {
            let name = platform_names
                .get(platform_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            group.platforms.insert(name);
        }

        // Last writer wins; the slug is constant per title in practice
        if let Some(slug) = &record.slug {
            group.slug = Some(slug.clone());
        }
    }

    grouped
        .into_iter()
        .map(|((title, release_date, status), group)| {
            let platforms = if group.platforms.is_empty() {
                vec![NO_PLATFORM_LABEL.to_string()]
            } else {
                group.platforms.into_iter().collect()
            };
            let slug = group.slug.unwrap_or_else(|| slug::slugify(&title));

            ReleaseEntry {
                title,
                release_date,
                status,
                platforms,
                slug,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, timestamp: i64, platforms: &[u64], status: Option<u64>) -> ReleaseRecord {
        ReleaseRecord {
            title: Some(title.to_string()),
            slug: Some(slug::slugify(title)),
            timestamp: Some(timestamp),
            platforms: platforms.to_vec(),
            status,
        }
    }

    fn name_map(pairs: &[(u64, &str)]) -> NameMap {
        pairs.iter().map(|(id, name)| (*id, name.to_string())).collect()
    }

    // 2026-05-01T00:00:00Z
    const MAY_FIRST: i64 = 1777593600;

    #[test]
    fn test_groups_platforms_under_one_entry() {
        let records = vec![record("Game A", MAY_FIRST, &[2, 3], Some(1))];
        let platforms = name_map(&[(2, "PC"), (3, "Mac")]);
        let statuses = name_map(&[(1, "Released")]);

        let entries = group_records(&records, &platforms, &statuses);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].summary(), "Game A (Released) [Mac, PC]");
        assert_eq!(
            entries[0].release_date,
            NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_merges_rows_sharing_a_key() {
        let records = vec![
            record("Game A", MAY_FIRST, &[2], Some(1)),
            record("Game A", MAY_FIRST, &[3], Some(1)),
            record("Game A", MAY_FIRST, &[2], Some(1)), // duplicate platform
        ];
        let platforms = name_map(&[(2, "PC"), (3, "Mac")]);
        let statuses = name_map(&[(1, "Released")]);

        let entries = group_records(&records, &platforms, &statuses);

        assert_eq!(entries.len(), 1, "rows with the same key must merge");
        assert_eq!(
            entries[0].platforms,
            vec!["Mac".to_string(), "PC".to_string()],
            "platforms must be deduplicated and sorted"
        );
    }

    #[test]
    fn test_different_status_means_different_entry() {
        let records = vec![
            record("Game A", MAY_FIRST, &[2], Some(1)),
            record("Game A", MAY_FIRST, &[2], Some(4)),
        ];
        let platforms = name_map(&[(2, "PC")]);
        let statuses = name_map(&[(1, "Released"), (4, "Early Access")]);

        let entries = group_records(&records, &platforms, &statuses);

        assert_eq!(entries.len(), 2, "status is part of the entry key");
    }

    #[test]
    fn test_unknown_ids_get_placeholder_labels() {
        let records = vec![record("Game A", MAY_FIRST, &[99], Some(42))];

        let entries = group_records(&records, &NameMap::new(), &NameMap::new());

        assert_eq!(entries[0].summary(), "Game A (Unknown) [Unknown]");
    }

    #[test]
    fn test_no_platforms_renders_undefined() {
        let records = vec![record("Game A", MAY_FIRST, &[], Some(1))];
        let statuses = name_map(&[(1, "Released")]);

        let entries = group_records(&records, &NameMap::new(), &statuses);

        assert_eq!(entries[0].platforms, vec!["Undefined".to_string()]);
    }

    #[test]
    fn test_skips_rows_without_title_or_date() {
        let mut untitled = record("Game A", MAY_FIRST, &[2], Some(1));
        untitled.title = None;
        let mut undated = record("Game B", MAY_FIRST, &[2], Some(1));
        undated.timestamp = None;

        let entries = group_records(&[untitled, undated], &NameMap::new(), &NameMap::new());

        assert!(entries.is_empty(), "rows without title or date are dropped");
    }

    #[test]
    fn test_missing_slug_falls_back_to_slugified_title() {
        let mut rec = record("Game A: Remastered!", MAY_FIRST, &[], None);
        rec.slug = None;

        let entries = group_records(&[rec], &NameMap::new(), &NameMap::new());

        assert_eq!(entries[0].slug, "game-a-remastered");
    }

    #[test]
    fn test_output_order_is_stable() {
        let records = vec![
            record("Zebra Game", MAY_FIRST, &[2], Some(1)),
            record("Alpha Game", MAY_FIRST, &[2], Some(1)),
        ];
        let platforms = name_map(&[(2, "PC")]);
        let statuses = name_map(&[(1, "Released")]);

        let first = group_records(&records, &platforms, &statuses);
        let second = group_records(&records, &platforms, &statuses);

        assert_eq!(first, second);
        assert_eq!(first[0].title, "Alpha Game", "entries come out key-sorted");
    }
}
