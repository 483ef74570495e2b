//! Reconciliation against the previously published calendar.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use crate::entry::ReleaseEntry;
use crate::ics::ParsedEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Add,
    Update,
    Unchanged,
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffKind::Add => write!(f, "+"),
            DiffKind::Update => write!(f, "~"),
            DiffKind::Unchanged => write!(f, "="),
        }
    }
}

/// One entry's classification against the previous run.
#[derive(Debug, Clone)]
pub struct EntryDiff {
    pub kind: DiffKind,
    pub summary: String,
    pub new_date: NaiveDate,
    /// Date the entry carried in the previous calendar, when it was present
    pub old_date: Option<NaiveDate>,
}

/// The reconciliation result for a whole run.
pub struct CalendarDiff {
    pub diffs: Vec<EntryDiff>,
}

impl CalendarDiff {
    /// Classify each new entry against the previous calendar.
    ///
    /// Matching is by the exact rendered summary line: an entry whose summary
    /// is absent from the previous file is `Add`, present with a differing
    /// date is `Update` (counted once, never also as `Add`), present with the
    /// same date is `Unchanged`. A changed platform set or status alters the
    /// summary itself and therefore reads as a new entry.
    pub fn compute(entries: &[ReleaseEntry], previous: &[ParsedEvent]) -> Self {
        let old_dates: HashMap<&str, NaiveDate> = previous
            .iter()
            .map(|event| (event.summary.as_str(), event.date))
            .collect();

        let diffs = entries
            .iter()
            .map(|entry| {
                let summary = entry.summary();
                let old_date = old_dates.get(summary.as_str()).copied();
                let kind = match old_date {
                    None => DiffKind::Add,
                    Some(date) if date != entry.release_date => DiffKind::Update,
                    Some(_) => DiffKind::Unchanged,
                };

                EntryDiff {
                    kind,
                    summary,
                    new_date: entry.release_date,
                    old_date,
                }
            })
            .collect();

        CalendarDiff { diffs }
    }

    pub fn added(&self) -> usize {
        self.count(DiffKind::Add)
    }

    pub fn updated(&self) -> usize {
        self.count(DiffKind::Update)
    }

    pub fn is_unchanged(&self) -> bool {
        self.added() == 0 && self.updated() == 0
    }

    /// Entries that differ from the previous run, in output order.
    pub fn changes(&self) -> impl Iterator<Item = &EntryDiff> {
        self.diffs.iter().filter(|d| d.kind != DiffKind::Unchanged)
    }

    fn count(&self, kind: DiffKind) -> usize {
        self.diffs.iter().filter(|d| d.kind == kind).count()
    }
}
