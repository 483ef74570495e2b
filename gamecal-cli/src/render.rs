//! Colored terminal rendering for reconciliation results.

use gamecal_core::diff::{CalendarDiff, DiffKind, EntryDiff};
use owo_colors::OwoColorize;

/// Threshold for compact view (show counts instead of individual entries)
const COMPACT_THRESHOLD: usize = 10;

/// Colorize text according to the diff kind
fn colorize(kind: DiffKind, text: &str) -> String {
    match kind {
        DiffKind::Add => text.green().to_string(),
        DiffKind::Update => text.yellow().to_string(),
        DiffKind::Unchanged => text.dimmed().to_string(),
    }
}

fn render_entry(diff: &EntryDiff) -> String {
    let symbol = colorize(diff.kind, &diff.kind.to_string());
    let date = match (diff.kind, diff.old_date) {
        (DiffKind::Update, Some(old)) => format!("{} → {}", old, diff.new_date),
        _ => diff.new_date.to_string(),
    };

    format!("{} {} {}", symbol, diff.summary, date.dimmed())
}

/// Render the changes of a run; compact counts when there are many,
/// one line per change otherwise.
pub fn render_diff(diff: &CalendarDiff, verbose: bool) -> String {
    let changes: Vec<&EntryDiff> = diff.changes().collect();

    if changes.is_empty() {
        return "No changes".dimmed().to_string();
    }

    if verbose || changes.len() <= COMPACT_THRESHOLD {
        return changes
            .iter()
            .map(|d| render_entry(d))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut lines = Vec::new();
    let added = diff.added();
    let updated = diff.updated();

    if added > 0 {
        let label = format!("({} new {})", added, pluralize("release", added));
        lines.push(format!("{} {}", "+".green(), label.green()));
    }
    if updated > 0 {
        let label = format!("({} changed {})", updated, pluralize("release", updated));
        lines.push(format!("{} {}", "~".yellow(), label.yellow()));
    }

    lines.join("\n")
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "release" => "releases",
            _ => word,
        }
    }
}
