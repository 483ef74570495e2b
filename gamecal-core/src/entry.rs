//! Calendar entry model.

use std::fmt;

use chrono::NaiveDate;

/// Label used when a platform or status id has no name in the lookup table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Label used when a release row references no platform at all.
pub const NO_PLATFORM_LABEL: &str = "Undefined";

/// One deduplicated calendar entry.
///
/// Uniquely keyed by (title, release date, status) within a run. Platform
/// names from all raw records sharing a key are merged into one list,
/// deduplicated and sorted so the rendered summary is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub title: String,
    pub release_date: NaiveDate,
    pub status: String,
    pub platforms: Vec<String>,
    pub slug: String,
}

impl ReleaseEntry {
    /// The display line used as the event summary and as the reconciliation
    /// key, e.g. `Game A (Released) [Mac, PC]`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) [{}]",
            self.title,
            self.status,
            self.platforms.join(", ")
        )
    }

    /// Stable event UID derived from (slug, status, date).
    ///
    /// Deterministic so re-running over identical input reproduces the
    /// calendar file byte for byte.
    pub fn uid(&self) -> String {
        format!(
            "{}-{}-{}@gamecal",
            self.slug,
            slug::slugify(&self.status),
            self.release_date.format("%Y%m%d")
        )
    }

    /// Deep link into the catalog, used as the event description.
    pub fn url(&self) -> String {
        format!("https://www.igdb.com/games/{}", self.slug)
    }
}

impl fmt::Display for ReleaseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
