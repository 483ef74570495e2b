//! Raw release data as returned by the catalog API.

use std::collections::HashMap;

/// One release row from the catalog, before grouping.
///
/// A single game usually produces several of these, one per platform.
/// Fields the API may omit are optional; rows without a title or date are
/// dropped during grouping.
#[derive(Debug, Clone, Default)]
pub struct ReleaseRecord {
    pub title: Option<String>,
    pub slug: Option<String>,
    /// Release date as a unix timestamp
    pub timestamp: Option<i64>,
    /// Platform ids referenced by this row
    pub platforms: Vec<u64>,
    /// Release status id (e.g. full release, early access)
    pub status: Option<u64>,
}

/// id → name lookup table fetched alongside the release rows.
pub type NameMap = HashMap<u64, String>;
