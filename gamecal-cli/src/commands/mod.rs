pub mod status;
pub mod sync;

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use gamecal_core::diff::CalendarDiff;
use gamecal_core::{ReleaseEntry, group, store};

use crate::config::{Credentials, GlobalConfig};
use crate::igdb::IgdbClient;
use crate::tui::create_spinner;
use crate::window::FetchWindow;

/// Fetch, group and reconcile against the previous calendar at `output`.
///
/// Returns None when the API reports no releases at all, which is a clean
/// no-op rather than an error.
pub async fn fetch_diff(
    config: &GlobalConfig,
    credentials: Credentials,
    output: &Path,
) -> Result<Option<(Vec<ReleaseEntry>, CalendarDiff)>> {
    let client = IgdbClient::new(&config.api_url, credentials);
    let window = FetchWindow::rolling(config.days_past, config.days_future);

    let spinner = create_spinner("Fetching releases from IGDB".to_string());
    let records = client.fetch_release_dates(window, config.min_hypes).await;
    spinner.finish_and_clear();
    let records = records?;

    if records.is_empty() {
        return Ok(None);
    }

    let platform_ids: HashSet<u64> = records
        .iter()
        .flat_map(|r| r.platforms.iter().copied())
        .collect();
    let status_ids: HashSet<u64> = records.iter().filter_map(|r| r.status).collect();

    // Only look up names for ids the release rows actually reference
    let platform_names = client.fetch_platform_names(&platform_ids).await?;
    let status_names = client.fetch_status_names(&status_ids).await?;

    let entries = group::group_records(&records, &platform_names, &status_names);
    let previous = store::load_previous(output)?;
    let diff = CalendarDiff::compute(&entries, &previous);

    Ok(Some((entries, diff)))
}
