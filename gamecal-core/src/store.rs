//! Reading and writing the calendar file.

use std::path::Path;

use crate::error::GamecalResult;
use crate::ics::{self, ParsedEvent};

/// Load the entries of a previously generated calendar.
///
/// A missing file is a first run, not an error.
pub fn load_previous(path: &Path) -> GamecalResult<Vec<ParsedEvent>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    Ok(ics::parse_calendar(&content))
}

/// Write the regenerated calendar, fully replacing the previous file.
pub fn write_calendar(path: &Path, content: &str) -> GamecalResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, content)?;
    Ok(())
}
