//! Core types for gamecal.
//!
//! This crate provides everything gamecal-cli needs besides the network layer:
//! - `ReleaseRecord` and `ReleaseEntry` for raw and grouped release data
//! - `group` for collapsing per-platform release rows into calendar entries
//! - `diff` for reconciling a run against the previously published calendar
//! - `ics` for generating and parsing the calendar file
//! - `store` for reading and replacing the file on disk

pub mod diff;
pub mod entry;
pub mod error;
pub mod group;
pub mod ics;
pub mod record;
pub mod store;

pub use entry::ReleaseEntry;
pub use error::{GamecalError, GamecalResult};
pub use record::ReleaseRecord;
