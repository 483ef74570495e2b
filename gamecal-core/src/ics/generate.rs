//! ICS file generation.

use chrono::{Duration, NaiveDate};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::entry::ReleaseEntry;

/// Add an all-day date property (DTSTART/DTEND with VALUE=DATE).
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Render the complete entry set as one VCALENDAR.
///
/// Every event is all-day: DTSTART on the release date, DTEND the following
/// day. DTSTAMP is pinned to the release date rather than the wall clock so
/// identical input always reproduces identical bytes.
pub fn generate_calendar(entries: &[ReleaseEntry], calendar_name: &str) -> String {
    let mut cal = Calendar::new();

    // X-WR-CALNAME - human-readable calendar name (de facto standard)
    cal.append_property(Property::new("X-WR-CALNAME", calendar_name));

    for entry in entries {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&entry.uid());
        ics_event.summary(&entry.summary());
        ics_event.description(&entry.url());

        // DTSTAMP - required by RFC 5545
        let dtstamp = entry.release_date.format("%Y%m%dT000000Z").to_string();
        ics_event.add_property("DTSTAMP", &dtstamp);

        add_date_property(&mut ics_event, "DTSTART", entry.release_date);
        add_date_property(&mut ics_event, "DTEND", entry.release_date + Duration::days(1));

        cal.push(ics_event.done());
    }

    let cal = cal.done();
    cal.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::parse_calendar;

    fn make_entry(title: &str, day: u32) -> ReleaseEntry {
        ReleaseEntry {
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(2026, 5, day).unwrap(),
            status: "Released".to_string(),
            platforms: vec!["Mac".to_string(), "PC".to_string()],
            slug: slug::slugify(title),
        }
    }

    #[test]
    fn test_all_day_events_have_value_date() {
        let ics = generate_calendar(&[make_entry("Game A", 1)], "Game Releases");

        assert!(
            ics.contains("DTSTART;VALUE=DATE:20260501"),
            "DTSTART should be an all-day date. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;VALUE=DATE:20260502"),
            "DTEND should be the following day. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_event_carries_uid_and_deep_link() {
        let ics = generate_calendar(&[make_entry("Game A", 1)], "Game Releases");

        assert!(ics.contains("game-a-released-20260501@gamecal"), "missing UID");
        assert!(
            ics.contains("https://www.igdb.com/games/game-a"),
            "missing deep link. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_calendar_name_property() {
        let ics = generate_calendar(&[], "Game Releases");

        assert!(ics.contains("X-WR-CALNAME:Game Releases"));
    }

    #[test]
    fn test_output_is_byte_identical_across_runs() {
        let entries = vec![make_entry("Game A", 1), make_entry("Game B", 8)];

        let first = generate_calendar(&entries, "Game Releases");
        let second = generate_calendar(&entries, "Game Releases");

        assert_eq!(first, second, "same input must produce the same bytes");
    }

    #[test]
    fn test_generated_calendar_parses_back() {
        let entries = vec![make_entry("Game A", 1), make_entry("Game B", 8)];

        let ics = generate_calendar(&entries, "Game Releases");
        let parsed = parse_calendar(&ics);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].summary, "Game A (Released) [Mac, PC]");
        assert_eq!(parsed[0].date, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        assert_eq!(parsed[1].summary, "Game B (Released) [Mac, PC]");
    }
}
