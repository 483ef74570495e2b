//! ICS file parsing.

use chrono::NaiveDate;

/// A minimal view of one VEVENT from a previous run: just what
/// reconciliation needs. The summary line is the matching key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub summary: String,
    pub date: NaiveDate,
}

#[derive(Default)]
struct PartialEvent {
    summary: Option<String>,
    date: Option<NaiveDate>,
}

impl PartialEvent {
    fn finish(self) -> Option<ParsedEvent> {
        Some(ParsedEvent {
            summary: self.summary?,
            date: self.date?,
        })
    }
}

/// Parse every VEVENT out of a calendar file.
///
/// Events missing a summary or a parsable DTSTART are skipped rather than
/// failing the run.
pub fn parse_calendar(content: &str) -> Vec<ParsedEvent> {
    let mut events = Vec::new();
    let mut current: Option<PartialEvent> = None;
    let mut current_line = String::new();

    for line in content.lines() {
        // Handle line folding (RFC 5545: continuation lines start with a
        // single space or tab); only the first character is the indicator
        if line.starts_with(' ') || line.starts_with('\t') {
            current_line.push_str(&line[1..]);
            continue;
        }

        process_line(&current_line, &mut current, &mut events);
        current_line = line.to_string();
    }
    process_line(&current_line, &mut current, &mut events);

    events
}

fn process_line(line: &str, current: &mut Option<PartialEvent>, events: &mut Vec<ParsedEvent>) {
    if line.is_empty() {
        return;
    }

    if line == "BEGIN:VEVENT" {
        *current = Some(PartialEvent::default());
        return;
    }

    if line == "END:VEVENT" {
        if let Some(partial) = current.take()
            && let Some(event) = partial.finish()
        {
            events.push(event);
        }
        return;
    }

    let Some(partial) = current.as_mut() else {
        return;
    };

    if let Some((key, params, value)) = parse_property_line(line) {
        match key.as_str() {
            "SUMMARY" => partial.summary = Some(value),
            "DTSTART" => partial.date = parse_date(&value, &params),
            _ => {}
        }
    }
}

/// Parse a single ICS property line into key, parameters, and value
fn parse_property_line(line: &str) -> Option<(String, String, String)> {
    let colon_pos = line.find(':')?;
    let key_part = &line[..colon_pos];
    let value = &line[colon_pos + 1..];

    let mut parts = key_part.splitn(2, ';');
    let key = parts.next()?.to_string();
    let params = parts.next().unwrap_or("").to_string();

    Some((key, params, unescape_ics_value(value)))
}

/// Unescape ICS property values per RFC 5545
/// Reverses: \, → , and \; → ; and \\ → \ and \n → newline
fn unescape_ics_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(',') => {
                    result.push(',');
                    chars.next();
                }
                Some(';') => {
                    result.push(';');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('n') | Some('N') => {
                    result.push('\n');
                    chars.next();
                }
                _ => result.push(c), // Keep backslash if not a recognized escape
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Parse a DTSTART value down to its calendar date.
///
/// Accepts date values (VALUE=DATE or a bare YYYYMMDD) as well as datetime
/// values, whose time-of-day is irrelevant here.
fn parse_date(value: &str, params: &str) -> Option<NaiveDate> {
    // Date values are YYYYMMDD; datetime values start with the same eight
    // digits followed by 'T', so the date part parses either way
    let is_date = params.contains("VALUE=DATE") || value.len() == 8;
    if !is_date && value.get(8..9) != Some("T") {
        return None;
    }

    let y = value.get(0..4)?.parse().ok()?;
    let m = value.get(4..6)?.parse().ok()?;
    let d = value.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}
