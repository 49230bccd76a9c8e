//! Serialization of calendar events to the ICS wire format.
//!
//! The writer owns every byte of the output: CRLF line endings, RFC 5545
//! TEXT escaping, folding at 75 octets, and UIDs derived from event
//! fields rather than the clock, so the same input always produces the
//! same document.

use chrono::{NaiveDateTime, Timelike};

use crate::generate::CalendarEvent;

const PRODID: &str = "-//weekcal//Timetable Generator//EN";
const CALENDAR_NAME: &str = "School Timetable";

/// Maximum content-line length before folding, per RFC 5545 §3.1.
const FOLD_LIMIT: usize = 75;

/// Serialize events into a complete VCALENDAR document.
///
/// `DTSTART`/`DTEND` are floating local date-times (no `Z`, no `TZID`):
/// calendar apps interpret them in the viewer's own zone.
pub fn generate_ics(events: &[CalendarEvent]) -> String {
    let mut ics = String::new();
    push_line(&mut ics, "BEGIN:VCALENDAR");
    push_line(&mut ics, "VERSION:2.0");
    push_line(&mut ics, &format!("PRODID:{PRODID}"));
    push_line(&mut ics, "CALSCALE:GREGORIAN");
    push_line(&mut ics, "METHOD:PUBLISH");
    push_line(&mut ics, &format!("X-WR-CALNAME:{CALENDAR_NAME}"));

    for event in events {
        write_vevent(&mut ics, event);
    }

    push_line(&mut ics, "END:VCALENDAR");
    ics
}

fn write_vevent(ics: &mut String, event: &CalendarEvent) {
    push_line(ics, "BEGIN:VEVENT");
    push_line(ics, &format!("UID:{}", event_uid(event)));
    push_line(ics, &format!("SUMMARY:{}", escape_text(&event.summary)));
    push_line(ics, &format!("DTSTART:{}", format_datetime(event.start)));
    push_line(ics, &format!("DTEND:{}", format_datetime(event.end)));
    push_line(ics, &format!("LOCATION:{}", escape_text(&event.location)));
    if let Some(color) = &event.color {
        push_line(ics, &format!("X-COLOR:{color}"));
    }
    push_line(
        ics,
        &format!("DESCRIPTION:{}", escape_text(&event.description)),
    );
    push_line(ics, "STATUS:CONFIRMED");
    push_line(ics, "END:VEVENT");
}

/// Stable UID from the event's date, subject code, and start minute.
fn event_uid(event: &CalendarEvent) -> String {
    let start_minute = event.start.hour() * 60 + event.start.minute();
    format!(
        "{}-{}-{}@weekcal",
        event.start.format("%Y%m%d"),
        event.code,
        start_minute
    )
}

/// Compact floating local form: `YYYYMMDDTHHMMSS`.
fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// TEXT value escaping per RFC 5545 §3.3.11. Newlines become the literal
/// two characters `\n`; carriage returns are dropped.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

fn push_line(ics: &mut String, line: &str) {
    fold_line(ics, line);
    ics.push_str("\r\n");
}

/// Fold a content line at 75 octets, continuation lines led by a space.
/// Splits on char boundaries, so a multi-byte char never straddles a fold.
fn fold_line(out: &mut String, line: &str) {
    if line.len() <= FOLD_LIMIT {
        out.push_str(line);
        return;
    }

    let mut budget = FOLD_LIMIT;
    for ch in line.chars() {
        if ch.len_utf8() > budget {
            out.push_str("\r\n ");
            budget = FOLD_LIMIT - 1;
        }
        out.push(ch);
        budget -= ch.len_utf8();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, GenerationConfig};
    use crate::parse::parse;
    use crate::timetable::WeekLetter;
    use chrono::NaiveDate;
    use icalendar::parser::{read_calendar, unfold};
    use std::collections::HashMap;

    const PHYSICS_TWO_PERIODS: &str = "Week A\nMonday\n\
        P1\tPhysics\tPPHY.B\tMr Smith\tG4\n\
        P2\tPhysics\tPPHY.B\tMr Smith\tG4\n";

    fn physics_events(colors: &[(&str, &str)]) -> Vec<CalendarEvent> {
        let config = GenerationConfig {
            start_date: NaiveDate::from_ymd_opt(2025, 11, 17).unwrap(),
            cycle_count: 1,
            first_week: WeekLetter::A,
            merge_multi_period: true,
            subject_colors: colors
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        generate(&parse(PHYSICS_TWO_PERIODS), &config).unwrap()
    }

    #[test]
    fn test_document_envelope() {
        let ics = generate_ics(&physics_events(&[]));

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("VERSION:2.0\r\n"));
        assert!(ics.contains("PRODID:-//weekcal//Timetable Generator//EN\r\n"));
        assert!(ics.contains("CALSCALE:GREGORIAN\r\n"));
        assert!(ics.contains("X-WR-CALNAME:School Timetable\r\n"));
    }

    #[test]
    fn test_vevent_fields() {
        let ics = generate_ics(&physics_events(&[]));

        assert!(ics.contains("UID:20251117-PPHY.B-525@weekcal\r\n"));
        assert!(ics.contains("SUMMARY:Physics (PPHY.B)\r\n"));
        assert!(ics.contains("DTSTART:20251117T084500\r\n"));
        assert!(ics.contains("DTEND:20251117T100200\r\n"));
        assert!(ics.contains("LOCATION:G4\r\n"));
        assert!(ics.contains("STATUS:CONFIRMED\r\n"));
    }

    #[test]
    fn test_datetimes_are_floating_local() {
        let ics = generate_ics(&physics_events(&[]));

        for line in ics.lines() {
            if let Some(value) = line
                .strip_prefix("DTSTART:")
                .or_else(|| line.strip_prefix("DTEND:"))
            {
                assert!(!value.ends_with('Z'), "unexpected UTC marker: {line}");
            }
            assert!(!line.contains("TZID"), "unexpected TZID: {line}");
        }
    }

    #[test]
    fn test_description_newlines_are_escaped() {
        let ics = generate_ics(&physics_events(&[]));

        assert!(ics.contains(r"DESCRIPTION:Teacher: Mr Smith\nPeriods: P1\, P2\nWeek: A"));
    }

    #[test]
    fn test_color_line_only_for_colored_subjects() {
        let plain = generate_ics(&physics_events(&[]));
        assert!(!plain.contains("X-COLOR"));

        let colored = generate_ics(&physics_events(&[("Physics", "#4285f4")]));
        assert!(colored.contains("X-COLOR:#4285f4\r\n"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let events = physics_events(&[("Physics", "#4285f4")]);
        assert_eq!(generate_ics(&events), generate_ics(&events));
    }

    #[test]
    fn test_empty_event_list_is_still_a_valid_envelope() {
        let ics = generate_ics(&[]);
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
        let unfolded = unfold(&ics);
        let parsed = read_calendar(&unfolded).expect("valid calendar");
        assert!(parsed.components.is_empty());
    }

    #[test]
    fn test_generated_document_parses_back() {
        let ics = generate_ics(&physics_events(&[("Physics", "#4285f4")]));
        let unfolded = unfold(&ics);
        let parsed = read_calendar(&unfolded).expect("valid calendar");

        let vevents: Vec<_> = parsed
            .components
            .iter()
            .filter(|c| c.name == "VEVENT")
            .collect();
        assert_eq!(vevents.len(), 1);
        let vevent = vevents[0];
        assert_eq!(
            vevent.find_prop("UID").unwrap().val.as_ref(),
            "20251117-PPHY.B-525@weekcal"
        );
        assert_eq!(
            vevent.find_prop("DTSTART").unwrap().val.as_ref(),
            "20251117T084500"
        );
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d\ne"), r"a\,b\;c\\d\ne");
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("crlf\r\nkept as n"), r"crlf\nkept as n");
    }

    #[test]
    fn test_long_lines_are_folded_with_continuation_space() {
        let mut events = physics_events(&[]);
        events[0].description = "x".repeat(200);
        let ics = generate_ics(&events);

        let description_start = ics.find("DESCRIPTION:").unwrap();
        let folded = &ics[description_start..];
        assert!(folded.contains("\r\n x"));
        for line in ics.lines() {
            assert!(line.len() <= FOLD_LIMIT, "line too long: {line}");
        }

        // Unfolding restores the original content.
        let unfolded = unfold(&ics);
        let parsed = read_calendar(&unfolded).expect("valid calendar");
        let vevent = parsed.components.iter().find(|c| c.name == "VEVENT").unwrap();
        assert_eq!(
            vevent.find_prop("DESCRIPTION").unwrap().val.as_ref(),
            "x".repeat(200)
        );
    }
}
