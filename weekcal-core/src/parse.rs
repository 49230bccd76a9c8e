//! Parser for pasted timetable text.
//!
//! The input is whatever a student copies out of their school portal:
//! tab- or multi-space-delimited rows under "Week A"/"Week B" and weekday
//! headings. The grammar is deliberately lenient; lines that don't match
//! anything are dropped rather than rejected, so a stray footer or page
//! number never fails the import.

use regex::Regex;

use crate::timetable::{ScheduleBlock, Timetable, WeekLetter, Weekday};

/// One data line as split from the text. Only lives until the merge pass.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClassRow {
    period: String,
    subject: String,
    code: String,
    teacher: String,
    room: String,
}

/// Cursor for the line loop: the most recent week/day headings.
#[derive(Debug, Default, Clone, Copy)]
struct ParserState {
    current_week: Option<WeekLetter>,
    current_day: Option<Weekday>,
}

/// The rows collected under one (week, day) heading pair, in input order.
struct DayRows {
    week: WeekLetter,
    day: Weekday,
    rows: Vec<ClassRow>,
}

/// Parse pasted timetable text into a structured [`Timetable`].
///
/// Never fails: malformed lines are skipped and the worst case is an
/// empty result (check [`Timetable::is_empty`]). Rows seen before any
/// "Week" heading default to week A; rows seen before any weekday
/// heading default to Monday.
pub fn parse(text: &str) -> Timetable {
    let week_re = Regex::new(r"(?i)^week\s*([ab])\b").unwrap();
    let field_re = Regex::new(r"\t|\s{2,}").unwrap();

    let mut state = ParserState::default();
    let mut days: Vec<DayRows> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // "Week A" / "Week B" heading: switch weeks, forget the day.
        if let Some(caps) = week_re.captures(trimmed) {
            let letter = if caps[1].eq_ignore_ascii_case("a") {
                WeekLetter::A
            } else {
                WeekLetter::B
            };
            state.current_week = Some(letter);
            state.current_day = None;
            continue;
        }

        // Bare weekday heading: open that day (possibly left empty).
        if let Some(day) = Weekday::parse_name(trimmed) {
            let week = *state.current_week.get_or_insert(WeekLetter::A);
            state.current_day = Some(day);
            day_entry(&mut days, week, day);
            continue;
        }

        // Data row: period, subject, code, teacher, room. Extra trailing
        // fields are ignored; fewer than five means the line is not a row.
        let fields: Vec<&str> = field_re
            .split(line)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() >= 5 {
            let week = *state.current_week.get_or_insert(WeekLetter::A);
            let day = *state.current_day.get_or_insert(Weekday::Monday);
            day_entry(&mut days, week, day).rows.push(ClassRow {
                period: fields[0].to_string(),
                subject: fields[1].to_string(),
                code: fields[2].to_string(),
                teacher: fields[3].to_string(),
                room: fields[4].to_string(),
            });
        }
    }

    let mut timetable = Timetable::default();
    for day_rows in days {
        let entry = timetable
            .week_mut(day_rows.week)
            .day_entry(day_rows.day);
        entry.blocks = merge_rows(day_rows.rows);
    }
    timetable
}

fn day_entry(days: &mut Vec<DayRows>, week: WeekLetter, day: Weekday) -> &mut DayRows {
    match days.iter().position(|d| d.week == week && d.day == day) {
        Some(idx) => &mut days[idx],
        None => {
            days.push(DayRows {
                week,
                day,
                rows: Vec::new(),
            });
            let idx = days.len() - 1;
            &mut days[idx]
        }
    }
}

/// Collapse consecutive rows with identical (subject, code, teacher, room)
/// into multi-period blocks. Fields were trimmed at split time, so plain
/// equality is whitespace-insensitive already.
fn merge_rows(rows: Vec<ClassRow>) -> Vec<ScheduleBlock> {
    let mut blocks: Vec<ScheduleBlock> = Vec::new();
    let mut open: Option<ScheduleBlock> = None;

    for row in rows {
        match open.as_mut() {
            Some(block)
                if block.subject == row.subject
                    && block.code == row.code
                    && block.teacher == row.teacher
                    && block.room == row.room =>
            {
                block.periods.push(row.period);
            }
            _ => {
                if let Some(done) = open.take() {
                    blocks.push(done);
                }
                open = Some(ScheduleBlock {
                    subject: row.subject,
                    code: row.code,
                    teacher: row.teacher,
                    room: row.room,
                    periods: vec![row.period],
                });
            }
        }
    }

    if let Some(done) = open {
        blocks.push(done);
    }
    blocks
}
