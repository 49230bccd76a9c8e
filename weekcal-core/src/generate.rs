//! Calendar event generation.
//!
//! Walks a [`Timetable`] across N week cycles from a start date,
//! alternating the week letter each cycle, and resolves every schedule
//! block into dated, timed events ready for ICS serialization.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{WeekcalError, WeekcalResult};
use crate::periods::{resolve_spans, MinuteSpan};
use crate::timetable::{ScheduleBlock, Timetable, WeekLetter};

/// Upper bound on week cycles per run, a year's worth.
pub const MAX_CYCLE_COUNT: u32 = 52;

/// Everything the generator needs besides the timetable itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// First day of cycle 0. Should be a Monday; day offsets within each
    /// cycle are counted from it either way.
    pub start_date: NaiveDate,
    pub cycle_count: u32,
    pub first_week: WeekLetter,
    /// Merged: one event per block. Off: one event per period.
    pub merge_multi_period: bool,
    /// Subject name → opaque color token (e.g. a hex string). Subjects
    /// without an entry simply get no color line in the ICS output.
    #[serde(default)]
    pub subject_colors: HashMap<String, String>,
}

impl GenerationConfig {
    pub fn validate(&self) -> WeekcalResult<()> {
        if self.cycle_count < 1 || self.cycle_count > MAX_CYCLE_COUNT {
            return Err(WeekcalError::Config(format!(
                "cycle count must be between 1 and {MAX_CYCLE_COUNT}, got {}",
                self.cycle_count
            )));
        }
        Ok(())
    }
}

/// One dated, timed calendar entry. Produced here, consumed by the ICS
/// serializer, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Floating local date-times; no timezone is attached anywhere.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    pub location: String,
    pub description: String,
    /// Subject code, kept separate from the summary for UID derivation.
    pub code: String,
    pub color: Option<String>,
    pub week: WeekLetter,
}

/// Generate the full event sequence for `cycle_count` week cycles.
///
/// Emission order is (cycle, day-insertion-order, block order, span
/// order) — days come out in the order they appeared in the pasted text,
/// not calendar order, so the sequence is not necessarily chronological.
/// Fails with [`WeekcalError::UnknownPeriod`] if any block references a
/// period code missing from the time table; no partial output is kept.
pub fn generate(
    timetable: &Timetable,
    config: &GenerationConfig,
) -> WeekcalResult<Vec<CalendarEvent>> {
    config.validate()?;

    let mut events = Vec::new();
    for cycle in 0..config.cycle_count {
        let week = if cycle % 2 == 0 {
            config.first_week
        } else {
            config.first_week.opposite()
        };

        for day in timetable.week(week).days() {
            let offset = i64::from(cycle) * 7 + day.day.day_offset();
            let date = config.start_date + Duration::days(offset);

            for block in &day.blocks {
                push_block_events(&mut events, date, week, block, config)?;
            }
        }
    }
    Ok(events)
}

fn push_block_events(
    events: &mut Vec<CalendarEvent>,
    date: NaiveDate,
    week: WeekLetter,
    block: &ScheduleBlock,
    config: &GenerationConfig,
) -> WeekcalResult<()> {
    let spans = resolve_spans(&block.periods, block.is_pause(), config.merge_multi_period)?;

    if config.merge_multi_period {
        for span in spans {
            events.push(build_event(date, week, block, span, &block.periods_label(), config));
        }
    } else {
        // One span per period, in step with the period list.
        for (span, period) in spans.iter().zip(&block.periods) {
            events.push(build_event(date, week, block, *span, period, config));
        }
    }
    Ok(())
}

fn build_event(
    date: NaiveDate,
    week: WeekLetter,
    block: &ScheduleBlock,
    span: MinuteSpan,
    periods_label: &str,
    config: &GenerationConfig,
) -> CalendarEvent {
    CalendarEvent {
        start: at_minute(date, span.start),
        end: at_minute(date, span.end),
        summary: format!("{} ({})", block.subject, block.code),
        location: block.room.clone(),
        description: format!(
            "Teacher: {}\nPeriods: {}\nWeek: {}",
            block.teacher, periods_label, week
        ),
        code: block.code.clone(),
        color: config.subject_colors.get(&block.subject).cloned(),
        week,
    }
}

fn at_minute(date: NaiveDate, minute: u32) -> NaiveDateTime {
    // The period table tops out mid-afternoon, so this cannot leave the day.
    date.and_hms_opt(minute / 60, minute % 60, 0).unwrap()
}
