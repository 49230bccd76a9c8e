//! Structured timetable model.
//!
//! A [`Timetable`] holds one [`WeekSchedule`] per week letter. Days inside
//! a week are kept in the order they first appeared in the pasted text,
//! and event generation walks them in that same order, so the model uses
//! a `Vec` rather than a map keyed by weekday.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which half of the fortnightly rotation a schedule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekLetter {
    A,
    B,
}

impl WeekLetter {
    /// The other half of the rotation.
    pub fn opposite(self) -> Self {
        match self {
            WeekLetter::A => WeekLetter::B,
            WeekLetter::B => WeekLetter::A,
        }
    }
}

impl fmt::Display for WeekLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekLetter::A => write!(f, "A"),
            WeekLetter::B => write!(f, "B"),
        }
    }
}

impl FromStr for WeekLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(WeekLetter::A),
            "B" | "b" => Ok(WeekLetter::B),
            other => Err(format!("Invalid week letter '{other}' (expected A or B)")),
        }
    }
}

/// School days, Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Days offset from the Monday that starts a cycle.
    pub fn day_offset(self) -> i64 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Case-insensitive match against the full weekday name.
    pub fn parse_name(s: &str) -> Option<Weekday> {
        let day = match s.trim().to_ascii_lowercase().as_str() {
            "monday" => Weekday::Monday,
            "tuesday" => Weekday::Tuesday,
            "wednesday" => Weekday::Wednesday,
            "thursday" => Weekday::Thursday,
            "friday" => Weekday::Friday,
            _ => return None,
        };
        Some(day)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One or more consecutive identical class rows merged into a single
/// multi-period entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub subject: String,
    pub code: String,
    pub teacher: String,
    pub room: String,
    /// Period codes in the order they appeared, assumed contiguous.
    pub periods: Vec<String>,
}

impl ScheduleBlock {
    /// Loose heuristic: anything whose subject mentions "pause" gets the
    /// shortened pause timing when it runs through P8.
    pub fn is_pause(&self) -> bool {
        self.subject.to_lowercase().contains("pause")
    }

    /// Human-readable period list, e.g. "P1, P2".
    pub fn periods_label(&self) -> String {
        self.periods.join(", ")
    }
}

/// The blocks scheduled on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub blocks: Vec<ScheduleBlock>,
}

/// The days of one week letter, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

impl WeekSchedule {
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// No blocks on any day. Days that appeared as bare headings with no
    /// class rows underneath don't count as data.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.blocks.is_empty())
    }

    /// Find-or-insert the entry for a day, preserving first-seen order.
    pub(crate) fn day_entry(&mut self, day: Weekday) -> &mut DaySchedule {
        match self.days.iter().position(|d| d.day == day) {
            Some(idx) => &mut self.days[idx],
            None => {
                self.days.push(DaySchedule {
                    day,
                    blocks: Vec::new(),
                });
                let idx = self.days.len() - 1;
                &mut self.days[idx]
            }
        }
    }
}

/// A full fortnightly timetable: one schedule per week letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    #[serde(rename = "A")]
    pub a: WeekSchedule,
    #[serde(rename = "B")]
    pub b: WeekSchedule,
}

impl Timetable {
    pub fn week(&self, letter: WeekLetter) -> &WeekSchedule {
        match letter {
            WeekLetter::A => &self.a,
            WeekLetter::B => &self.b,
        }
    }

    pub fn week_mut(&mut self, letter: WeekLetter) -> &mut WeekSchedule {
        match letter {
            WeekLetter::A => &mut self.a,
            WeekLetter::B => &mut self.b,
        }
    }

    /// True when parsing produced no class rows at all, in either week.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    /// All distinct subject names across both weeks, sorted. This is the
    /// set users assign colors to.
    pub fn subjects(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        for week in [&self.a, &self.b] {
            for day in week.days() {
                for block in &day.blocks {
                    set.insert(block.subject.clone());
                }
            }
        }
        set.into_iter().collect()
    }
}
