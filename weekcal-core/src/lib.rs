//! Timetable-to-calendar conversion for schools on an alternating
//! Week A / Week B rotation.
//!
//! The pipeline is three pure functions composed in sequence:
//! raw pasted text → [`parse`] → [`Timetable`] → [`generate`] →
//! events → [`generate_ics`] → an `.ics` document. No I/O, no shared
//! state; callers can re-run any stage freely.

pub mod error;
pub mod generate;
pub mod ics;
pub mod parse;
pub mod periods;
pub mod timetable;

pub use error::{WeekcalError, WeekcalResult};
pub use generate::{generate, CalendarEvent, GenerationConfig};
pub use ics::generate_ics;
pub use parse::parse;
pub use timetable::{ScheduleBlock, Timetable, WeekLetter, Weekday};
