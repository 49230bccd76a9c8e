//! Terminal rendering for parsed timetables.

use owo_colors::OwoColorize;
use weekcal_core::timetable::{ScheduleBlock, Timetable, WeekLetter};

/// Render both weeks of a timetable for a quick visual check before
/// generating the calendar.
pub fn render_timetable(timetable: &Timetable) -> String {
    let mut lines = Vec::new();

    for week in [WeekLetter::A, WeekLetter::B] {
        let schedule = timetable.week(week);
        if schedule.is_empty() {
            continue;
        }

        lines.push(format!("{}", format!("Week {week}").bold()));
        for day in schedule.days() {
            lines.push(format!("  {}", day.day.underline()));
            for block in &day.blocks {
                lines.push(format!("    {}", render_block(block)));
            }
        }
        lines.push(String::new());
    }

    let subjects = timetable.subjects();
    lines.push(format!(
        "{}",
        format!("{} subjects: {}", subjects.len(), subjects.join(", ")).dimmed()
    ));
    lines.push(String::new());

    lines.join("\n")
}

fn render_block(block: &ScheduleBlock) -> String {
    format!(
        "{:<10} {} {} {}",
        block.periods_label(),
        format!("{} ({})", block.subject, block.code).green(),
        block.room.cyan(),
        block.teacher.dimmed(),
    )
}
