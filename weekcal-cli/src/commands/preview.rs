use anyhow::Result;
use weekcal_core::parse;

use crate::commands::{read_input, EMPTY_TIMETABLE_HINT};
use crate::render::render_timetable;

pub fn run(input: &str, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let timetable = parse(&text);

    // Not an error: the parser is lenient by design, an empty result just
    // means the paste needs fixing.
    if timetable.is_empty() {
        println!("{EMPTY_TIMETABLE_HINT}");
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&timetable)?);
        return Ok(());
    }

    print!("{}", render_timetable(&timetable));
    Ok(())
}
