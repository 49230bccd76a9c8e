use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use weekcal_core::{generate, generate_ics, parse, GenerationConfig, WeekLetter};

use crate::colors::load_subject_colors;
use crate::commands::{read_input, EMPTY_TIMETABLE_HINT};

pub fn run(
    input: &str,
    start_date: NaiveDate,
    cycles: u32,
    first_week: WeekLetter,
    split_periods: bool,
    colors: Option<PathBuf>,
    output: PathBuf,
) -> Result<()> {
    let text = read_input(input)?;
    let timetable = parse(&text);

    if timetable.is_empty() {
        bail!("{EMPTY_TIMETABLE_HINT}");
    }

    let config = GenerationConfig {
        start_date,
        cycle_count: cycles,
        first_week,
        merge_multi_period: !split_periods,
        subject_colors: load_subject_colors(colors.as_deref())?,
    };

    // Serialize fully before touching the output path, so a failed run
    // never leaves a partial .ics file behind.
    let events = generate(&timetable, &config)?;
    let ics = generate_ics(&events);

    if output == Path::new("-") {
        print!("{ics}");
        return Ok(());
    }

    fs::write(&output, &ics).with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "{} {} ({} events, {} cycles starting {})",
        "Wrote".green(),
        output.display(),
        events.len(),
        cycles,
        start_date
    );
    Ok(())
}
