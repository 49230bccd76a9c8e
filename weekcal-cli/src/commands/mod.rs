use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

pub mod generate;
pub mod preview;

/// Read the pasted timetable text from a file, or stdin for "-".
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read timetable from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read timetable from {path}"))
    }
}

/// What to tell the user when parsing found nothing usable.
pub const EMPTY_TIMETABLE_HINT: &str = "No timetable data found. Paste the text with its \
\"Week A\"/\"Week B\" and weekday headings intact, with rows of \
period, subject, code, teacher and room separated by tabs.";
