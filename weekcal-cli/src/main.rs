mod colors;
mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use weekcal_core::WeekLetter;

#[derive(Parser)]
#[command(name = "weekcal")]
#[command(about = "Turn a pasted Week A/B school timetable into an .ics calendar file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a timetable and show what was understood
    Preview {
        /// Timetable text file ("-" for stdin)
        input: String,

        /// Emit the parsed timetable as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Parse a timetable and write the .ics calendar
    Generate {
        /// Timetable text file ("-" for stdin)
        input: String,

        /// First day of cycle 0 (YYYY-MM-DD, should be a Monday)
        #[arg(short, long)]
        start_date: NaiveDate,

        /// Number of week cycles to generate (1-52)
        #[arg(short, long, default_value_t = 4)]
        cycles: u32,

        /// Week letter of the first cycle
        #[arg(short, long, default_value = "A")]
        first_week: WeekLetter,

        /// One event per period instead of merged multi-period blocks
        #[arg(long)]
        split_periods: bool,

        /// TOML file with a [colors] table of subject = "#hex" entries
        /// (default: ~/.config/weekcal/colors.toml, if present)
        #[arg(long)]
        colors: Option<PathBuf>,

        /// Output path ("-" for stdout)
        #[arg(short, long, default_value = "timetable.ics")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { input, json } => commands::preview::run(&input, json),
        Commands::Generate {
            input,
            start_date,
            cycles,
            first_week,
            split_periods,
            colors,
            output,
        } => commands::generate::run(
            &input,
            start_date,
            cycles,
            first_week,
            split_periods,
            colors,
            output,
        ),
    }
}
