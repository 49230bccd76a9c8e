//! ICS document generation.

mod generate;

pub use generate::generate_ics;
