//! Subject color configuration.
//!
//! Colors live in a small TOML file:
//!
//! ```toml
//! [colors]
//! Physics = "#4285f4"
//! Maths = "#0b8043"
//! ```
//!
//! Subjects not listed simply get no color line in the generated ICS.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize, Default)]
struct ColorsFile {
    #[serde(default)]
    colors: HashMap<String, String>,
}

/// Default location: ~/.config/weekcal/colors.toml
fn default_colors_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("weekcal").join("colors.toml"))
}

/// Load the subject color map. An explicitly given file must exist and
/// parse; the default location is optional and skipped when absent.
pub fn load_subject_colors(path: Option<&Path>) -> Result<HashMap<String, String>> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_colors_path() {
            Some(p) => (p, false),
            None => return Ok(HashMap::new()),
        },
    };

    if !explicit && !path.exists() {
        return Ok(HashMap::new());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read colors file {}", path.display()))?;
    let parsed: ColorsFile = toml::from_str(&raw)
        .with_context(|| format!("Invalid colors file {}", path.display()))?;
    Ok(parsed.colors)
}
