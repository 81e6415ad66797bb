//! Star-data enumeration and filtering for one sector.
//!
//! Stars are stored one file per star, named by their local coordinates:
//! exactly four digits where the first two are the column (01-32) and the
//! last two the row (01-40), plus the format's extension.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::grid::LocalCoord;

/// A star appears on the surveyed map only when its surveyIndex exceeds this.
pub const SURVEY_INDEX_THRESHOLD: i64 = 2;

/// Star-data file flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFileFormat {
    /// Bare `.txt` files; presence alone plots the star.
    Text,
    /// `.json` records carrying a surveyIndex field that gates plotting.
    Json,
}

impl StarFileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            StarFileFormat::Text => "txt",
            StarFileFormat::Json => "json",
        }
    }
}

/// Outcome of parsing a star-data file name that matched the digit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFileName {
    InRange(LocalCoord),
    /// Matched the pattern but a coordinate falls outside the sector.
    OutOfRange { x: u32, y: u32 },
}

/// Parse a star-data file name for the given format. Names that do not match
/// the four-digit pattern at all return None and are not worth reporting.
pub fn parse_star_file_name(file_name: &str, format: StarFileFormat) -> Option<StarFileName> {
    let pattern = Regex::new(&format!(r"^\d{{4}}\.{}$", format.extension()))
        .expect("star file pattern must compile");
    if !pattern.is_match(file_name) {
        return None;
    }

    // Fixed-width digit slices; the pattern guarantees both parse.
    let x: u32 = file_name[0..2].parse().ok()?;
    let y: u32 = file_name[2..4].parse().ok()?;

    Some(match LocalCoord::new(x, y) {
        Some(coord) => StarFileName::InRange(coord),
        None => StarFileName::OutOfRange { x, y },
    })
}

/// Extract the surveyIndex field from a star record by scanning its lines for
/// the first match of the key. Records without one default to 0, which sits
/// below the plotting threshold.
pub fn read_survey_index(path: &Path) -> Result<i64> {
    let key = Regex::new(r#""surveyIndex"\s*:\s*(-?\d+)"#)
        .expect("surveyIndex pattern must compile");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read star record: {}", path.display()))?;

    for line in contents.lines() {
        if let Some(captures) = key.captures(line) {
            return captures[1]
                .parse()
                .with_context(|| format!("Bad surveyIndex in {}", path.display()));
        }
    }
    Ok(0)
}

/// Enumerate a sector's star-data directory and return the local coordinate of
/// every star that should be plotted, in file-name order. Non-matching names
/// are ignored silently; matching names with out-of-range coordinates are
/// logged and skipped. Json records must clear the surveyIndex threshold.
pub fn collect_sector_stars(sector_dir: &Path, format: StarFileFormat) -> Result<Vec<LocalCoord>> {
    let mut names: Vec<String> = fs::read_dir(sector_dir)
        .with_context(|| format!("Failed to read star data directory: {}", sector_dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    let mut stars = Vec::new();
    for name in names {
        match parse_star_file_name(&name, format) {
            None => continue,
            Some(StarFileName::OutOfRange { .. }) => {
                tracing::warn!("Invalid coordinates in file name: {}", name);
            }
            Some(StarFileName::InRange(coord)) => {
                if format == StarFileFormat::Json {
                    let index = read_survey_index(&sector_dir.join(&name))?;
                    if index <= SURVEY_INDEX_THRESHOLD {
                        continue;
                    }
                }
                stars.push(coord);
            }
        }
    }
    Ok(stars)
}
