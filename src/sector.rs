//! Sector definition loading.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One sector definition, loaded from a `.yaml` file in the definitions
/// directory. `name` doubles as the sector's star-data subdirectory name.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorConfig {
    pub name: String,
    /// Grid column.
    #[serde(rename = "X")]
    pub x: i32,
    /// Grid row.
    #[serde(rename = "Y")]
    pub y: i32,
    /// Short label used on the abbreviated map.
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl SectorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sector definition: {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse sector definition: {}", path.display()))
    }
}

/// Map label for one sector, collected while sectors are plotted and consumed
/// by the compositing stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorLabel {
    pub grid_x: i32,
    pub grid_y: i32,
    pub text: String,
}

/// Load every `.yaml` sector definition under `dir`, sorted by file name so
/// repeated runs enumerate sectors in the same order on any filesystem.
pub fn load_sector_configs(dir: &Path) -> Result<Vec<SectorConfig>> {
    if !dir.is_dir() {
        anyhow::bail!("Folder does not exist: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    paths.sort();

    paths.iter().map(|path| SectorConfig::from_file(path)).collect()
}
